//! Mock HTTP endpoints for the society API.
//!
//! Every endpoint answers with the `{ data, error }` envelope the portal expects and is
//! verified to have been called exactly `expected_requests` times.

use ::mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::api_path, fixtures::ApiFixtures};

/// Wraps `data` in a success envelope
pub fn envelope(data: Value) -> String {
    json!({ "data": data }).to_string()
}

/// Envelope carrying only an error message
pub fn error_envelope(message: &str) -> String {
    json!({ "error": message }).to_string()
}

impl<'a> ApiFixtures<'a> {
    /// GET `/api/<path>` returning `items`, whatever the query string.
    pub fn create_list_endpoint(
        &mut self,
        path: &str,
        items: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", api_path(path).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(items))
            .expect(expected_requests)
            .create()
    }

    /// GET `/api/<path>/<id>` returning a single record.
    pub fn create_record_endpoint(
        &mut self,
        path: &str,
        id: &str,
        record: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = api_path(&format!("{}/{}", path, id));

        self.server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(record))
            .expect(expected_requests)
            .create()
    }

    /// POST `/api/<path>` echoing `created` back.
    ///
    /// When `body` is given the request JSON must contain it (extra fields are allowed).
    pub fn create_create_endpoint(
        &mut self,
        path: &str,
        body: Option<Value>,
        created: Value,
        expected_requests: usize,
    ) -> Mock {
        let mut mock = self
            .server
            .mock("POST", api_path(path).as_str())
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(envelope(created))
            .expect(expected_requests);

        if let Some(body) = body {
            mock = mock.match_body(Matcher::PartialJson(body));
        }

        mock.create()
    }

    /// PATCH `/api/<path>/<id>`; `body` must be contained in the request JSON when given.
    pub fn create_update_endpoint(
        &mut self,
        path: &str,
        id: &str,
        body: Option<Value>,
        updated: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = api_path(&format!("{}/{}", path, id));

        let mut mock = self
            .server
            .mock("PATCH", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(updated))
            .expect(expected_requests);

        if let Some(body) = body {
            mock = mock.match_body(Matcher::PartialJson(body));
        }

        mock.create()
    }

    /// DELETE `/api/<path>/<id>` answering with an empty success envelope.
    pub fn create_delete_endpoint(&mut self, path: &str, id: &str, expected_requests: usize) -> Mock {
        let url = api_path(&format!("{}/{}", path, id));

        self.server
            .mock("DELETE", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(Value::Null))
            .expect(expected_requests)
            .create()
    }

    /// Multipart POST to `/api/<path>` answering with `data`.
    pub fn create_multipart_endpoint(
        &mut self,
        path: &str,
        data: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", api_path(path).as_str())
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(data))
            .expect(expected_requests)
            .create()
    }

    /// Multipart POST to `/api/<path>` reporting the stored file at `url`.
    pub fn create_upload_endpoint(&mut self, path: &str, url: &str, expected_requests: usize) -> Mock {
        self.create_multipart_endpoint(path, json!({ "url": url }), expected_requests)
    }

    /// Any route failing with `status` and an envelope error `message`.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, api_path(path).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_envelope(message))
            .expect(expected_requests)
            .create()
    }
}
