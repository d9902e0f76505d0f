//! Declarative setup of the mock society API.
//!
//! Endpoints are queued on the builder and registered on a fresh mock server during
//! `build()`, in the order they were added. mockito answers a request with the first
//! matching mock that still expects calls, so a failing endpoint added before a
//! succeeding one for the same route is hit first.

use ::mockito::{Mock, ServerGuard};
use serde::Serialize;
use serde_json::Value;

use crate::{error::TestError, fixtures::ApiFixtures, TestContext};

type MockBuilder = Box<dyn FnOnce(&mut ApiFixtures<'_>) -> Mock>;

fn boxed(endpoint: impl FnOnce(&mut ApiFixtures<'_>) -> Mock + 'static) -> MockBuilder {
    Box::new(endpoint)
}

/// Builder for a mock API server with pre-registered endpoints.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_list_endpoint("car-stickers", &[factory::car_sticker("1", "Rahim", "DHA-1234")], 1)
///     .with_delete_endpoint("car-stickers", "1", 1)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    endpoints: Vec<Result<MockBuilder, serde_json::Error>>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, endpoint: impl FnOnce(&mut ApiFixtures<'_>) -> Mock + 'static) -> Self {
        self.endpoints.push(Ok(boxed(endpoint)));
        self
    }

    fn push_serialized<T: Serialize + ?Sized>(
        mut self,
        value: &T,
        endpoint: impl FnOnce(&mut ApiFixtures<'_>, Value) -> Mock + 'static,
    ) -> Self {
        let queued = serde_json::to_value(value)
            .map(|value| boxed(move |api| endpoint(api, value)));
        self.endpoints.push(queued);
        self
    }

    /// GET `/api/<path>` returning `items`.
    pub fn with_list_endpoint<T: Serialize>(
        self,
        path: &str,
        items: &[T],
        expected_requests: usize,
    ) -> Self {
        let path = path.to_string();

        self.push_serialized(items, move |api, items| {
            api.create_list_endpoint(&path, items, expected_requests)
        })
    }

    /// GET `/api/<path>/<id>` returning `record`.
    pub fn with_record_endpoint<T: Serialize>(
        self,
        path: &str,
        id: &str,
        record: &T,
        expected_requests: usize,
    ) -> Self {
        let (path, id) = (path.to_string(), id.to_string());

        self.push_serialized(record, move |api, record| {
            api.create_record_endpoint(&path, &id, record, expected_requests)
        })
    }

    /// POST `/api/<path>` answering with `created`.
    pub fn with_create_endpoint<T: Serialize>(
        self,
        path: &str,
        created: &T,
        expected_requests: usize,
    ) -> Self {
        let path = path.to_string();

        self.push_serialized(created, move |api, created| {
            api.create_create_endpoint(&path, None, created, expected_requests)
        })
    }

    /// POST `/api/<path>` that only matches when the JSON body contains `body`.
    pub fn with_create_endpoint_matching<B: Serialize>(
        self,
        path: &str,
        body: &B,
        expected_requests: usize,
    ) -> Self {
        let path = path.to_string();

        self.push_serialized(body, move |api, body| {
            api.create_create_endpoint(&path, Some(body), Value::Null, expected_requests)
        })
    }

    /// PATCH `/api/<path>/<id>`; the request JSON must contain `body`.
    pub fn with_update_endpoint<B: Serialize>(
        self,
        path: &str,
        id: &str,
        body: &B,
        expected_requests: usize,
    ) -> Self {
        let (path, id) = (path.to_string(), id.to_string());

        self.push_serialized(body, move |api, body| {
            api.create_update_endpoint(&path, &id, Some(body), Value::Null, expected_requests)
        })
    }

    pub fn with_delete_endpoint(self, path: &str, id: &str, expected_requests: usize) -> Self {
        let (path, id) = (path.to_string(), id.to_string());

        self.push(move |api| api.create_delete_endpoint(&path, &id, expected_requests))
    }

    /// Multipart POST to `/api/<path>` answering with an empty success envelope.
    pub fn with_multipart_endpoint(self, path: &str, expected_requests: usize) -> Self {
        let path = path.to_string();

        self.push(move |api| api.create_multipart_endpoint(&path, Value::Null, expected_requests))
    }

    /// Multipart POST to `/api/<path>` reporting the stored file at `url`.
    pub fn with_upload_endpoint(self, path: &str, url: &str, expected_requests: usize) -> Self {
        let (path, url) = (path.to_string(), url.to_string());

        self.push(move |api| api.create_upload_endpoint(&path, &url, expected_requests))
    }

    /// `method` on `/api/<path>` failing with `status` and envelope error `message`.
    pub fn with_error_endpoint(
        self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Self {
        let (method, path, message) = (method.to_string(), path.to_string(), message.to_string());

        self.push(move |api| {
            api.create_error_endpoint(&method, &path, status, &message, expected_requests)
        })
    }

    /// Add a custom mock endpoint with direct access to the mock server.
    ///
    /// Use this for responses not covered by the helpers, such as malformed bodies.
    pub fn with_mock_endpoint<F>(self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.push(move |api| setup(&mut *api.server))
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock server ready for requests
    /// - `Err(TestError::Serialize)` - A fixture could not be turned into a response body
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await;

        for endpoint in self.endpoints {
            let endpoint = endpoint?;
            let mock = endpoint(&mut context.api());
            context.mocks.push(mock);
        }

        Ok(context)
    }
}
