//! HTTP client for the society API.
//!
//! Every route lives under `/api/<resource>` and answers with the `{ data, error }` envelope.
//! [`ApiClient`] handles transport and envelope decoding; [`ResourceApi`] and
//! [`MembershipApi`] add the routes of one resource family.

pub mod membership;
pub mod resource;

use dioxus_logger::tracing;
use reqwest::multipart::Form;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{config::Config, error::ApiError, util::upload::FileUpload},
    model::api::{ApiResponse, UploadDto},
};

pub use self::{membership::MembershipApi, resource::ResourceApi};

/// Shared HTTP client for the society API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    /// Absolute URL of an API route, e.g. `events/42` becomes `<origin>/api/events/42`
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a route and return its `data` payload
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path = %path, "GET");

        let response = self.http.get(self.url(path)).query(query).send().await?;

        read_envelope(response)
            .await?
            .ok_or_else(|| ApiError::MissingData(path.to_string()))
    }

    /// POST a JSON body; the API may or may not echo the created record
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path = %path, "POST");

        let response = self.http.post(self.url(path)).json(body).send().await?;

        read_envelope(response).await
    }

    /// PATCH a JSON body
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path = %path, "PATCH");

        let response = self.http.patch(self.url(path)).json(body).send().await?;

        read_envelope(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path = %path, "DELETE");

        let response = self.http.delete(self.url(path)).send().await?;

        read_envelope::<serde_json::Value>(response).await?;

        Ok(())
    }

    /// POST a `multipart/form-data` body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(path = %path, "POST multipart");

        let response = self.http.post(self.url(path)).multipart(form).send().await?;

        read_envelope(response).await
    }

    /// Uploads a single file under the `file` field and returns its public URL.
    ///
    /// `folder` namespaces the stored file on upload routes that support it.
    pub async fn upload(
        &self,
        path: &str,
        file: &FileUpload,
        folder: Option<&str>,
    ) -> Result<String, ApiError> {
        let mut form = Form::new().part("file", file.to_part()?);
        if let Some(folder) = folder {
            form = form.text("folder", folder.to_string());
        }

        let uploaded: UploadDto = self
            .post_multipart(path, form)
            .await?
            .ok_or_else(|| ApiError::MissingData(path.to_string()))?;

        tracing::debug!(file = %file.name, url = %uploaded.url, "Uploaded file");

        Ok(uploaded.url)
    }
}

/// Decodes the `{ data, error }` envelope.
///
/// A non-empty `error` wins over everything else; the HTTP status is only consulted when
/// the envelope does not carry an error.
async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if body.trim().is_empty() {
        return if status.is_success() {
            Ok(None)
        } else {
            Err(ApiError::Status(status.as_u16()))
        };
    }

    let envelope: ApiResponse<serde_json::Value> = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => return Err(ApiError::Status(status.as_u16())),
        Err(e) => return Err(ApiError::Decode(e)),
    };

    if let Some(message) = envelope.error_message() {
        return Err(ApiError::Api(message.to_string()));
    }

    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    match envelope.data {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
    }
}
