use std::marker::PhantomData;

use crate::client::{
    api::ApiClient, error::ApiError, resource::Resource, util::upload::FileUpload,
};

/// CRUD routes of one resource family
#[derive(Debug, Clone)]
pub struct ResourceApi<R: Resource> {
    client: ApiClient,
    query: Vec<(String, String)>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            query: Vec::new(),
            _resource: PhantomData,
        }
    }

    /// Adds a filter sent with every list request, e.g. `status=pending`
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// GET `/api/<list path>`
    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.client.get(R::LIST_PATH, &self.query).await
    }

    /// POST `/api/<path>`; returns the created record when the API echoes it
    pub async fn create(&self, form: &R::Form) -> Result<Option<R>, ApiError> {
        self.client.post(R::PATH, form).await
    }

    /// PATCH `/api/<path>/<id>`
    pub async fn update(&self, id: &str, form: &R::Form) -> Result<Option<R>, ApiError> {
        self.client.patch(&record_path::<R>(id), form).await
    }

    /// DELETE `/api/<path>/<id>`
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&record_path::<R>(id)).await
    }

    /// Uploads an image through the resource's upload route and returns its URL
    pub async fn upload_image(&self, file: &FileUpload) -> Result<String, ApiError> {
        let path = R::UPLOAD_PATH.ok_or(ApiError::UploadUnsupported(R::LABEL))?;

        self.client.upload(path, file, None).await
    }
}

fn record_path<R: Resource>(id: &str) -> String {
    format!("{}/{}", R::PATH, id)
}
