//! Society API error types.
//!
//! The API signals failure through a non-empty `error` field in its envelope. HTTP status
//! codes are only consulted when no envelope error is present.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Error message reported by the API in the response envelope.
    #[error("{0}")]
    Api(String),
    /// Response was not successful and carried no envelope error.
    #[error("Request failed with status {0}")]
    Status(u16),
    /// Successful response without the expected `data` payload.
    #[error("Response from {0} did not contain any data")]
    MissingData(String),
    /// Response body could not be decoded.
    #[error("Failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Request could not be sent or the response could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// Upload attempted for a resource without an upload endpoint.
    #[error("Resource {0} does not accept file uploads")]
    UploadUnsupported(&'static str),
}
