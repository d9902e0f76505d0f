use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// A fixture passed to the builder could not be serialized into a response body.
    #[error("Failed to serialize mock response body: {0}")]
    Serialize(#[from] serde_json::Error),
}
