use serde::{Deserialize, Serialize};

/// Envelope wrapping every response returned by the society API
///
/// A non-empty `error` is the only failure signal; `data` carries the payload on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// The error message reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Returns the error message when the API reported a non-empty one
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

/// Payload returned by the upload endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadDto {
    /// Public URL of the stored file
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_error_is_not_a_failure() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"data":"ok","error":"  "}"#).unwrap();

        assert_eq!(response.error_message(), None);
        assert_eq!(response.data.as_deref(), Some("ok"));
    }

    #[test]
    fn error_without_data() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"error":"Record not found"}"#).unwrap();

        assert_eq!(response.error_message(), Some("Record not found"));
        assert!(response.data.is_none());
    }
}
