//! Tests for the membership application workflow against a mock API.
//!
//! Covers public submission with its document rules, admin review of a stored
//! application, direct member creation and rejection.

mod review;
mod submit;

use society_portal::client::util::upload::FileUpload;

pub fn jpeg(name: &str) -> FileUpload {
    FileUpload::new(name, Some("image/jpeg".to_string()), vec![0xFF, 0xD8, 0xFF, 0xE0])
}

pub fn pdf(name: &str) -> FileUpload {
    FileUpload::new(name, Some("application/pdf".to_string()), b"%PDF-1.7".to_vec())
}
