//! Files picked in the browser and the checks they pass before being uploaded.

use reqwest::multipart::Part;

use crate::client::error::ValidationError;

const PHOTO_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
const DOCUMENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "application/pdf"];

/// A file selected by the user, held in memory until it is uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates a file, guessing the content type from the file name when the browser did
    /// not provide one.
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type
            .filter(|content_type| !content_type.trim().is_empty())
            .or_else(|| {
                mime_guess::from_path(&name)
                    .first()
                    .map(|mime| mime.essence_str().to_string())
            })
            .unwrap_or_else(|| "application/octet-stream".to_string());

        Self {
            name,
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Converts the file into a multipart part.
    pub fn to_part(&self) -> Result<Part, reqwest::Error> {
        Part::bytes(self.bytes.clone())
            .file_name(self.name.clone())
            .mime_str(&self.content_type)
    }
}

/// What a file input accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Any `image/*` file (event, gallery and news images)
    Image,
    /// JPEG, PNG or WEBP only (applicant photo)
    Photo,
    /// JPEG, PNG, WEBP or PDF (supporting documents)
    Document,
}

impl UploadKind {
    pub fn accepts(&self, content_type: &str) -> bool {
        let content_type = content_type.trim().to_ascii_lowercase();

        match self {
            Self::Image => content_type.starts_with("image/"),
            Self::Photo => PHOTO_TYPES.contains(&content_type.as_str()),
            Self::Document => DOCUMENT_TYPES.contains(&content_type.as_str()),
        }
    }

    /// Value for the `accept` attribute of the file input
    pub fn accept_attr(&self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Photo => "image/jpeg,image/png,image/webp",
            Self::Document => "image/jpeg,image/png,image/webp,application/pdf",
        }
    }
}

/// Checks type then size; nothing is sent when either check fails.
pub fn validate_upload(
    file: &FileUpload,
    kind: UploadKind,
    max_bytes: u64,
) -> Result<(), ValidationError> {
    if !kind.accepts(&file.content_type) {
        return Err(match kind {
            UploadKind::Image => ValidationError::NotAnImage,
            UploadKind::Photo => ValidationError::UnsupportedImageType,
            UploadKind::Document => ValidationError::UnsupportedDocumentType,
        });
    }

    if file.size() > max_bytes {
        let max_mb = max_bytes / (1024 * 1024);

        return Err(match kind {
            UploadKind::Document => ValidationError::FileTooLarge { max_mb },
            UploadKind::Image | UploadKind::Photo => ValidationError::ImageTooLarge { max_mb },
        });
    }

    Ok(())
}
