//! Client-side validation errors.
//!
//! These are raised before any request is sent and their messages are shown next to the
//! offending control or in the error banner.

use thiserror::Error;

use crate::client::membership::DocumentKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} is required")]
    MissingDocument(DocumentKind),
    #[error("{0} must be assigned before approval")]
    MissingAdminField(&'static str),
    #[error("Please accept the declaration to continue")]
    DeclarationNotAccepted,
    #[error("{0} must be a valid date")]
    InvalidDate(&'static str),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("End date must be on or after the start date")]
    InvalidDateRange,
    #[error("Status cannot change from {from} to {to}")]
    InvalidStatusTransition { from: &'static str, to: &'static str },
    #[error("Please select an image file")]
    NotAnImage,
    #[error("Only JPG, PNG or WEBP images are allowed")]
    UnsupportedImageType,
    #[error("Only JPG, PNG, WEBP or PDF files are allowed")]
    UnsupportedDocumentType,
    #[error("Image size must be less than {max_mb}MB")]
    ImageTooLarge { max_mb: u64 },
    #[error("File size must be less than {max_mb}MB")]
    FileTooLarge { max_mb: u64 },
    #[error("A submission is already in progress")]
    SubmitInFlight,
    #[error("No application is loaded for review")]
    NoApplicationLoaded,
}
