//! Resource descriptions for the admin back office.
//!
//! Each record family managed by the admin pages implements [`Resource`], which tells the
//! generic list manager where the records live, how to search them, and how to turn a
//! record into an editable [`ResourceForm`].

pub mod adoption;
pub mod car_sticker;
pub mod event;
pub mod gallery;
pub mod member;
pub mod news;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};

use crate::client::error::ValidationError;

/// A record family managed through `GET/POST /api/<path>`, `PATCH/DELETE /api/<path>/<id>`
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    type Form: ResourceForm;

    /// Route family, e.g. `car-stickers`
    const PATH: &'static str;
    /// Route returning the list, when it differs from [`Resource::PATH`]
    const LIST_PATH: &'static str = Self::PATH;
    /// Route accepting image uploads for image-bearing resources
    const UPLOAD_PATH: Option<&'static str> = None;
    /// Singular name used in messages, e.g. `Car sticker`
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Values matched by the admin search box
    fn search_fields(&self) -> Vec<&str>;

    /// Hydrates the edit form from a stored record
    fn to_form(&self) -> Self::Form;

    /// Column headers of the admin table
    fn columns() -> &'static [&'static str];

    /// Cell values of the admin table, in [`Resource::columns`] order
    fn row(&self) -> Vec<String>;

    /// Preview image shown in the first column of the admin table of image-bearing resources
    fn thumbnail(&self) -> Option<String> {
        None
    }

    /// Checks that only apply when editing an existing record
    fn validate_update(&self, _form: &Self::Form) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Case-insensitive substring match; `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Editable fields of a resource, sent as the create/update body
pub trait ResourceForm: Clone + Default + PartialEq + Serialize + 'static {
    fn fields() -> &'static [FieldSpec];

    /// Current value of a field as shown in its input
    fn value(&self, key: &str) -> String;

    /// Applies input from a field; values that do not parse leave the field unchanged
    fn set_value(&mut self, key: &str, value: String);

    fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(self)
    }

    /// Stores the URL returned by the upload route
    fn attach_image(&mut self, _url: String) {}

    /// Whether the record needs an image before it can be saved
    fn requires_image(&self) -> bool {
        false
    }

    fn image(&self) -> Option<&str> {
        None
    }
}

/// Input type of a form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Tel,
    Date,
    Time,
    Url,
    Number,
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// Value of the `type` attribute for `input` elements
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Time => "time",
            Self::Url => "url",
            Self::Number => "number",
            Self::Text | Self::TextArea | Self::Select(_) => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Mirrors the browser's own constraint checks: required fields must be filled, date and
/// number inputs must parse.
pub fn validate_fields<F: ResourceForm>(form: &F) -> Result<(), ValidationError> {
    for field in F::fields() {
        let value = form.value(field.key);
        let value = value.trim();

        if value.is_empty() {
            if field.required {
                return Err(ValidationError::MissingField(field.label));
            }
            continue;
        }

        match field.kind {
            FieldKind::Date => {
                parse_date(value, field.label)?;
            }
            FieldKind::Number => {
                value
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidNumber(field.label))?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Parses the `YYYY-MM-DD` value produced by date inputs
pub fn parse_date(value: &str, label: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(label))
}

/// Text shown for an optional date
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
