use crate::{
    client::{
        error::ValidationError,
        resource::{validate_fields, FieldKind, FieldSpec, Resource, ResourceForm},
        util::youtube,
    },
    model::gallery::{GalleryForm, GalleryItem, GalleryKind},
};

const KIND_OPTIONS: &[&str] = &["image", "video"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text).required(),
    FieldSpec::new("description", "Description", FieldKind::TextArea),
    FieldSpec::new("type", "Type", FieldKind::Select(KIND_OPTIONS)).required(),
    FieldSpec::new("video_link", "YouTube link", FieldKind::Url),
    FieldSpec::new("category", "Category", FieldKind::Text),
];

impl Resource for GalleryItem {
    type Form = GalleryForm;

    const PATH: &'static str = "gallery";
    const UPLOAD_PATH: Option<&'static str> = Some("gallery/upload");
    const LABEL: &'static str = "Gallery item";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.category.as_deref().unwrap_or_default(),
        ]
    }

    fn to_form(&self) -> GalleryForm {
        GalleryForm {
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            kind: self.kind,
            image: self.image.clone(),
            video_link: self.video_link.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
        }
    }

    fn thumbnail(&self) -> Option<String> {
        match self.kind {
            GalleryKind::Image => self.image.clone(),
            GalleryKind::Video => self
                .video_link
                .as_deref()
                .and_then(youtube::thumbnail_url),
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Type", "Category"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.kind.as_str().to_string(),
            self.category.clone().unwrap_or_default(),
        ]
    }
}

impl ResourceForm for GalleryForm {
    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "type" => self.kind.as_str().to_string(),
            "video_link" => self.video_link.clone(),
            "category" => self.category.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "description" => self.description = value,
            "type" => {
                if let Ok(kind) = value.parse() {
                    self.kind = kind;
                }
            }
            "video_link" => self.video_link = value,
            "category" => self.category = value,
            _ => {}
        }
    }

    /// Videos need a link; the link is stored as entered even when no preview can be
    /// derived from it.
    fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(self)?;

        if self.kind == GalleryKind::Video && self.video_link.trim().is_empty() {
            return Err(ValidationError::MissingField("YouTube link"));
        }

        Ok(())
    }

    fn attach_image(&mut self, url: String) {
        self.image = Some(url);
    }

    fn requires_image(&self) -> bool {
        self.kind == GalleryKind::Image
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_requires_link() {
        let mut form = GalleryForm {
            title: "Victory Day parade".to_string(),
            kind: GalleryKind::Video,
            ..Default::default()
        };

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField("YouTube link"))
        );

        form.set_value("video_link", "not a youtube link".to_string());
        assert!(form.validate().is_ok());
        assert!(!form.requires_image());
    }

    #[test]
    fn image_items_require_an_image() {
        let form = GalleryForm {
            title: "Lake view".to_string(),
            ..Default::default()
        };

        assert!(form.requires_image());
        assert!(form.image().is_none());
    }

    #[test]
    fn videos_preview_with_youtube_thumbnail() {
        let video = GalleryItem {
            id: "g-2".to_string(),
            title: "Victory Day parade".to_string(),
            description: None,
            kind: GalleryKind::Video,
            image: None,
            video_link: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            category: None,
        };
        let broken = GalleryItem {
            video_link: Some("https://vimeo.com/1234".to_string()),
            ..video.clone()
        };

        assert_eq!(
            video.thumbnail().as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(broken.thumbnail(), None);
    }
}
