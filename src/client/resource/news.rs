use crate::{
    client::resource::{format_date, FieldKind, FieldSpec, Resource, ResourceForm},
    model::news::{NewsArticle, NewsForm},
};

const STATUS_OPTIONS: &[&str] = &["draft", "published", "archived"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text).required(),
    FieldSpec::new("summary", "Summary", FieldKind::TextArea),
    FieldSpec::new("content", "Content", FieldKind::TextArea).required(),
    FieldSpec::new("author", "Author", FieldKind::Text),
    FieldSpec::new("published_date", "Published on", FieldKind::Date),
    FieldSpec::new("status", "Status", FieldKind::Select(STATUS_OPTIONS)).required(),
];

impl Resource for NewsArticle {
    type Form = NewsForm;

    const PATH: &'static str = "news";
    const UPLOAD_PATH: Option<&'static str> = Some("news/upload");
    const LABEL: &'static str = "News article";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.author.as_deref().unwrap_or_default(),
        ]
    }

    fn to_form(&self) -> NewsForm {
        NewsForm {
            title: self.title.clone(),
            content: self.content.clone(),
            summary: self.summary.clone().unwrap_or_default(),
            author: self.author.clone().unwrap_or_default(),
            published_date: format_date(self.published_date),
            image: self.image.clone(),
            status: self.status,
        }
    }

    fn thumbnail(&self) -> Option<String> {
        self.image.clone()
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Author", "Published", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author.clone().unwrap_or_default(),
            format_date(self.published_date),
            self.status.as_str().to_string(),
        ]
    }
}

impl ResourceForm for NewsForm {
    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "summary" => self.summary.clone(),
            "content" => self.content.clone(),
            "author" => self.author.clone(),
            "published_date" => self.published_date.clone(),
            "status" => self.status.as_str().to_string(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "summary" => self.summary = value,
            "content" => self.content = value,
            "author" => self.author = value,
            "published_date" => self.published_date = value,
            "status" => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
            _ => {}
        }
    }

    fn attach_image(&mut self, url: String) {
        self.image = Some(url);
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
