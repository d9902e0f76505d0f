use crate::{
    client::resource::{FieldKind, FieldSpec, Resource, ResourceForm},
    model::event::{Event, EventForm},
};

const STATUS_OPTIONS: &[&str] = &["upcoming", "ongoing", "completed", "cancelled"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text).required(),
    FieldSpec::new("description", "Description", FieldKind::TextArea),
    FieldSpec::new("event_date", "Date", FieldKind::Date).required(),
    FieldSpec::new("event_time", "Time", FieldKind::Time),
    FieldSpec::new("location", "Location", FieldKind::Text).required(),
    FieldSpec::new("status", "Status", FieldKind::Select(STATUS_OPTIONS)).required(),
];

impl Resource for Event {
    type Form = EventForm;

    const PATH: &'static str = "events";
    const UPLOAD_PATH: Option<&'static str> = Some("events/upload");
    const LABEL: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.location.as_deref().unwrap_or_default(),
        ]
    }

    fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            event_date: self.event_date.format("%Y-%m-%d").to_string(),
            event_time: self.event_time.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            image: self.image.clone(),
            status: self.status,
        }
    }

    fn thumbnail(&self) -> Option<String> {
        self.image.clone()
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Date", "Location", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.event_date.format("%Y-%m-%d").to_string(),
            self.location.clone().unwrap_or_default(),
            self.status.as_str().to_string(),
        ]
    }
}

impl ResourceForm for EventForm {
    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "event_date" => self.event_date.clone(),
            "event_time" => self.event_time.clone(),
            "location" => self.location.clone(),
            "status" => self.status.as_str().to_string(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "description" => self.description = value,
            "event_date" => self.event_date = value,
            "event_time" => self.event_time = value,
            "location" => self.location = value,
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

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{client::error::ValidationError, model::event::EventStatus};

    fn event() -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "Annual Sports Day".to_string(),
            description: None,
            event_date: NaiveDate::from_ymd_opt(2025, 2, 21).unwrap(),
            event_time: Some("09:00".to_string()),
            location: Some("Central Field".to_string()),
            image: None,
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn form_round_trips_record_fields() {
        let form = event().to_form();

        assert_eq!(form.event_date, "2025-02-21");
        assert_eq!(form.value("location"), "Central Field");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn location_is_required() {
        let mut form = event().to_form();
        form.set_value("location", "   ".to_string());

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField("Location"))
        );
    }

    #[test]
    fn invalid_status_is_ignored() {
        let mut form = EventForm::default();
        form.set_value("status", "postponed".to_string());
        assert_eq!(form.status, EventStatus::Upcoming);

        form.set_value("status", "completed".to_string());
        assert_eq!(form.status, EventStatus::Completed);
    }
}
