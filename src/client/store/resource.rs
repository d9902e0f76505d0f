//! List, modal and banner state of an admin resource page.
//!
//! [`ResourceState`] never performs I/O. Each network operation is split into a `begin_*`
//! step that validates and returns what has to be sent, and a `finish_*` step that applies
//! the outcome. The UI drives these steps from event handlers and
//! [`super::manager::ResourceManager`] drives them headlessly.

use chrono::{DateTime, Utc};

use crate::client::{
    config::Config,
    error::{Error, ValidationError},
    resource::{Resource, ResourceForm},
    store::notice::{self, Notice},
    util::upload::{validate_upload, FileUpload, UploadKind},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Modal<R> {
    Closed,
    Create,
    Edit(R),
    View(R),
}

impl<R> Modal<R> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether the modal shows an editable form
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Create | Self::Edit(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

/// Everything needed to send a validated submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitPlan<R: Resource> {
    pub target: SubmitTarget,
    pub form: R::Form,
    pub image: Option<FileUpload>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<R: Resource> {
    pub items: Vec<R>,
    pub loading: bool,
    pub search_term: String,
    pub modal: Modal<R>,
    pub form: R::Form,
    pub image_file: Option<FileUpload>,
    pub notice: Option<Notice>,
    pub submitting: bool,
    pub pending_delete: Option<String>,
    close_at: Option<DateTime<Utc>>,
    config: Config,
}

impl<R: Resource> ResourceState<R> {
    pub fn new(config: Config) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            search_term: String::new(),
            modal: Modal::Closed,
            form: R::Form::default(),
            image_file: None,
            notice: None,
            submitting: false,
            pending_delete: None,
            close_at: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replaces the list on success; a failed fetch keeps the previous items.
    pub fn finish_fetch(&mut self, result: Result<Vec<R>, Error>, now: DateTime<Utc>) {
        self.loading = false;

        match result {
            Ok(items) => self.items = items,
            Err(err) => self.show_error(err.user_message(), now),
        }
    }

    /// Items matching the current search term
    pub fn filtered(&self) -> Vec<&R> {
        self.filter(&self.search_term)
    }

    /// Case-insensitive substring match over each record's search fields
    pub fn filter(&self, term: &str) -> Vec<&R> {
        if term.is_empty() {
            return self.items.iter().collect();
        }
        let needle = term.to_lowercase();

        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    pub fn open_create(&mut self) {
        self.reset_modal();
        self.modal = Modal::Create;
    }

    pub fn open_edit(&mut self, record: R) {
        self.reset_modal();
        self.form = record.to_form();
        self.modal = Modal::Edit(record);
    }

    pub fn open_view(&mut self, record: R) {
        self.reset_modal();
        self.form = record.to_form();
        self.modal = Modal::View(record);
    }

    pub fn close_modal(&mut self) {
        self.reset_modal();
    }

    pub fn set_field(&mut self, key: &str, value: String) {
        self.form.set_value(key, value);
    }

    /// Stages an image for upload with the next submit; rejected files leave nothing
    /// staged.
    pub fn stage_image(&mut self, file: FileUpload, now: DateTime<Utc>) -> Result<(), ValidationError> {
        match validate_upload(&file, UploadKind::Image, self.config.max_upload_bytes) {
            Ok(()) => {
                self.image_file = Some(file);
                self.notice = None;

                Ok(())
            }
            Err(err) => {
                self.image_file = None;
                self.show_error(err.to_string(), now);

                Err(err)
            }
        }
    }

    pub fn clear_image(&mut self) {
        self.image_file = None;
    }

    /// Validates the form and marks a submission as in flight.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<SubmitPlan<R>, ValidationError> {
        if self.submitting {
            return Err(ValidationError::SubmitInFlight);
        }

        if let Err(err) = self.validate_submission() {
            self.show_error(err.to_string(), now);

            return Err(err);
        }

        let target = match &self.modal {
            Modal::Edit(record) => SubmitTarget::Update(record.id().to_string()),
            _ => SubmitTarget::Create,
        };

        self.submitting = true;
        self.notice = None;

        Ok(SubmitPlan {
            target,
            form: self.form.clone(),
            image: self.image_file.clone(),
        })
    }

    /// On success the modal stays open showing the success banner until `tick` passes
    /// the close deadline.
    pub fn finish_submit(&mut self, result: &Result<(), Error>, now: DateTime<Utc>) {
        self.submitting = false;

        match result {
            Ok(()) => {
                let action = match self.modal {
                    Modal::Edit(_) => "updated",
                    _ => "created",
                };

                self.image_file = None;
                self.show_success(format!("{} {} successfully", R::LABEL, action), now);
                self.close_at = Some(now + self.config.modal_close_delay);
            }
            Err(err) => self.show_error(err.user_message(), now),
        }
    }

    /// Asks for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Takes the confirmed id; `None` when no delete was requested
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn finish_delete(&mut self, result: &Result<(), Error>, now: DateTime<Utc>) {
        match result {
            Ok(()) => self.show_success(format!("{} deleted successfully", R::LABEL), now),
            Err(err) => self.show_error(err.user_message(), now),
        }
    }

    /// Applies elapsed deadlines: hides an expired banner and closes the modal after a
    /// successful submit.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        notice::expire(&mut self.notice, now);

        if self.close_at.is_some_and(|close_at| now >= close_at) {
            self.reset_modal();
        }
    }

    fn validate_submission(&self) -> Result<(), ValidationError> {
        if matches!(self.modal, Modal::View(_)) {
            return Err(ValidationError::MissingField("Editable form"));
        }

        self.form.validate()?;

        if let Modal::Edit(record) = &self.modal {
            record.validate_update(&self.form)?;
        }

        if self.form.requires_image() && self.image_file.is_none() && self.form.image().is_none() {
            return Err(ValidationError::MissingField("Image"));
        }

        Ok(())
    }

    fn reset_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form = R::Form::default();
        self.image_file = None;
        self.notice = None;
        self.close_at = None;
    }

    fn show_success(&mut self, message: String, now: DateTime<Utc>) {
        self.notice = Some(Notice::success(message, now, self.config.notice_ttl));
    }

    fn show_error(&mut self, message: String, now: DateTime<Utc>) {
        self.notice = Some(Notice::error(message, now, self.config.notice_ttl));
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use super::*;
    use crate::{
        client::error::ApiError,
        model::{
            car_sticker::{CarSticker, StickerStatus},
            event::{Event, EventStatus},
        },
    };

    fn sticker(id: &str, owner: &str, vehicle: &str) -> CarSticker {
        CarSticker {
            id: id.to_string(),
            sticker_number: Some(format!("STK-{}", id)),
            owner_name: owner.to_string(),
            vehicle_number: vehicle.to_string(),
            vehicle_type: None,
            phone: "01700000000".to_string(),
            email: None,
            address: None,
            membership_number: None,
            issue_date: None,
            expiry_date: None,
            status: StickerStatus::Active,
        }
    }

    fn loaded() -> ResourceState<CarSticker> {
        let mut state = ResourceState::new(Config::default());
        state.finish_fetch(
            Ok(vec![
                sticker("1", "Karim Ahmed", "DHAKA-GA-1234"),
                sticker("2", "Nusrat Jahan", "DHAKA-KHA-5678"),
            ]),
            Utc::now(),
        );
        state
    }

    #[test]
    fn filter_is_case_insensitive_and_empty_returns_all() {
        let state = loaded();

        assert_eq!(state.filter("").len(), 2);

        let matches = state.filter("nusrat");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "2");

        assert_eq!(state.filter("dhaka-ga").len(), 1);
        assert!(state.filter("zzz").is_empty());
    }

    #[test]
    fn padded_term_is_matched_verbatim() {
        let state = loaded();

        assert!(state.filter(" karim").is_empty());
        assert!(state.filter("   ").is_empty());

        let matches = state.filter(" ahmed");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
    }

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut state = loaded();
        let now = Utc::now();

        state.begin_fetch();
        state.finish_fetch(Err(ApiError::Api("Database unavailable".to_string()).into()), now);

        assert!(!state.loading);
        assert_eq!(state.items.len(), 2);
        let notice = state.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Database unavailable");
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let mut state = loaded();
        state.open_create();
        state.set_field("owner_name", "Karim Ahmed".to_string());

        let result = state.begin_submit(Utc::now());

        assert_eq!(result, Err(ValidationError::MissingField("Vehicle number")));
        assert!(!state.submitting);
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some("Vehicle number is required")
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut state = loaded();
        state.open_edit(state.items[0].clone());

        let plan = state.begin_submit(Utc::now()).unwrap();
        assert_eq!(plan.target, SubmitTarget::Update("1".to_string()));

        assert_eq!(
            state.begin_submit(Utc::now()),
            Err(ValidationError::SubmitInFlight)
        );
    }

    #[test]
    fn modal_closes_after_delay_following_success() {
        let mut state = loaded();
        let now = Utc::now();

        state.open_edit(state.items[1].clone());
        state.begin_submit(now).unwrap();
        state.finish_submit(&Ok(()), now);

        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some("Car sticker updated successfully")
        );

        state.tick(now + TimeDelta::milliseconds(1499));
        assert!(state.modal.is_open());

        state.tick(now + TimeDelta::milliseconds(1500));
        assert_eq!(state.modal, Modal::Closed);
        assert!(state.notice.is_none());
    }

    #[test]
    fn failed_submit_keeps_modal_open_with_api_message() {
        let mut state = loaded();
        let now = Utc::now();

        state.open_edit(state.items[0].clone());
        state.begin_submit(now).unwrap();
        state.finish_submit(
            &Err(ApiError::Api("Sticker number already exists".to_string()).into()),
            now,
        );

        assert!(!state.submitting);
        assert!(state.modal.is_open());
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some("Sticker number already exists")
        );

        state.tick(now + TimeDelta::seconds(10));
        assert!(state.modal.is_open());
    }

    #[test]
    fn cancel_delete_leaves_items_untouched() {
        let mut state = loaded();

        state.request_delete("2");
        state.cancel_delete();

        assert_eq!(state.confirm_delete(), None);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn oversized_event_image_is_not_staged() {
        let mut state: ResourceState<Event> = ResourceState::new(Config::default());
        state.open_create();

        let file = FileUpload::new("banner.jpg", None, vec![0; 6 * 1024 * 1024]);
        let result = state.stage_image(file, Utc::now());

        assert_eq!(result, Err(ValidationError::ImageTooLarge { max_mb: 5 }));
        assert!(state.image_file.is_none());
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some("Image size must be less than 5MB")
        );
    }

    #[test]
    fn event_edit_hydrates_form() {
        let event = Event {
            id: "ev-1".to_string(),
            title: "Annual general meeting".to_string(),
            description: Some("Agenda to follow".to_string()),
            event_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            event_time: Some("18:00".to_string()),
            location: Some("Community hall".to_string()),
            image: Some("https://cdn.example.com/agm.jpg".to_string()),
            status: EventStatus::Upcoming,
        };

        let mut state: ResourceState<Event> = ResourceState::new(Config::default());
        state.open_edit(event);

        assert_eq!(state.form.value("event_date"), "2025-03-01");
        assert_eq!(state.form.value("title"), "Annual general meeting");
        assert_eq!(state.form.image(), Some("https://cdn.example.com/agm.jpg"));
    }
}
