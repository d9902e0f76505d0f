//! Public registration forms: contact messages, gate and road adoptions, and car sticker
//! applications.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use serde::Serialize;

use crate::{
    client::{
        api::ApiClient,
        config::Config,
        error::{Error, ValidationError},
        resource::{Resource, ResourceForm},
        store::notice::{self, Notice},
    },
    model::{
        adoption::{AdoptionStatus, GateAdoption, GateAdoptionForm, PaymentStatus, RoadAdoption, RoadAdoptionForm},
        car_sticker::{CarSticker, CarStickerForm, StickerStatus},
        contact::ContactMessage,
    },
};

/// A form the public can submit without signing in
pub trait Registration: Clone + Default + PartialEq + Serialize + 'static {
    /// Route receiving the POST
    const PATH: &'static str;
    /// Banner shown after a successful submission
    const SUCCESS_MESSAGE: &'static str;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Adjusts fields the public cannot choose before sending
    fn prepare(&mut self) {}
}

impl Registration for ContactMessage {
    const PATH: &'static str = "contact";
    const SUCCESS_MESSAGE: &'static str = "Thank you! Your message has been sent.";

    fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (&self.name, "Name"),
            (&self.email, "Email"),
            (&self.subject, "Subject"),
            (&self.message, "Message"),
        ];

        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(label));
            }
        }

        Ok(())
    }
}

impl Registration for GateAdoptionForm {
    const PATH: &'static str = GateAdoption::PATH;
    const SUCCESS_MESSAGE: &'static str =
        "Thank you! Your gate adoption request has been submitted for review.";

    fn validate(&self) -> Result<(), ValidationError> {
        ResourceForm::validate(self)
    }

    fn prepare(&mut self) {
        self.term.status = AdoptionStatus::Pending;
        self.term.payment_status = PaymentStatus::Pending;
    }
}

impl Registration for RoadAdoptionForm {
    const PATH: &'static str = RoadAdoption::PATH;
    const SUCCESS_MESSAGE: &'static str =
        "Thank you! Your road adoption request has been submitted for review.";

    fn validate(&self) -> Result<(), ValidationError> {
        ResourceForm::validate(self)
    }

    fn prepare(&mut self) {
        self.term.status = AdoptionStatus::Pending;
        self.term.payment_status = PaymentStatus::Pending;
    }
}

impl Registration for CarStickerForm {
    const PATH: &'static str = CarSticker::PATH;
    const SUCCESS_MESSAGE: &'static str =
        "Thank you! Your car sticker application has been received.";

    fn validate(&self) -> Result<(), ValidationError> {
        ResourceForm::validate(self)
    }

    fn prepare(&mut self) {
        self.sticker_number.clear();
        self.status = StickerStatus::Pending;
    }
}

/// POSTs a prepared registration
pub async fn send_registration<F: Registration>(client: &ApiClient, form: &F) -> Result<(), Error> {
    client.post::<F, serde_json::Value>(F::PATH, form).await?;

    tracing::info!(path = F::PATH, "Registration submitted");

    Ok(())
}

/// State of a public registration page
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationState<F: Registration> {
    pub form: F,
    pub submitting: bool,
    pub notice: Option<Notice>,
    reset_at: Option<DateTime<Utc>>,
    config: Config,
}

impl<F: Registration> RegistrationState<F> {
    pub fn new(config: Config) -> Self {
        Self {
            form: F::default(),
            submitting: false,
            notice: None,
            reset_at: None,
            config,
        }
    }

    /// Validates and returns the body to send.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<F, ValidationError> {
        if self.submitting {
            return Err(ValidationError::SubmitInFlight);
        }

        if let Err(err) = self.form.validate() {
            self.notice = Some(Notice::error(err.to_string(), now, self.config.notice_ttl));

            return Err(err);
        }

        self.submitting = true;
        self.notice = None;

        let mut body = self.form.clone();
        body.prepare();

        Ok(body)
    }

    /// The form is cleared once the reset delay has passed after a success.
    pub fn finish_submit(&mut self, result: &Result<(), Error>, now: DateTime<Utc>) {
        self.submitting = false;

        self.notice = Some(match result {
            Ok(()) => {
                self.reset_at = Some(now + self.config.form_reset_delay);

                Notice::success(F::SUCCESS_MESSAGE, now, self.config.notice_ttl)
            }
            Err(err) => Notice::error(err.user_message(), now, self.config.notice_ttl),
        });
    }

    pub fn tick(&mut self, now: DateTime<Utc>) {
        notice::expire(&mut self.notice, now);

        if self.reset_at.is_some_and(|reset_at| now >= reset_at) {
            self.form = F::default();
            self.reset_at = None;
        }
    }
}
