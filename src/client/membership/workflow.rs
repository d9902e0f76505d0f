//! Membership application lifecycle.
//!
//! A public applicant moves an application from `Draft` to `Pending`. An administrator
//! loads a pending application (`UnderReview`), assigns a membership number and zone and
//! approves or rejects it. Administrators can also create a member directly, in which
//! case there is no stored application and approval creates the member record instead.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use futures::future::try_join_all;

use crate::{
    client::{
        api::MembershipApi,
        config::Config,
        error::{Error, ValidationError},
        membership::{
            documents::DocumentKind,
            form::{AdminFields, MembershipForm},
        },
        store::notice::{self, Notice},
        util::upload::FileUpload,
    },
    model::membership::{
        ApplicantProfile, ApplicationStatus, ApprovalPayload, DocumentUrls, MembershipApplication,
    },
};

pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Application submitted successfully! We will contact you soon.";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit application. Please try again.";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load application.";
pub const APPROVE_FAILURE_MESSAGE: &str = "Failed to approve application. Please try again.";
pub const REJECT_FAILURE_MESSAGE: &str = "Failed to reject application. Please try again.";

/// Which side of the portal is editing the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowMode {
    /// Self-service applicant; the declaration must be accepted
    Public,
    /// Back office; membership number and zone are assigned on approval
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStage {
    Draft,
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub profile: ApplicantProfile,
    pub files: Vec<(DocumentKind, FileUpload)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalRequest {
    /// Stored application to approve; `None` creates the member directly
    pub application_id: Option<String>,
    pub profile: ApplicantProfile,
    /// URLs already on record, overwritten by the uploads below
    pub documents: DocumentUrls,
    pub uploads: Vec<(DocumentKind, FileUpload)>,
    pub admin: AdminFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub mode: WorkflowMode,
    pub stage: ApplicationStage,
    pub form: MembershipForm,
    pub admin: AdminFields,
    pub application_id: Option<String>,
    pub loading: bool,
    pub submitting: bool,
    pub notice: Option<Notice>,
    reset_at: Option<DateTime<Utc>>,
    config: Config,
}

impl WorkflowState {
    pub fn new(mode: WorkflowMode, config: Config) -> Self {
        Self {
            mode,
            stage: ApplicationStage::Draft,
            form: MembershipForm::default(),
            admin: AdminFields::default(),
            application_id: None,
            loading: false,
            submitting: false,
            notice: None,
            reset_at: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates and keeps a picked document; the rejection is shown in the banner.
    pub fn stage_document(
        &mut self,
        kind: DocumentKind,
        file: FileUpload,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        let result = self
            .form
            .stage_document(kind, file, self.config.max_upload_bytes);

        if let Err(err) = &result {
            self.show_error(err.to_string(), now);
        }

        result
    }

    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<SubmitRequest, ValidationError> {
        if self.submitting {
            return Err(ValidationError::SubmitInFlight);
        }

        let request = self
            .form
            .validate(self.mode)
            .and_then(|()| self.form.to_profile())
            .map(|profile| SubmitRequest {
                profile,
                files: self.form.staged_documents(),
            });

        match request {
            Ok(request) => {
                self.submitting = true;
                self.notice = None;

                Ok(request)
            }
            Err(err) => {
                self.show_error(err.to_string(), now);

                Err(err)
            }
        }
    }

    /// Failures only show a generic message; the cause is logged.
    pub fn finish_submit(&mut self, result: &Result<(), Error>, now: DateTime<Utc>) {
        self.submitting = false;

        match result {
            Ok(()) => {
                self.stage = ApplicationStage::Pending;
                self.reset_at = Some(now + self.config.form_reset_delay);
                self.show_success(SUBMIT_SUCCESS_MESSAGE, now);
            }
            Err(err) => {
                let message = err.generic_message(SUBMIT_FAILURE_MESSAGE);
                self.show_error(message, now);
            }
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Fills the form from the stored application; admin fields always start blank.
    pub fn finish_load(&mut self, result: &Result<MembershipApplication, Error>, now: DateTime<Utc>) {
        self.loading = false;

        match result {
            Ok(application) => {
                self.form = MembershipForm::from_application(application);
                self.admin = AdminFields::default();
                self.application_id = Some(application.id.clone());
                self.stage = ApplicationStage::UnderReview;
                self.notice = None;
            }
            Err(err) => {
                let message = err.generic_message(LOAD_FAILURE_MESSAGE);
                self.show_error(message, now);
            }
        }
    }

    pub fn begin_approve(&mut self, now: DateTime<Utc>) -> Result<ApprovalRequest, ValidationError> {
        if self.submitting {
            return Err(ValidationError::SubmitInFlight);
        }

        let request = self
            .admin
            .validate()
            .and_then(|()| self.form.validate(WorkflowMode::Admin))
            .and_then(|()| self.form.to_profile())
            .map(|profile| ApprovalRequest {
                application_id: self.application_id.clone(),
                profile,
                documents: self.form.existing_urls(),
                uploads: self.form.staged_documents(),
                admin: self.admin.clone(),
            });

        match request {
            Ok(request) => {
                self.submitting = true;
                self.notice = None;

                Ok(request)
            }
            Err(err) => {
                self.show_error(err.to_string(), now);

                Err(err)
            }
        }
    }

    pub fn finish_approve(&mut self, result: &Result<(), Error>, now: DateTime<Utc>) {
        self.submitting = false;

        match result {
            Ok(()) => {
                self.stage = ApplicationStage::Approved;
                self.show_success("Member approved successfully", now);
            }
            Err(err) => {
                let message = err.generic_message(APPROVE_FAILURE_MESSAGE);
                self.show_error(message, now);
            }
        }
    }

    /// Id of the application to reject
    pub fn begin_reject(&mut self, now: DateTime<Utc>) -> Result<String, ValidationError> {
        if self.submitting {
            return Err(ValidationError::SubmitInFlight);
        }

        let Some(id) = self.application_id.clone() else {
            self.show_error(ValidationError::NoApplicationLoaded.to_string(), now);

            return Err(ValidationError::NoApplicationLoaded);
        };

        self.submitting = true;

        Ok(id)
    }

    pub fn finish_reject(&mut self, result: &Result<(), Error>, now: DateTime<Utc>) {
        self.submitting = false;

        match result {
            Ok(()) => {
                self.stage = ApplicationStage::Rejected;
                self.show_success("Application rejected", now);
            }
            Err(err) => {
                let message = err.generic_message(REJECT_FAILURE_MESSAGE);
                self.show_error(message, now);
            }
        }
    }

    /// Hides an expired banner and resets a submitted public form once its delay passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        notice::expire(&mut self.notice, now);

        if self.reset_at.is_some_and(|reset_at| now >= reset_at) {
            self.form = MembershipForm::default();
            self.stage = ApplicationStage::Draft;
            self.reset_at = None;
        }
    }

    fn show_success(&mut self, message: &str, now: DateTime<Utc>) {
        self.notice = Some(Notice::success(message, now, self.config.notice_ttl));
    }

    fn show_error(&mut self, message: String, now: DateTime<Utc>) {
        self.notice = Some(Notice::error(message, now, self.config.notice_ttl));
    }
}

pub async fn send_application(api: &MembershipApi, request: SubmitRequest) -> Result<(), Error> {
    let result = api.submit(&request.profile, &request.files).await;

    match result {
        Ok(_) => {
            tracing::info!(documents = request.files.len(), "Membership application submitted");

            Ok(())
        }
        Err(err) => {
            tracing::error!("Failed to submit membership application: {}", err);

            Err(err.into())
        }
    }
}

/// Uploads the staged documents concurrently, then approves the stored application or
/// creates the member when there is none.
pub async fn send_approval(api: &MembershipApi, request: ApprovalRequest) -> Result<(), Error> {
    let ApprovalRequest {
        application_id,
        profile,
        mut documents,
        uploads,
        admin,
    } = request;

    let uploaded = try_join_all(uploads.iter().map(|(kind, file)| async move {
        api.upload_document(*kind, file)
            .await
            .map(|url| (*kind, url))
    }))
    .await?;

    for (kind, url) in uploaded {
        kind.set_url(&mut documents, url);
    }

    let payload = ApprovalPayload {
        profile,
        documents,
        membership_number: admin.membership_number.trim().to_string(),
        zone: admin.zone.trim().to_string(),
        status: ApplicationStatus::Approved,
    };

    match application_id {
        Some(id) => {
            api.approve(&id, &payload).await?;
            tracing::info!(id = %id, membership_number = %payload.membership_number, "Approved membership application");
        }
        None => {
            api.admin_create(&payload).await?;
            tracing::info!(membership_number = %payload.membership_number, "Created member directly");
        }
    }

    Ok(())
}

/// Drives a [`WorkflowState`] against the API outside of any view
pub struct MembershipWorkflow {
    api: MembershipApi,
    state: WorkflowState,
}

impl MembershipWorkflow {
    pub fn new(api: MembershipApi, state: WorkflowState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WorkflowState {
        &mut self.state
    }

    pub async fn submit_public(&mut self) -> Result<(), Error> {
        let request = self.state.begin_submit(Utc::now())?;

        let result = send_application(&self.api, request).await;
        self.state.finish_submit(&result, Utc::now());

        result
    }

    pub async fn load_for_review(&mut self, id: &str) -> Result<(), Error> {
        self.state.begin_load();

        let result = self.api.get(id).await.map_err(Error::from);
        if let Err(err) = &result {
            tracing::warn!(id = %id, "Failed to load membership application: {}", err);
        }
        self.state.finish_load(&result, Utc::now());

        result.map(|_| ())
    }

    pub async fn approve(&mut self) -> Result<(), Error> {
        let request = self.state.begin_approve(Utc::now())?;

        let result = send_approval(&self.api, request).await;
        if let Err(err) = &result {
            tracing::error!("Failed to approve membership application: {}", err);
        }
        self.state.finish_approve(&result, Utc::now());

        result
    }

    pub async fn reject(&mut self) -> Result<(), Error> {
        let id = self.state.begin_reject(Utc::now())?;

        let result = self.api.reject(&id).await.map(|_| ()).map_err(Error::from);
        self.state.finish_reject(&result, Utc::now());

        result
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::{
        client::error::ApiError,
        model::membership::{Gender, MembershipType},
    };

    fn application() -> MembershipApplication {
        serde_json::from_value(serde_json::json!({
            "id": "app-9",
            "name": "Shirin Akter",
            "father_name": "Abdul Akter",
            "mobile": "01555000000",
            "gender": "F",
            "membership_type": "Life",
            "photo_url": "https://cdn.example.com/p.jpg",
            "nid_url": "https://cdn.example.com/n.pdf",
            "tax_receipt_url": "https://cdn.example.com/t.pdf",
            "membership_number": "OLD-1",
            "status": "pending"
        }))
        .unwrap()
    }

    #[test]
    fn loading_for_review_blanks_admin_fields() {
        let mut state = WorkflowState::new(WorkflowMode::Admin, Config::default());
        state.admin.zone = "Zone 2".to_string();

        state.begin_load();
        state.finish_load(&Ok(application()), Utc::now());

        assert_eq!(state.stage, ApplicationStage::UnderReview);
        assert_eq!(state.application_id.as_deref(), Some("app-9"));
        assert_eq!(state.form.gender, Some(Gender::Female));
        assert_eq!(state.admin, AdminFields::default());
        assert!(state.form.missing_documents().is_empty());
    }

    #[test]
    fn approval_requires_membership_number_and_zone() {
        let mut state = WorkflowState::new(WorkflowMode::Admin, Config::default());
        state.finish_load(&Ok(application()), Utc::now());

        state.admin.membership_number = "LM-0101".to_string();

        assert_eq!(
            state.begin_approve(Utc::now()),
            Err(ValidationError::MissingAdminField("Zone"))
        );
        assert!(!state.submitting);

        state.admin.zone = "Zone 3".to_string();
        let request = state.begin_approve(Utc::now()).unwrap();

        assert_eq!(request.application_id.as_deref(), Some("app-9"));
        assert_eq!(request.profile.membership_type, Some(MembershipType::Life));
        assert_eq!(
            request.documents.nid_url.as_deref(),
            Some("https://cdn.example.com/n.pdf")
        );
        assert!(request.uploads.is_empty());
    }

    #[test]
    fn submit_failure_shows_generic_message() {
        let mut state = WorkflowState::new(WorkflowMode::Public, Config::default());
        let now = Utc::now();

        state.finish_submit(&Err(ApiError::Api("duplicate mobile".to_string()).into()), now);

        assert_eq!(state.stage, ApplicationStage::Draft);
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some(SUBMIT_FAILURE_MESSAGE)
        );
    }

    #[test]
    fn submitted_form_resets_after_delay() {
        let mut state = WorkflowState::new(WorkflowMode::Public, Config::default());
        state.form.name = "Shirin Akter".to_string();
        let now = Utc::now();

        state.finish_submit(&Ok(()), now);
        assert_eq!(state.stage, ApplicationStage::Pending);

        state.tick(now + TimeDelta::milliseconds(2000));
        assert_eq!(state.stage, ApplicationStage::Draft);
        assert_eq!(state.form, MembershipForm::default());
    }

    #[test]
    fn reject_needs_a_loaded_application() {
        let mut state = WorkflowState::new(WorkflowMode::Admin, Config::default());

        assert_eq!(
            state.begin_reject(Utc::now()),
            Err(ValidationError::NoApplicationLoaded)
        );
    }
}
