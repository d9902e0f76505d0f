//! Membership application routes.

use dioxus_logger::tracing;
use reqwest::multipart::Form;
use serde_json::Value;

use crate::{
    client::{
        api::ApiClient, error::ApiError, membership::DocumentKind, util::upload::FileUpload,
    },
    model::membership::{
        ApplicantProfile, ApplicationStatus, ApprovalPayload, MembershipApplication, StatusUpdate,
    },
};

const APPLICATIONS_PATH: &str = "membership";
const UPLOAD_PATH: &str = "membership/upload-image";
const ADMIN_CREATE_PATH: &str = "members/admin-create";

#[derive(Debug, Clone)]
pub struct MembershipApi {
    client: ApiClient,
}

impl MembershipApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Public submission: every scalar as a text part, `children` as a JSON string, and
    /// one file part per attached document.
    pub async fn submit(
        &self,
        profile: &ApplicantProfile,
        files: &[(DocumentKind, FileUpload)],
    ) -> Result<Option<MembershipApplication>, ApiError> {
        let mut form = profile_parts(profile)?
            .text("status", ApplicationStatus::Pending.as_str());

        for (kind, file) in files {
            form = form.part(kind.field_name(), file.to_part()?);
        }

        tracing::debug!(documents = files.len(), "Submitting membership application");

        self.client.post_multipart(APPLICATIONS_PATH, form).await
    }

    /// Applications in the given status, newest first as returned by the API
    pub async fn list(&self, status: ApplicationStatus) -> Result<Vec<MembershipApplication>, ApiError> {
        let query = [("status".to_string(), status.as_str().to_string())];

        self.client.get(APPLICATIONS_PATH, &query).await
    }

    pub async fn get(&self, id: &str) -> Result<MembershipApplication, ApiError> {
        self.client.get(&application_path(id), &[]).await
    }

    /// Updates the stored application and approves it in one request
    pub async fn approve(
        &self,
        id: &str,
        payload: &ApprovalPayload,
    ) -> Result<Option<MembershipApplication>, ApiError> {
        self.client.patch(&application_path(id), payload).await
    }

    /// Creates an active member directly, without a prior public application
    pub async fn admin_create(&self, payload: &ApprovalPayload) -> Result<Option<Value>, ApiError> {
        self.client.post(ADMIN_CREATE_PATH, payload).await
    }

    pub async fn reject(&self, id: &str) -> Result<Option<MembershipApplication>, ApiError> {
        let body = StatusUpdate {
            status: ApplicationStatus::Rejected,
        };

        self.client.patch(&application_path(id), &body).await
    }

    /// Uploads one supporting document into the folder of its kind
    pub async fn upload_document(
        &self,
        kind: DocumentKind,
        file: &FileUpload,
    ) -> Result<String, ApiError> {
        self.client
            .upload(UPLOAD_PATH, file, Some(kind.folder()))
            .await
    }
}

fn application_path(id: &str) -> String {
    format!("{}/{}", APPLICATIONS_PATH, id)
}

/// Flattens the profile into text parts; absent values are left out.
fn profile_parts(profile: &ApplicantProfile) -> Result<Form, ApiError> {
    let mut form = Form::new();

    let Value::Object(fields) = serde_json::to_value(profile)? else {
        return Ok(form);
    };

    for (key, value) in fields {
        let text = match value {
            Value::Null => continue,
            Value::String(text) => text,
            Value::Array(_) | Value::Object(_) => serde_json::to_string(&value)?,
            other => other.to_string(),
        };

        form = form.text(key, text);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::membership::{Child, ChildGender, MembershipType};

    #[test]
    fn children_are_sent_as_json_text() {
        let profile = ApplicantProfile {
            name: "Rahim Uddin".to_string(),
            membership_type: Some(MembershipType::Life),
            children: vec![Child {
                name: "Ayesha".to_string(),
                age: Some(7),
                gender: ChildGender::Female,
            }],
            ..Default::default()
        };

        let encoded = serde_json::to_value(&profile).unwrap();
        let children = serde_json::to_string(&encoded["children"]).unwrap();

        let decoded: Vec<Child> = serde_json::from_str(&children).unwrap();
        assert_eq!(decoded, profile.children);
        assert!(profile_parts(&profile).is_ok());
    }
}
