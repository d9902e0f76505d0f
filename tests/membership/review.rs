use chrono::Utc;
use serde_json::json;
use society_portal::client::{
    api::MembershipApi,
    error::{Error, ValidationError},
    membership::{ApplicationStage, DocumentKind, MembershipWorkflow, WorkflowMode, WorkflowState},
};
use society_test_utils::prelude::*;

use super::jpeg;
use crate::{test_client, test_config};

fn admin_workflow(test: &TestContext) -> MembershipWorkflow {
    MembershipWorkflow::new(
        MembershipApi::new(test_client(test)),
        WorkflowState::new(WorkflowMode::Admin, test_config(test)),
    )
}

/// Tests loading a pending application, replacing its photo and approving it.
///
/// Expected: new photo uploaded, PATCH /api/membership/app-1 with the assigned number,
/// zone, approved status, new photo URL and the NID already on record
#[tokio::test]
async fn review_and_approve_application() -> Result<(), TestError> {
    let new_photo = factory::stored_file_url("membership/photos", "new-photo.jpg");
    let nid = factory::stored_file_url("membership/nid", "nid.pdf");

    let test = TestBuilder::new()
        .with_record_endpoint(
            "membership",
            "app-1",
            &factory::membership_application("app-1", "Rahim Ahmed"),
            1,
        )
        .with_upload_endpoint("membership/upload-image", &new_photo, 1)
        .with_update_endpoint(
            "membership",
            "app-1",
            &json!({
                "name": "Rahim Ahmed",
                "membership_number": "L-0042",
                "zone": "Zone 3",
                "status": "approved",
                "photo_url": new_photo,
                "nid_url": nid,
            }),
            1,
        )
        .build()
        .await?;

    let mut workflow = admin_workflow(&test);
    let loaded = workflow.load_for_review("app-1").await;

    assert!(loaded.is_ok());
    assert_eq!(workflow.state().stage, ApplicationStage::UnderReview);
    assert_eq!(workflow.state().form.name, "Rahim Ahmed");
    assert_eq!(workflow.state().form.children.len(), 1);
    assert!(workflow.state().admin.membership_number.is_empty());

    let state = workflow.state_mut();
    state.admin.membership_number = "L-0042".to_string();
    state.admin.zone = "Zone 3".to_string();
    assert!(state
        .stage_document(DocumentKind::Photo, jpeg("new-photo.jpg"), Utc::now())
        .is_ok());

    let result = workflow.approve().await;

    assert!(result.is_ok());
    assert_eq!(workflow.state().stage, ApplicationStage::Approved);

    test.assert_mocks();

    Ok(())
}

/// Tests that approval is blocked until a membership number is assigned.
///
/// Expected: MissingAdminField, no PATCH sent
#[tokio::test]
async fn approval_requires_membership_number() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_endpoint(
            "membership",
            "app-1",
            &factory::membership_application("app-1", "Rahim Ahmed"),
            1,
        )
        .with_update_endpoint("membership", "app-1", &json!({}), 0)
        .build()
        .await?;

    let mut workflow = admin_workflow(&test);
    assert!(workflow.load_for_review("app-1").await.is_ok());
    workflow.state_mut().admin.zone = "Zone 1".to_string();

    let result = workflow.approve().await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingAdminField("Membership number")))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests creating a member directly when no application was loaded.
///
/// Expected: documents uploaded, POST /api/members/admin-create with approved status
#[tokio::test]
async fn admin_creates_member_without_application() -> Result<(), TestError> {
    let photo = factory::stored_file_url("membership", "upload.jpg");

    let test = TestBuilder::new()
        .with_upload_endpoint("membership/upload-image", &photo, 3)
        .with_create_endpoint_matching(
            "members/admin-create",
            &json!({
                "name": "Karim Uddin",
                "membership_number": "A-0007",
                "zone": "Zone 2",
                "status": "approved",
                "photo_url": photo,
            }),
            1,
        )
        .build()
        .await?;

    let mut workflow = admin_workflow(&test);
    let state = workflow.state_mut();
    state.form.name = "Karim Uddin".to_string();
    state.form.father_name = "Abdul Malek".to_string();
    state.form.mobile = "01722222222".to_string();
    state.form.membership_type = Some(society_portal::model::membership::MembershipType::Affiliate);
    state.admin.membership_number = "A-0007".to_string();
    state.admin.zone = "Zone 2".to_string();
    for kind in [DocumentKind::Photo, DocumentKind::Nid, DocumentKind::TaxReceipt] {
        assert!(state
            .stage_document(kind, jpeg(&format!("{}.jpg", kind.field_name())), Utc::now())
            .is_ok());
    }

    let result = workflow.approve().await;

    assert!(result.is_ok());
    assert_eq!(workflow.state().stage, ApplicationStage::Approved);

    test.assert_mocks();

    Ok(())
}

/// Tests rejecting a loaded application.
///
/// Expected: PATCH /api/membership/app-1 with status rejected, stage Rejected
#[tokio::test]
async fn reject_loaded_application() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_endpoint(
            "membership",
            "app-1",
            &factory::membership_application("app-1", "Rahim Ahmed"),
            1,
        )
        .with_update_endpoint("membership", "app-1", &json!({ "status": "rejected" }), 1)
        .build()
        .await?;

    let mut workflow = admin_workflow(&test);
    assert!(workflow.load_for_review("app-1").await.is_ok());

    let result = workflow.reject().await;

    assert!(result.is_ok());
    assert_eq!(workflow.state().stage, ApplicationStage::Rejected);

    test.assert_mocks();

    Ok(())
}

/// Tests that rejecting without a loaded application sends nothing.
///
/// Expected: NoApplicationLoaded
#[tokio::test]
async fn reject_without_application_is_refused() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let mut workflow = admin_workflow(&test);
    let result = workflow.reject().await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::NoApplicationLoaded))
    ));

    Ok(())
}

/// Tests that a failed load shows the generic load failure.
///
/// Expected: Err, banner "Failed to load application.", stage unchanged
#[tokio::test]
async fn failed_load_shows_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "membership/missing", 404, "Application not found", 1)
        .build()
        .await?;

    let mut workflow = admin_workflow(&test);
    let result = workflow.load_for_review("missing").await;

    assert!(result.is_err());
    assert_eq!(workflow.state().stage, ApplicationStage::Draft);
    assert_eq!(
        workflow.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Failed to load application.")
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that an application stored with null children can still be reviewed.
///
/// Expected: load succeeds with no children and stage UnderReview
#[tokio::test]
async fn sparse_application_loads_for_review() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_endpoint(
            "membership",
            "app-7",
            &factory::sparse_membership_application("app-7", "Salma Begum"),
            1,
        )
        .build()
        .await?;

    let mut workflow = admin_workflow(&test);
    let result = workflow.load_for_review("app-7").await;

    assert!(result.is_ok());
    assert_eq!(workflow.state().stage, ApplicationStage::UnderReview);
    assert_eq!(workflow.state().form.name, "Salma Begum");
    assert_eq!(workflow.state().form.children.len(), 0);

    test.assert_mocks();

    Ok(())
}
