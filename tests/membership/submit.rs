use chrono::Utc;
use society_portal::{
    client::{
        api::MembershipApi,
        error::{Error, ValidationError},
        membership::{ApplicationStage, DocumentKind, MembershipWorkflow, WorkflowMode, WorkflowState},
    },
    model::membership::MembershipType,
};
use society_test_utils::prelude::*;

use super::{jpeg, pdf};
use crate::{test_client, test_config};

fn public_workflow(test: &TestContext, membership_type: MembershipType) -> MembershipWorkflow {
    let mut workflow = MembershipWorkflow::new(
        MembershipApi::new(test_client(test)),
        WorkflowState::new(WorkflowMode::Public, test_config(test)),
    );

    let form = &mut workflow.state_mut().form;
    form.name = "Rahim Ahmed".to_string();
    form.father_name = "Abdul Karim".to_string();
    form.mobile = "01711111111".to_string();
    form.date_of_birth = "1985-06-01".to_string();
    form.membership_type = Some(membership_type);
    form.declaration_accepted = true;

    let key = form.children.add();
    form.children.update(key, |child| {
        child.name = "Ayesha".to_string();
        child.age = "8".to_string();
    });

    workflow
}

fn stage(workflow: &mut MembershipWorkflow, kinds: &[DocumentKind]) {
    for kind in kinds {
        let file = match kind {
            DocumentKind::Photo => jpeg("photo.jpg"),
            _ => pdf(&format!("{}.pdf", kind.field_name())),
        };
        assert!(workflow.state_mut().stage_document(*kind, file, Utc::now()).is_ok());
    }
}

/// Tests a complete Life application being submitted as one multipart request.
///
/// Expected: POST /api/membership once, application moves to Pending with the success banner
#[tokio::test]
async fn life_application_becomes_pending() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_multipart_endpoint("membership", 1)
        .build()
        .await?;

    let mut workflow = public_workflow(&test, MembershipType::Life);
    stage(
        &mut workflow,
        &[DocumentKind::Photo, DocumentKind::Nid, DocumentKind::TaxReceipt],
    );

    let result = workflow.submit_public().await;

    assert!(result.is_ok());
    assert_eq!(workflow.state().stage, ApplicationStage::Pending);
    assert!(!workflow.state().submitting);
    assert_eq!(
        workflow.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Application submitted successfully! We will contact you soon.")
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that a Corporate application without a trade license is stopped client-side.
///
/// Expected: MissingDocument(TradeLicense), no request sent, still a draft
#[tokio::test]
async fn corporate_requires_trade_license() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_multipart_endpoint("membership", 0)
        .build()
        .await?;

    let mut workflow = public_workflow(&test, MembershipType::Corporate);
    stage(
        &mut workflow,
        &[
            DocumentKind::Photo,
            DocumentKind::Nid,
            DocumentKind::TaxReceipt,
            DocumentKind::LeaseAgreement,
            DocumentKind::TinBinCertificate,
        ],
    );

    let result = workflow.submit_public().await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingDocument(DocumentKind::TradeLicense)))
    ));
    assert_eq!(workflow.state().stage, ApplicationStage::Draft);

    test.assert_mocks();

    Ok(())
}

/// Tests that the declaration must be accepted on the public form.
///
/// Expected: DeclarationNotAccepted, no request sent
#[tokio::test]
async fn declaration_must_be_accepted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_multipart_endpoint("membership", 0)
        .build()
        .await?;

    let mut workflow = public_workflow(&test, MembershipType::Life);
    stage(
        &mut workflow,
        &[DocumentKind::Photo, DocumentKind::Nid, DocumentKind::TaxReceipt],
    );
    workflow.state_mut().form.declaration_accepted = false;

    let result = workflow.submit_public().await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::DeclarationNotAccepted))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests that a server failure only shows the generic failure banner.
///
/// Expected: Err, banner does not leak the server message, form kept for retry
#[tokio::test]
async fn server_failure_shows_generic_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "membership", 500, "duplicate key value violates constraint", 1)
        .build()
        .await?;

    let mut workflow = public_workflow(&test, MembershipType::Life);
    stage(
        &mut workflow,
        &[DocumentKind::Photo, DocumentKind::Nid, DocumentKind::TaxReceipt],
    );

    let result = workflow.submit_public().await;

    assert!(result.is_err());
    assert_eq!(workflow.state().stage, ApplicationStage::Draft);
    assert_eq!(workflow.state().form.name, "Rahim Ahmed");
    assert_eq!(
        workflow.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Failed to submit application. Please try again.")
    );

    test.assert_mocks();

    Ok(())
}
