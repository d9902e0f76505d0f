use chrono::Utc;
use serde_json::json;
use society_portal::{
    client::{
        api::ResourceApi,
        store::{resource::ResourceState, ResourceManager},
        util::upload::FileUpload,
    },
    model::event::Event,
};
use society_test_utils::prelude::*;

use crate::{test_client, test_config};

fn fill_event(manager: &mut ResourceManager<Event>) {
    let state = manager.state_mut();
    state.open_create();
    state.set_field("title", "Winter picnic".to_string());
    state.set_field("event_date", "2030-01-10".to_string());
    state.set_field("location", "Lake park".to_string());
}

/// Tests that a staged image is uploaded first and its URL sent with the record.
///
/// Expected: multipart upload to /api/events/upload, then POST /api/events carrying the URL
#[tokio::test]
async fn image_uploaded_before_create() -> Result<(), TestError> {
    let url = factory::stored_file_url("events", "picnic.jpg");

    let test = TestBuilder::new()
        .with_upload_endpoint("events/upload", &url, 1)
        .with_create_endpoint_matching("events", &json!({ "title": "Winter picnic", "image": url }), 1)
        .with_list_endpoint::<serde_json::Value>("events", &[], 1)
        .build()
        .await?;

    let mut manager = ResourceManager::<Event>::new(
        ResourceApi::new(test_client(&test)),
        ResourceState::new(test_config(&test)),
    );
    fill_event(&mut manager);

    let image = FileUpload::new("picnic.jpg", Some("image/jpeg".to_string()), vec![0xFF; 2048]);
    assert!(manager.state_mut().stage_image(image, Utc::now()).is_ok());

    let result = manager.submit().await;

    assert!(result.is_ok());
    assert!(manager.state().image_file.is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests that a 6MB image is refused before anything is sent.
///
/// Expected: size error in the banner, nothing staged, no upload or create request
#[tokio::test]
async fn oversized_image_is_refused() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_upload_endpoint("events/upload", "unused", 0)
        .with_create_endpoint("events", &serde_json::Value::Null, 1)
        .with_list_endpoint::<serde_json::Value>("events", &[], 1)
        .build()
        .await?;

    let mut manager = ResourceManager::<Event>::new(
        ResourceApi::new(test_client(&test)),
        ResourceState::new(test_config(&test)),
    );
    fill_event(&mut manager);

    let image = FileUpload::new("huge.png", None, vec![0; 6 * 1024 * 1024]);
    let staged = manager.state_mut().stage_image(image, Utc::now());

    assert!(staged.is_err());
    assert!(manager.state().image_file.is_none());
    assert!(manager.state().notice.as_ref().is_some_and(|n| n.is_error()));

    // The record itself can still be saved without an image
    let result = manager.submit().await;
    assert!(result.is_ok());

    test.assert_mocks();

    Ok(())
}
