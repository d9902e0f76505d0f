use society_portal::{
    client::{
        api::ResourceApi,
        store::{resource::ResourceState, ResourceManager},
    },
    model::car_sticker::CarSticker,
};
use society_test_utils::prelude::*;

use crate::{test_client, test_config};

/// Tests that confirming a delete removes exactly the requested record.
///
/// Expected: DELETE /api/car-stickers/abc-123 once, list refetched, success banner
#[tokio::test]
async fn confirmed_delete_hits_record_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(
            "car-stickers",
            &[
                factory::car_sticker("abc-123", "Rahim Ahmed", "DHA-1234"),
                factory::car_sticker("def-456", "Karim Uddin", "DHA-5678"),
            ],
            1,
        )
        .with_delete_endpoint("car-stickers", "abc-123", 1)
        .with_list_endpoint(
            "car-stickers",
            &[factory::car_sticker("def-456", "Karim Uddin", "DHA-5678")],
            1,
        )
        .build()
        .await?;

    let mut manager = ResourceManager::<CarSticker>::new(
        ResourceApi::new(test_client(&test)),
        ResourceState::new(test_config(&test)),
    );
    manager.fetch_all().await;

    manager.state_mut().request_delete("abc-123");
    let result = manager.confirm_delete().await;

    assert!(result.is_ok());
    assert!(manager.state().pending_delete.is_none());
    assert_eq!(manager.state().items.len(), 1);
    assert_eq!(manager.state().items[0].id, "def-456");
    assert_eq!(
        manager.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Car sticker deleted successfully")
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that a cancelled delete never reaches the API.
///
/// Expected: no DELETE request
#[tokio::test]
async fn cancelled_delete_sends_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_delete_endpoint("car-stickers", "abc-123", 0)
        .build()
        .await?;

    let mut manager = ResourceManager::<CarSticker>::new(
        ResourceApi::new(test_client(&test)),
        ResourceState::new(test_config(&test)),
    );

    manager.state_mut().request_delete("abc-123");
    manager.state_mut().cancel_delete();
    let result = manager.confirm_delete().await;

    assert!(result.is_ok());
    assert!(manager.state().notice.is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests that a rejected delete shows the API's message.
///
/// Expected: Err with the envelope error as banner text
#[tokio::test]
async fn rejected_delete_shows_api_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("DELETE", "car-stickers/abc-123", 409, "Sticker is still active", 1)
        .build()
        .await?;

    let mut manager = ResourceManager::<CarSticker>::new(
        ResourceApi::new(test_client(&test)),
        ResourceState::new(test_config(&test)),
    );

    manager.state_mut().request_delete("abc-123");
    let result = manager.confirm_delete().await;

    assert!(result.is_err());
    assert_eq!(
        manager.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Sticker is still active")
    );

    test.assert_mocks();

    Ok(())
}
