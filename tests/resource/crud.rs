use mockito::Matcher;
use serde_json::json;
use society_portal::{
    client::{
        api::ResourceApi,
        store::{resource::ResourceState, ResourceManager},
    },
    model::car_sticker::CarSticker,
};
use society_test_utils::prelude::*;

use crate::{test_client, test_config};

fn manager(test: &TestContext) -> ResourceManager<CarSticker> {
    ResourceManager::new(
        ResourceApi::new(test_client(test)),
        ResourceState::new(test_config(test)),
    )
}

/// Tests that a created record shows up in the list fetched right after the write.
///
/// Expected: POST sent once, list fetched twice, new sticker present in the second list
#[tokio::test]
async fn created_record_appears_after_refetch() -> Result<(), TestError> {
    let created = factory::car_sticker("cs-2", "Karim Uddin", "DHA-5678");

    let test = TestBuilder::new()
        .with_list_endpoint::<serde_json::Value>("car-stickers", &[], 1)
        .with_create_endpoint_matching(
            "car-stickers",
            &json!({ "owner_name": "Karim Uddin", "vehicle_number": "DHA-5678" }),
            1,
        )
        .with_list_endpoint("car-stickers", &[created], 1)
        .build()
        .await?;

    let mut manager = manager(&test);
    manager.fetch_all().await;
    assert!(manager.state().items.is_empty());

    let state = manager.state_mut();
    state.open_create();
    state.set_field("owner_name", "Karim Uddin".to_string());
    state.set_field("vehicle_number", "DHA-5678".to_string());
    state.set_field("phone", "01800000000".to_string());

    let result = manager.submit().await;

    assert!(result.is_ok());
    assert_eq!(manager.state().items.len(), 1);
    assert_eq!(manager.state().items[0].id, "cs-2");
    assert_eq!(
        manager.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Car sticker created successfully")
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that editing a record sends a PATCH to the record's own route.
///
/// Expected: PATCH /api/car-stickers/cs-1 with the changed owner name
#[tokio::test]
async fn update_targets_record_id() -> Result<(), TestError> {
    let sticker = factory::car_sticker("cs-1", "Rahim Ahmed", "DHA-1234");

    let test = TestBuilder::new()
        .with_list_endpoint("car-stickers", &[sticker], 2)
        .with_update_endpoint(
            "car-stickers",
            "cs-1",
            &json!({ "owner_name": "Rahim Chowdhury", "status": "active" }),
            1,
        )
        .build()
        .await?;

    let mut manager = manager(&test);
    manager.fetch_all().await;

    let record = manager.state().items[0].clone();
    let state = manager.state_mut();
    state.open_edit(record);
    state.set_field("owner_name", "Rahim Chowdhury".to_string());

    let result = manager.submit().await;

    assert!(result.is_ok());
    assert_eq!(
        manager.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Car sticker updated successfully")
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that the search box filters the fetched list without another request.
///
/// Expected: only the matching sticker remains, list fetched once
#[tokio::test]
async fn search_filters_fetched_items() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(
            "car-stickers",
            &[
                factory::car_sticker("cs-1", "Rahim Ahmed", "DHA-1234"),
                factory::car_sticker("cs-2", "Karim Uddin", "DHA-5678"),
            ],
            1,
        )
        .build()
        .await?;

    let mut manager = manager(&test);
    manager.fetch_all().await;
    manager.state_mut().search_term = "karim".to_string();

    let visible: Vec<&str> = manager
        .state()
        .filtered()
        .into_iter()
        .map(|sticker| sticker.id.as_str())
        .collect();

    assert_eq!(visible, vec!["cs-2"]);

    test.assert_mocks();

    Ok(())
}

/// Tests that a missing required field blocks the submit before any request.
///
/// Expected: validation error, no POST sent
#[tokio::test]
async fn invalid_form_sends_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_create_endpoint("car-stickers", &serde_json::Value::Null, 0)
        .build()
        .await?;

    let mut manager = manager(&test);
    let state = manager.state_mut();
    state.open_create();
    state.set_field("owner_name", "Rahim Ahmed".to_string());
    state.set_field("phone", "01800000000".to_string());

    let result = manager.submit().await;

    assert!(result.is_err());
    assert!(manager.state().notice.as_ref().is_some_and(|n| n.is_error()));
    assert!(!manager.state().submitting);

    test.assert_mocks();

    Ok(())
}

/// Tests that a failed list request leaves the previous items in place.
///
/// Expected: error banner with the API message, items from the first fetch kept
#[tokio::test]
async fn failed_refetch_keeps_items() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(
            "car-stickers",
            &[factory::car_sticker("cs-1", "Rahim Ahmed", "DHA-1234")],
            1,
        )
        .with_error_endpoint("GET", "car-stickers", 500, "Database unavailable", 1)
        .build()
        .await?;

    let mut manager = manager(&test);
    manager.fetch_all().await;
    manager.fetch_all().await;

    assert_eq!(manager.state().items.len(), 1);
    assert!(!manager.state().loading);
    assert_eq!(
        manager.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("Database unavailable")
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that a bare gateway failure is reported as a server error, not a lost connection.
///
/// Expected: banner naming status 502, no items
#[tokio::test]
async fn gateway_failure_names_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/car-stickers")
                .match_query(Matcher::Any)
                .with_status(502)
                .with_body("<html>Bad gateway</html>")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let mut manager = manager(&test);
    manager.fetch_all().await;

    assert!(manager.state().items.is_empty());
    assert_eq!(
        manager.state().notice.as_ref().map(|n| n.message.as_str()),
        Some("The server could not complete the request (status 502). Please try again.")
    );

    test.assert_mocks();

    Ok(())
}
