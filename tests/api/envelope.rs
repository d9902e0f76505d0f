use mockito::Matcher;
use society_portal::{
    client::{api::ResourceApi, error::ApiError},
    model::{event::Event, news::NewsArticle},
};
use society_test_utils::{fixtures::mockito::envelope, prelude::*};

use crate::test_client;

/// Tests that an envelope error wins even when the HTTP status is 200.
///
/// Expected: ApiError::Api carrying the message
#[tokio::test]
async fn envelope_error_wins_over_success_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "events", 200, "Not allowed", 1)
        .build()
        .await?;

    let result = ResourceApi::<Event>::new(test_client(&test)).list().await;

    assert!(matches!(result, Err(ApiError::Api(message)) if message == "Not allowed"));

    test.assert_mocks();

    Ok(())
}

/// Tests that a failed status without an envelope reports the status code.
///
/// Expected: ApiError::Status(502)
#[tokio::test]
async fn bare_failure_reports_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/events")
                .match_query(Matcher::Any)
                .with_status(502)
                .with_body("<html>Bad gateway</html>")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = ResourceApi::<Event>::new(test_client(&test)).list().await;

    assert!(matches!(result, Err(ApiError::Status(502))));

    test.assert_mocks();

    Ok(())
}

/// Tests that a blank envelope error is not treated as a failure.
///
/// Expected: Ok with the decoded records
#[tokio::test]
async fn blank_error_is_ignored() -> Result<(), TestError> {
    let body = serde_json::json!({
        "data": [factory::news_article("n-1", "Water supply")],
        "error": "  "
    })
    .to_string();

    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/api/news")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = ResourceApi::<NewsArticle>::new(test_client(&test)).list().await;

    assert!(result.is_ok_and(|articles| articles.len() == 1 && articles[0].title == "Water supply"));

    test.assert_mocks();

    Ok(())
}

/// Tests that list filters are sent as query parameters.
///
/// Expected: GET /api/events?status=upcoming
#[tokio::test]
async fn list_sends_query_filters() -> Result<(), TestError> {
    let event = factory::event("e-1", "Winter picnic", &factory::days_from_today(7));
    let body = envelope(serde_json::json!([event]));

    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/api/events")
                .match_query(Matcher::UrlEncoded("status".into(), "upcoming".into()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = ResourceApi::<Event>::new(test_client(&test))
        .with_query("status", "upcoming")
        .list()
        .await;

    assert!(result.is_ok_and(|events| events.len() == 1));

    test.assert_mocks();

    Ok(())
}
