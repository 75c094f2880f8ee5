use api::test_utils::TestContext;
use api::types::{HOME_TILE_CLICKED, HOME_VIEWED};

#[tokio::test]
async fn test_capture_records_event_for_current_user() {
    let ctx = TestContext::new();

    api::capture_event(
        HOME_VIEWED.to_string(),
        serde_json::json!({ "team_has_data": true }),
    )
    .await
    .expect("capture should succeed");

    let events = ctx.sink.events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, "home viewed");
    assert_eq!(events[0].distinct_id.as_deref(), Some("user1@local.dev"));
    assert_eq!(events[0].properties["team_has_data"], true);
}

#[tokio::test]
async fn test_capture_keeps_order() {
    let ctx = TestContext::new();

    api::capture_event(HOME_VIEWED.to_string(), serde_json::json!({}))
        .await
        .expect("capture should succeed");
    api::capture_event(
        HOME_TILE_CLICKED.to_string(),
        serde_json::json!({ "module": "community", "title": "Hang out in Slack" }),
    )
    .await
    .expect("capture should succeed");

    let names: Vec<String> = ctx.sink.events().await.into_iter().map(|e| e.event).collect();
    assert_eq!(names, vec!["home viewed", "home tile clicked"]);
}

#[tokio::test]
async fn test_capture_rejects_blank_event_name() {
    let ctx = TestContext::new();

    let result = api::capture_event("   ".to_string(), serde_json::json!({})).await;

    assert!(result.is_err(), "blank event names should be rejected");
    assert!(ctx.sink.events().await.is_empty());
}
