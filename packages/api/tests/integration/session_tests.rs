use api::test_utils::TestContext;

#[tokio::test]
async fn test_session_without_ingested_events() {
    let _ctx = TestContext::with_env(&[("TEAM_NAME", "Acme")]);

    let session = api::get_session().await.expect("session should load");

    let team = session.team.expect("team should be present");
    assert_eq!(team.name.as_deref(), Some("Acme"));
    assert_eq!(team.ingested_event, Some(false));

    let user = session.user.expect("local mode has a default user");
    assert_eq!(user.email, "user1@local.dev");
    assert!(!user.team_ingested_event());
}

#[tokio::test]
async fn test_session_user_team_reflects_ingestion() {
    let _ctx = TestContext::with_env(&[("TEAM_INGESTED_EVENT", "true")]);

    let session = api::get_session().await.expect("session should load");
    let user = session.user.expect("user should be present");
    assert!(user.team_ingested_event());
}

#[tokio::test]
async fn test_preflight_without_smtp() {
    let _ctx = TestContext::new();

    let preflight = api::get_preflight().await.expect("preflight should load");
    assert_eq!(preflight.email_service_available, Some(false));
    assert_eq!(preflight.site_url, "http://localhost:8080");
}

#[tokio::test]
async fn test_preflight_with_smtp() {
    let _ctx = TestContext::with_env(&[
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_FROM_EMAIL", "hey@example.com"),
    ]);

    let preflight = api::get_preflight().await.expect("preflight should load");
    assert_eq!(preflight.email_service_available, Some(true));
}
