use api::test_utils::TestContext;

#[tokio::test]
async fn test_invite_link_uses_site_url() {
    let _ctx = TestContext::with_env(&[("SITE_URL", "https://app.example.com")]);

    let link = api::create_invite_link().await.expect("link should be created");

    assert!(link.starts_with("https://app.example.com/signup/"));
    let id = link.trim_start_matches("https://app.example.com/signup/");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "link should end with a uuid");
}

#[tokio::test]
async fn test_invite_links_are_unique() {
    let _ctx = TestContext::new();

    let first = api::create_invite_link().await.expect("link should be created");
    let second = api::create_invite_link().await.expect("link should be created");
    assert_ne!(first, second);
}
