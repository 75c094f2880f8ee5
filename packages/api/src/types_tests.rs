#![cfg(test)]

use crate::types::{AnalyticsEvent, Preflight, Session, Team, User, HOME_VIEWED};

fn user_with_team(team: Option<Team>) -> User {
    User {
        distinct_id: "u1".to_string(),
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        team,
    }
}

#[test]
fn team_ingested_event_follows_user_team() {
    let team = Team {
        id: 1,
        name: Some("Acme".to_string()),
        ingested_event: Some(true),
    };
    assert!(user_with_team(Some(team)).team_ingested_event());
}

#[test]
fn team_ingested_event_defaults_to_false() {
    assert!(!user_with_team(None).team_ingested_event());

    let team = Team {
        id: 1,
        name: None,
        ingested_event: None,
    };
    assert!(!user_with_team(Some(team)).team_ingested_event());
}

#[test]
fn missing_fields_deserialize_as_none() {
    let user: User =
        serde_json::from_str(r#"{"distinct_id":"u1","email":"a@b.c"}"#).expect("valid user");
    assert_eq!(user.team, None);
    assert_eq!(user.first_name, "");

    let preflight: Preflight = serde_json::from_str("{}").expect("valid preflight");
    assert_eq!(preflight.email_service_available, None);

    let session: Session = serde_json::from_str(r#"{"team":{"id":7}}"#).expect("valid session");
    assert_eq!(session.team.map(|t| t.name), Some(None));
    assert_eq!(session.user, None);
}

#[test]
fn analytics_event_carries_distinct_id() {
    let event = AnalyticsEvent::new(HOME_VIEWED, serde_json::json!({ "team_has_data": false }))
        .with_distinct_id("u1");
    assert_eq!(event.event, "home viewed");
    assert_eq!(event.distinct_id.as_deref(), Some("u1"));
    assert_eq!(event.properties["team_has_data"], false);
}
