use super::*;

// =============================================================
// Activity
// =============================================================

#[test]
fn activity_numeric_id_is_held_as_text() {
    let activity: Activity = serde_json::from_value(serde_json::json!({ "id": 1, "name": "Chess" })).unwrap();
    assert_eq!(activity.id, "1");
    assert_eq!(activity.name, "Chess");
    assert_eq!(activity.description, None);
}

#[test]
fn activity_string_id_is_kept_verbatim() {
    let activity: Activity = serde_json::from_value(serde_json::json!({
        "id": "Chess Club",
        "name": "Chess Club",
        "description": "Learn strategies and compete in chess tournaments"
    }))
    .unwrap();
    assert_eq!(activity.id, "Chess Club");
    assert_eq!(activity.description_text(), "Learn strategies and compete in chess tournaments");
}

#[test]
fn activity_missing_or_null_description_renders_empty() {
    let missing: Activity = serde_json::from_value(serde_json::json!({ "id": "a", "name": "A" })).unwrap();
    let null: Activity =
        serde_json::from_value(serde_json::json!({ "id": "a", "name": "A", "description": null })).unwrap();
    assert_eq!(missing.description_text(), "");
    assert_eq!(null.description_text(), "");
}

#[test]
fn activity_rejects_non_scalar_id() {
    let result = serde_json::from_value::<Activity>(serde_json::json!({ "id": [1], "name": "A" }));
    assert!(result.is_err());
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_reads_camel_case_activity_id() {
    let signups: Vec<Signup> = serde_json::from_value(serde_json::json!([
        { "activityId": 1, "email": "a@x.com" },
        { "activityId": "Gym Class", "email": "john@mergington.edu" }
    ]))
    .unwrap();
    assert_eq!(signups[0].activity_id, "1");
    assert_eq!(signups[1].activity_id, "Gym Class");
    assert_eq!(signups[1].email, "john@mergington.edu");
}

#[test]
fn signup_request_serializes_api_field_names() {
    let request = SignupRequest {
        email: "b@x.com".to_owned(),
        activity_id: "1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "email": "b@x.com", "activityId": "1" })
    );
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn message_response_tolerates_missing_message() {
    let body: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}

#[test]
fn error_response_surfaces_string_detail_only() {
    let text: ErrorResponse = serde_json::from_str(r#"{"detail":"Activity not found"}"#).unwrap();
    assert_eq!(text.detail_text().as_deref(), Some("Activity not found"));

    let structured: ErrorResponse =
        serde_json::from_str(r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#).unwrap();
    assert_eq!(structured.detail_text(), None);

    let blank: ErrorResponse = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
    assert_eq!(blank.detail_text(), None);
}
