use super::*;

#[test]
fn signup_form_defaults_empty() {
    let form = SignupForm::default();
    assert!(form.email.is_empty());
    assert!(form.activity_id.is_empty());
    assert_eq!(form.to_request(), None);
}

#[test]
fn to_request_trims_email() {
    let form = SignupForm {
        email: "  b@x.com \n".to_owned(),
        activity_id: "1".to_owned(),
    };
    assert_eq!(
        form.to_request(),
        Some(SignupRequest {
            email: "b@x.com".to_owned(),
            activity_id: "1".to_owned(),
        })
    );
}

#[test]
fn blank_email_is_rejected() {
    assert_eq!(signup_request("", "1"), None);
    assert_eq!(signup_request("   ", "1"), None);
}

#[test]
fn missing_activity_is_rejected() {
    assert_eq!(signup_request("a@x.com", ""), None);
}

#[test]
fn prefill_selects_activity_and_keeps_email() {
    let mut form = SignupForm {
        email: "a@x.com".to_owned(),
        activity_id: String::new(),
    };
    form.prefill("Chess Club");
    assert_eq!(form.activity_id, "Chess Club");
    assert_eq!(form.email, "a@x.com");
}

#[test]
fn reset_clears_both_fields() {
    let mut form = SignupForm {
        email: "a@x.com".to_owned(),
        activity_id: "1".to_owned(),
    };
    form.reset();
    assert_eq!(form, SignupForm::default());
}
