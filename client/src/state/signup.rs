#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::SignupRequest;

/// Contents of the signup form (`#signup-form`).
///
/// `activity_id` is the selector's value; empty means the placeholder option
/// is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity_id: String,
}

impl SignupForm {
    /// Select `activity_id` in the form, leaving the email untouched.
    pub fn prefill(&mut self, activity_id: &str) {
        activity_id.clone_into(&mut self.activity_id);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the request body, or `None` when the trimmed email or the
    /// activity id is empty.
    pub fn to_request(&self) -> Option<SignupRequest> {
        signup_request(&self.email, &self.activity_id)
    }
}

/// Validate raw form values into a request body.
pub fn signup_request(email: &str, activity_id: &str) -> Option<SignupRequest> {
    let email = email.trim();
    if email.is_empty() || activity_id.is_empty() {
        return None;
    }
    Some(SignupRequest {
        email: email.to_owned(),
        activity_id: activity_id.to_owned(),
    })
}
