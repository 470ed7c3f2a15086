//! Typed failures for board loads and signup writes.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` describes what went wrong on the wire; `ClientError` says which
//! board operation it broke. Pages log the `ClientError` and show its
//! `user_message()`; nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown in the list area when either read request fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities.";
/// Shown when a signup is rejected and the server gave no detail.
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";
/// Shown when a withdrawal is rejected and the server gave no detail.
pub const WITHDRAW_FAILED_MESSAGE: &str = "Failed to remove participant. Please try again.";

/// Failure of a single HTTP exchange with the activities API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent, or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("{endpoint} responded with status {status}")]
    Status {
        endpoint: &'static str,
        status: u16,
        /// `detail` string from the JSON error body, when the server sent one.
        detail: Option<String>,
    },
    /// The response body did not match the expected schema.
    #[error("invalid response from {endpoint}: {reason}")]
    Decode { endpoint: &'static str, reason: String },
    /// Called outside the browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided reason for a rejected request, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Failure of a board operation, wrapping the underlying API error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("loading board failed: {0}")]
    Load(ApiError),
    #[error("signup failed: {0}")]
    Signup(ApiError),
    #[error("withdraw failed: {0}")]
    Withdraw(ApiError),
}

impl ClientError {
    /// Text surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Load(_) => LOAD_FAILED_MESSAGE.to_owned(),
            Self::Signup(err) => err.detail().unwrap_or(SIGNUP_FAILED_MESSAGE).to_owned(),
            Self::Withdraw(err) => err.detail().unwrap_or(WITHDRAW_FAILED_MESSAGE).to_owned(),
        }
    }
}
