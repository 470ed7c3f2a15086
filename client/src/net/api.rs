//! REST helpers for the activities API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. A non-2xx status is an error
//! even when the body parses; the API's `detail` string is kept on the error
//! so pages can show it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Activity, BoardSnapshot, Signup, SignupRequest};
use crate::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ErrorResponse, MessageResponse};

pub const ACTIVITIES_ENDPOINT: &str = "/api/activities";
pub const SIGNUPS_ENDPOINT: &str = "/api/signups";

#[cfg(any(test, feature = "hydrate"))]
fn status_error(endpoint: &'static str, status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|resp| resp.detail_text());
    ApiError::Status { endpoint, status, detail }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(endpoint: &'static str, reason: impl std::fmt::Display) -> ApiError {
    ApiError::Decode {
        endpoint,
        reason: reason.to_string(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn success_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|resp| resp.message)
        .filter(|message| !message.trim().is_empty())
}

/// Drive both loads concurrently and pair their results. The first error
/// resolves the join; the other future is dropped unfinished.
#[cfg(any(test, feature = "hydrate"))]
async fn join_board<A, S>(activities: A, signups: S) -> Result<BoardSnapshot, ApiError>
where
    A: std::future::Future<Output = Result<Vec<Activity>, ApiError>>,
    S: std::future::Future<Output = Result<Vec<Signup>, ApiError>>,
{
    let (activities, signups) = futures::try_join!(activities, signups)?;
    Ok(BoardSnapshot { activities, signups })
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(endpoint: &'static str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(transport_error)?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(endpoint, resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| decode_error(endpoint, e))
}

#[cfg(feature = "hydrate")]
async fn send_signup(
    builder: gloo_net::http::RequestBuilder,
    request: &SignupRequest,
) -> Result<Option<String>, ApiError> {
    let resp = builder
        .json(request)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    let body = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(status_error(SIGNUPS_ENDPOINT, resp.status(), &body));
    }
    Ok(success_message(&body))
}

/// Fetch all activities from `GET /api/activities`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status, or a body that
/// is not an activity array.
pub async fn fetch_activities() -> Result<Vec<Activity>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ACTIVITIES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all signups from `GET /api/signups`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status, or a body that
/// is not a signup array.
pub async fn fetch_signups() -> Result<Vec<Signup>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(SIGNUPS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch activities and signups concurrently. The first failure wins; the
/// other request's result is discarded.
///
/// # Errors
///
/// Returns the error of whichever request failed first.
pub async fn fetch_board() -> Result<BoardSnapshot, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        join_board(fetch_activities(), fetch_signups()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign an email up for an activity via `POST /api/signups`.
///
/// Returns the server's confirmation message when it sent one.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn submit_signup(request: &SignupRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_signup(gloo_net::http::Request::post(SIGNUPS_ENDPOINT), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Remove an email from an activity via `DELETE /api/signups`.
///
/// Returns the server's confirmation message when it sent one.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn withdraw_signup(request: &SignupRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_signup(gloo_net::http::Request::delete(SIGNUPS_ENDPOINT), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
