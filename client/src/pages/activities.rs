//! Activities page: card list, signup form, and message banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the board once on mount, then handles signup submissions and
//! participant withdrawals. Each operation runs as its own `spawn_local`
//! task; there is no ordering between them, so whichever finishes last
//! determines what is rendered.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::flash_banner::FlashBanner;
#[cfg(feature = "hydrate")]
use crate::components::flash_banner::show_flash;
use crate::components::signup_form::SignupFormPanel;
#[cfg(any(test, feature = "hydrate"))]
use crate::error::{ApiError, ClientError};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::BoardSnapshot;
use crate::net::types::SignupRequest;
use crate::state::board::{BoardState, ListView};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::flash::FlashMessage;
#[cfg(feature = "hydrate")]
use crate::state::flash::{FlashKind, FlashState};
use crate::state::signup::SignupForm;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful!";
pub const WITHDRAW_SUCCESS_MESSAGE: &str = "Participant removed.";

/// Apply the result of a board load. Returns the error when the load failed.
#[cfg(any(test, feature = "hydrate"))]
fn apply_load_result(board: &mut BoardState, result: Result<BoardSnapshot, ApiError>) -> Option<ClientError> {
    match result {
        Ok(snapshot) => {
            leptos::logging::log!(
                "board loaded: {} activities, {} signups",
                snapshot.activities.len(),
                snapshot.signups.len()
            );
            board.apply_snapshot(snapshot);
            None
        }
        Err(e) => {
            let err = ClientError::Load(e);
            leptos::logging::error!("{err}");
            board.apply_load_failure();
            Some(err)
        }
    }
}

/// Apply the result of a signup write and pick the message to show.
///
/// The participant is only listed once the server has accepted the signup.
#[cfg(any(test, feature = "hydrate"))]
fn apply_signup_result(
    board: &mut BoardState,
    request: &SignupRequest,
    result: Result<Option<String>, ApiError>,
) -> FlashMessage {
    match result {
        Ok(message) => {
            board.record_signup(&request.activity_id, &request.email);
            FlashMessage::success(message.unwrap_or_else(|| SIGNUP_SUCCESS_MESSAGE.to_owned()))
        }
        Err(e) => {
            let err = ClientError::Signup(e);
            leptos::logging::error!("{err}");
            FlashMessage::error(err.user_message())
        }
    }
}

/// Apply the result of a withdrawal and pick the message to show.
#[cfg(any(test, feature = "hydrate"))]
fn apply_withdraw_result(
    board: &mut BoardState,
    request: &SignupRequest,
    result: Result<Option<String>, ApiError>,
) -> FlashMessage {
    match result {
        Ok(message) => {
            board.record_withdrawal(&request.activity_id, &request.email);
            FlashMessage::success(message.unwrap_or_else(|| WITHDRAW_SUCCESS_MESSAGE.to_owned()))
        }
        Err(e) => {
            let err = ClientError::Withdraw(e);
            leptos::logging::error!("{err}");
            FlashMessage::error(err.user_message())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn load_board(board: RwSignal<BoardState>) {
    let result = crate::net::api::fetch_board().await;
    let _ = board.try_update(|state| apply_load_result(state, result));
}

/// The single page of the application.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let form = expect_context::<RwSignal<SignupForm>>();
    #[cfg(feature = "hydrate")]
    let flash = expect_context::<RwSignal<FlashState>>();
    let email_input = NodeRef::<Input>::new();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_board(board));

    let on_join = Callback::new(move |activity_id: String| {
        form.update(|f| f.prefill(&activity_id));
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = email_input.get_untracked() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = Callback::new(move |request: SignupRequest| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_signup(&request).await;
            let Some(message) = board.try_update(|state| apply_signup_result(state, &request, result)) else {
                return;
            };
            if message.kind == FlashKind::Success {
                form.update(SignupForm::reset);
            }
            show_flash(flash, message);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    let on_withdraw = Callback::new(move |request: SignupRequest| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::withdraw_signup(&request).await;
            if let Some(message) = board.try_update(|state| apply_withdraw_result(state, &request, result)) {
                show_flash(flash, message);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    let list = move || match board.with(BoardState::list_view) {
        ListView::Loading => view! { <p class="activities-list__status">"Loading activities..."</p> }.into_any(),
        ListView::Failed(message) => view! { <p class="activities-list__error">{message}</p> }.into_any(),
        ListView::Cards(cards) => {
            let cards = cards
                .into_iter()
                .map(|card| view! { <ActivityCard card=card on_join=on_join on_withdraw=on_withdraw/> })
                .collect::<Vec<_>>();
            view! { {cards} }.into_any()
        }
    };

    view! {
        <header class="page-header">
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main class="page-main">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <div id="activities-list">{list}</div>
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupFormPanel email_input=email_input on_submit=on_submit/>
                <FlashBanner/>
            </section>
        </main>
    }
}
