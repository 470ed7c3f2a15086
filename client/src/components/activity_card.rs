//! Card component for one activity in `#activities-list`.

use leptos::prelude::*;

use crate::net::types::SignupRequest;
use crate::state::board::{ActivityCardModel, NO_PARTICIPANTS_TEXT, ParticipantEntry};

/// A card showing the activity's name, description, and participants.
///
/// The join button only pre-fills the signup form; each participant's remove
/// button asks the page to withdraw that signup.
#[component]
pub fn ActivityCard(
    card: ActivityCardModel,
    on_join: Callback<String>,
    on_withdraw: Callback<SignupRequest>,
) -> impl IntoView {
    let ActivityCardModel {
        id,
        title,
        description,
        participants,
    } = card;

    let rows = participants
        .into_iter()
        .map(|entry| match entry {
            ParticipantEntry::Email(email) => {
                let request = SignupRequest {
                    email: email.clone(),
                    activity_id: id.clone(),
                };
                view! {
                    <li class="participant">
                        <span class="participant__email">{email}</span>
                        <button
                            type="button"
                            class="participant__remove"
                            title="Remove participant"
                            on:click=move |_| on_withdraw.run(request.clone())
                        >
                            "✕"
                        </button>
                    </li>
                }
                .into_any()
            }
            ParticipantEntry::Placeholder => {
                view! { <li class="participant participant--empty">{NO_PARTICIPANTS_TEXT}</li> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="activity-card">
            <h4 class="activity-title">{title}</h4>
            <p class="activity-desc">{description}</p>
            <div class="participants">
                <h5 class="participants__heading">"Participants"</h5>
                <ul class="participants-list">{rows}</ul>
            </div>
            <button type="button" class="join-btn" on:click=move |_| on_join.run(id.clone())>
                "Join"
            </button>
        </div>
    }
}
