//! Signup form (`#signup-form`) with the email field and activity selector.

use leptos::html::Input;
use leptos::prelude::*;

use crate::net::types::SignupRequest;
use crate::state::board::BoardState;
use crate::state::signup::SignupForm;

/// Form bound to the shared `SignupForm` state.
///
/// Submission is intercepted; when the trimmed email or the selected activity
/// is empty it is dropped without feedback, otherwise `on_submit` receives
/// the request body.
#[component]
pub fn SignupFormPanel(email_input: NodeRef<Input>, on_submit: Callback<SignupRequest>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let form = expect_context::<RwSignal<SignupForm>>();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.with_untracked(SignupForm::to_request) else {
            return;
        };
        on_submit.run(request);
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    node_ref=email_input
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Activity:"</label>
                <select
                    id="activity"
                    prop:value=move || form.with(|f| f.activity_id.clone())
                    on:change=move |ev| form.update(|f| f.activity_id = event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    <For
                        each=move || board.with(BoardState::options)
                        key=|(id, name)| (id.clone(), name.clone())
                        children=|(id, name)| view! { <option value=id>{name}</option> }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
