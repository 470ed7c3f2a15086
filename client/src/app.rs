//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::activities::ActivitiesPage;
use crate::state::{board::BoardState, flash::FlashState, signup::SignupForm};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the board, form, and message state and exposes them as contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::default());
    let form = RwSignal::new(SignupForm::default());
    let flash = RwSignal::new(FlashState::default());

    provide_context(board);
    provide_context(form);
    provide_context(flash);

    view! {
        <Stylesheet id="leptos" href="/pkg/activity-board.css"/>
        <Title text="Mergington High School Activities"/>

        <ActivitiesPage/>
    }
}
