//! Message banner (`#message`) and its auto-hide timer.

use leptos::prelude::*;

use crate::state::flash::{FlashMessage, FlashState};
#[cfg(feature = "hydrate")]
use crate::state::flash::FLASH_DURATION;

/// Show `message` and hide it again after `FLASH_DURATION`, unless a newer
/// message has replaced it by then.
pub fn show_flash(flash: RwSignal<FlashState>, message: FlashMessage) {
    let Some(generation) = flash.try_update(|state| state.show(message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(FLASH_DURATION).await;
        let _ = flash.try_update(|state| state.expire(generation));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
    }
}

/// Banner rendering the current transient message, hidden when empty.
#[component]
pub fn FlashBanner() -> impl IntoView {
    let flash = expect_context::<RwSignal<FlashState>>();

    let class = move || {
        flash.with(|state| {
            state
                .current()
                .map_or("message hidden", FlashMessage::css_class)
        })
    };
    let text = move || {
        flash.with(|state| {
            state
                .current()
                .map(|message| message.text.clone())
                .unwrap_or_default()
        })
    };

    view! { <div id="message" class=class role="status">{text}</div> }
}
