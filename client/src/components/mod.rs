//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activity cards, the signup form, and the message
//! banner, reading shared state from Leptos context providers. Network calls
//! stay in `pages`.

pub mod activity_card;
pub mod flash_banner;
pub mod signup_form;
