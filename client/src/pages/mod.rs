//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns network orchestration (load, signup, withdraw) and
//! delegates rendering details to `components`.

pub mod activities;
