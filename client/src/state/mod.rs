//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `board` owns the loaded data and its render models, `participants` the
//! derived email index, `signup` the form contents, and `flash` the
//! transient message banner. Each is held in its own `RwSignal` context.

pub mod board;
pub mod flash;
pub mod participants;
pub mod signup;
