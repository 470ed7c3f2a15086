//! Transient status message shown in `#message`.
//!
//! Each `show` bumps a generation counter. The hide timer scheduled for a
//! message carries that generation, so a stale timer cannot hide a newer
//! message.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use std::time::Duration;

/// How long a message stays visible.
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub kind: FlashKind,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "message success",
            FlashKind::Error => "message error",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FlashState {
    current: Option<FlashMessage>,
    generation: u64,
}

impl FlashState {
    /// Show `message`, replacing any visible one. Returns the generation to
    /// pass to [`FlashState::expire`] when the timer fires.
    pub fn show(&mut self, message: FlashMessage) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(message);
        self.generation
    }

    /// Hide the message if it is still the one shown at `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&FlashMessage> {
        self.current.as_ref()
    }
}
