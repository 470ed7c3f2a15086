//! Activity board state: loaded activities, participant index, load status.
//!
//! DESIGN
//! ======
//! One `BoardState` lives in an `RwSignal` for the page's lifetime. Loads
//! replace it wholesale; signups and withdrawals patch the participant index.
//! Rendering reads the derived view models below rather than the raw fields,
//! so the list area's content is fully determined by this struct.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use super::participants::ParticipantIndex;
use crate::error::LOAD_FAILED_MESSAGE;
use crate::net::types::{Activity, BoardSnapshot};

/// Placeholder entry shown in an empty participant list.
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// Progress of the most recent board load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Board-level state shared by the form, the option list, and the cards.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub activities: Vec<Activity>,
    pub participants: ParticipantIndex,
    pub status: LoadStatus,
}

/// One row of a card's participant list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantEntry {
    Email(String),
    Placeholder,
}

/// Everything a card needs to render one activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub participants: Vec<ParticipantEntry>,
}

/// What the list area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed(&'static str),
    Cards(Vec<ActivityCardModel>),
}

impl BoardState {
    /// Replace activities and rebuild the participant index from a fresh load.
    pub fn apply_snapshot(&mut self, snapshot: BoardSnapshot) {
        self.participants = ParticipantIndex::from_signups(&snapshot.signups);
        self.activities = snapshot.activities;
        self.status = LoadStatus::Loaded;
    }

    /// Mark the load as failed. The list area then shows only the error.
    pub fn apply_load_failure(&mut self) {
        self.status = LoadStatus::Failed;
    }

    /// Optimistically list `email` under `activity_id` after a confirmed
    /// signup. Returns `false` if it was already listed.
    pub fn record_signup(&mut self, activity_id: &str, email: &str) -> bool {
        self.participants.add(activity_id, email)
    }

    /// Drop `email` from `activity_id` after a confirmed withdrawal.
    pub fn record_withdrawal(&mut self, activity_id: &str, email: &str) -> bool {
        self.participants.remove(activity_id, email)
    }

    /// `(value, label)` pairs for the activity selector, in activity order.
    pub fn options(&self) -> Vec<(String, String)> {
        self.activities
            .iter()
            .map(|activity| (activity.id.clone(), activity.name.clone()))
            .collect()
    }

    pub fn card_models(&self) -> Vec<ActivityCardModel> {
        self.activities
            .iter()
            .map(|activity| ActivityCardModel {
                id: activity.id.clone(),
                title: activity.name.clone(),
                description: activity.description_text().to_owned(),
                participants: participant_entries(self.participants.participants(&activity.id)),
            })
            .collect()
    }

    pub fn list_view(&self) -> ListView {
        match self.status {
            LoadStatus::Loading => ListView::Loading,
            LoadStatus::Failed => ListView::Failed(LOAD_FAILED_MESSAGE),
            LoadStatus::Loaded => ListView::Cards(self.card_models()),
        }
    }
}

/// Rows for a participant list: one per email, or a single placeholder.
pub fn participant_entries(emails: &[String]) -> Vec<ParticipantEntry> {
    if emails.is_empty() {
        return vec![ParticipantEntry::Placeholder];
    }
    emails.iter().cloned().map(ParticipantEntry::Email).collect()
}
