#[cfg(test)]
#[path = "participants_test.rs"]
mod participants_test;

use std::collections::HashMap;

use crate::net::types::Signup;

/// Participant emails grouped by activity id.
///
/// Derived from the signup list on every load and patched locally after a
/// successful signup or withdrawal. The server stays authoritative: the next
/// load replaces the whole index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipantIndex {
    by_activity: HashMap<String, Vec<String>>,
}

impl ParticipantIndex {
    /// Group signups by activity id, keeping input order within each group.
    pub fn from_signups(signups: &[Signup]) -> Self {
        let mut by_activity: HashMap<String, Vec<String>> = HashMap::new();
        for signup in signups {
            by_activity
                .entry(signup.activity_id.clone())
                .or_default()
                .push(signup.email.clone());
        }
        Self { by_activity }
    }

    /// Emails signed up for `activity_id`, in signup order.
    pub fn participants(&self, activity_id: &str) -> &[String] {
        self.by_activity.get(activity_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Append `email` to the activity's list. Returns `false` when the email
    /// is already listed, in which case nothing changes.
    pub fn add(&mut self, activity_id: &str, email: &str) -> bool {
        let emails = self.by_activity.entry(activity_id.to_owned()).or_default();
        if emails.iter().any(|existing| existing == email) {
            return false;
        }
        emails.push(email.to_owned());
        true
    }

    /// Remove `email` from the activity's list. Returns `false` when it was
    /// not listed.
    pub fn remove(&mut self, activity_id: &str, email: &str) -> bool {
        let Some(emails) = self.by_activity.get_mut(activity_id) else {
            return false;
        };
        let before = emails.len();
        emails.retain(|existing| existing != email);
        emails.len() != before
    }

    /// Total number of (activity, email) entries.
    pub fn len(&self) -> usize {
        self.by_activity.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
