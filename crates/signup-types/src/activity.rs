//! The [`Activity`] record served by the registry.
//!
//! An activity carries descriptive fields that the signup logic never
//! inspects, plus the participant roster that signup and unregister
//! mutate. The roster keeps insertion order so listings show students in
//! the order they signed up.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named extracurricular activity and its roster of participant emails.
///
/// The activity name is not stored on the record; it is the key under
/// which the registry holds the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Activity {
    /// Human-readable description shown on the activity card.
    pub description: String,
    /// Free-form schedule text (e.g. "Fridays, 3:30 PM - 5:00 PM").
    pub schedule: String,
    /// Advertised roster capacity.
    pub max_participants: u32,
    /// Participant emails in signup order. Each email appears at most once.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper that seeds the roster.
    ///
    /// Duplicates are not filtered here; the registry rejects them when
    /// the activity is loaded.
    #[must_use]
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `email` is currently on the roster.
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of participants currently on the roster.
    pub const fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Remaining capacity, saturating at zero when over-subscribed.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// Append `email` to the roster.
    ///
    /// Returns `false` and leaves the roster untouched if the email is
    /// already present.
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.is_registered(email) {
            return false;
        }
        self.participants.push(email.to_owned());
        true
    }

    /// Remove `email` from the roster, preserving the order of the rest.
    ///
    /// Returns `false` if the email was not on the roster.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}
