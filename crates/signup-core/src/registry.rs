//! In-memory activity registry.
//!
//! The registry maps activity names to [`Activity`] records. It is
//! populated once at startup and never gains or loses activities after
//! that; only participant rosters change, and only through
//! [`ActivityRegistry::signup`] and [`ActivityRegistry::unregister`].
//!
//! # Membership
//!
//! For every `(activity, email)` pair membership is a two-state flag:
//!
//! ```text
//!   not registered --signup--> registered
//!   registered --unregister--> not registered
//! ```
//!
//! Each transition requires the opposite state as a precondition and
//! fails with a [`RegistryError`] otherwise. The registry performs no
//! locking; callers that share it across tasks wrap it in a lock.

use std::collections::BTreeMap;

use signup_types::Activity;
use tracing::debug;

use crate::seed::{self, SeedError};

/// Errors returned by the registry's state transitions.
///
/// All variants are expected, caller-recoverable conditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No activity with the given name exists.
    #[error("activity not found: {activity}")]
    ActivityNotFound {
        /// The requested activity name.
        activity: String,
    },

    /// The email is already on the activity's roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered {
        /// The activity name.
        activity: String,
        /// The participant email.
        email: String,
    },

    /// The email is not on the activity's roster.
    #[error("{email} is not signed up for {activity}")]
    NotRegistered {
        /// The activity name.
        activity: String,
        /// The participant email.
        email: String,
    },
}

/// The collection of all activities, keyed by name.
///
/// Listing order is lexicographic by activity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRegistry {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    /// Build a registry from a name-to-activity mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateParticipant`] if any roster lists the
    /// same email twice, or [`SeedError::EmptyParticipant`] if a roster
    /// contains a blank email.
    pub fn from_activities(activities: BTreeMap<String, Activity>) -> Result<Self, SeedError> {
        seed::validate(&activities)?;
        Ok(Self { activities })
    }

    /// Build a registry from the built-in seed catalogue.
    pub fn seeded() -> Self {
        Self {
            activities: seed::default_activities(),
        }
    }

    /// Read-only view of every activity, keyed by name.
    pub const fn list_activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Look up a single activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Whether `email` is on the roster of the named activity.
    ///
    /// Returns `false` for unknown activities.
    pub fn is_registered(&self, name: &str, email: &str) -> bool {
        self.activities
            .get(name)
            .is_some_and(|activity| activity.is_registered(email))
    }

    /// Number of activities in the registry.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the registry holds no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Add `email` to the roster of the named activity.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::ActivityNotFound`] if `name` is not registered.
    /// - [`RegistryError::AlreadyRegistered`] if `email` is already on the
    ///   roster. The roster is left unchanged.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self.find_mut(name)?;

        if !activity.add_participant(email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: name.to_owned(),
                email: email.to_owned(),
            });
        }

        debug!(
            activity = name,
            email,
            participants = activity.participant_count(),
            "Participant signed up"
        );
        Ok(())
    }

    /// Remove `email` from the roster of the named activity.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::ActivityNotFound`] if `name` is not registered.
    /// - [`RegistryError::NotRegistered`] if `email` is not on the roster.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self.find_mut(name)?;

        if !activity.remove_participant(email) {
            return Err(RegistryError::NotRegistered {
                activity: name.to_owned(),
                email: email.to_owned(),
            });
        }

        debug!(
            activity = name,
            email,
            participants = activity.participant_count(),
            "Participant unregistered"
        );
        Ok(())
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Activity, RegistryError> {
        self.activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound {
                activity: name.to_owned(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    const CHESS: &str = "Chess Club";
    const EMAIL: &str = "testuser@example.com";

    fn registry() -> ActivityRegistry {
        ActivityRegistry::seeded()
    }

    fn roster_len(registry: &ActivityRegistry, name: &str) -> usize {
        registry.get(name).map_or(0, Activity::participant_count)
    }

    #[test]
    fn list_includes_every_seeded_activity_with_roster() {
        let registry = registry();
        let seeded = seed::default_activities();
        assert_eq!(registry.len(), seeded.len());
        for (name, activity) in &seeded {
            assert_eq!(registry.list_activities().get(name), Some(activity));
        }
    }

    #[test]
    fn signup_adds_participant() {
        let mut registry = registry();
        assert!(!registry.is_registered(CHESS, EMAIL));

        registry.signup(CHESS, EMAIL).unwrap();

        assert!(registry.is_registered(CHESS, EMAIL));
        let participants = &registry.list_activities().get(CHESS).unwrap().participants;
        assert_eq!(participants.last().map(String::as_str), Some(EMAIL));
    }

    #[test]
    fn double_signup_fails_and_grows_roster_once() {
        let mut registry = registry();
        let before = roster_len(&registry, CHESS);

        registry.signup(CHESS, EMAIL).unwrap();
        let second = registry.signup(CHESS, EMAIL);

        assert_eq!(
            second,
            Err(RegistryError::AlreadyRegistered {
                activity: CHESS.to_owned(),
                email: EMAIL.to_owned(),
            })
        );
        assert_eq!(roster_len(&registry, CHESS), before + 1);
    }

    #[test]
    fn unregister_after_signup_removes_participant() {
        let mut registry = registry();
        registry.signup(CHESS, EMAIL).unwrap();

        registry.unregister(CHESS, EMAIL).unwrap();

        assert!(!registry.is_registered(CHESS, EMAIL));
    }

    #[test]
    fn unregister_unknown_participant_fails() {
        let mut registry = registry();
        let before = registry.clone();

        let result = registry.unregister(CHESS, "nobody@example.com");

        assert!(matches!(result, Err(RegistryError::NotRegistered { .. })));
        assert_eq!(registry, before);
    }

    #[test]
    fn unknown_activity_fails_for_both_transitions() {
        let mut registry = registry();
        for email in ["a@b.com", "", "michael@mergington.edu"] {
            assert!(matches!(
                registry.signup("NoSuchActivity", email),
                Err(RegistryError::ActivityNotFound { .. })
            ));
            assert!(matches!(
                registry.unregister("NoSuchActivity", email),
                Err(RegistryError::ActivityNotFound { .. })
            ));
        }
        assert_eq!(registry, ActivityRegistry::seeded());
    }

    #[test]
    fn signup_only_touches_named_activity() {
        let mut registry = registry();
        let before = registry.clone();

        registry.signup(CHESS, EMAIL).unwrap();

        for (name, activity) in registry.list_activities() {
            if name != CHESS {
                assert_eq!(before.get(name), Some(activity));
            }
        }
    }

    #[test]
    fn activity_names_are_case_sensitive() {
        let mut registry = registry();
        assert!(matches!(
            registry.signup("chess club", EMAIL),
            Err(RegistryError::ActivityNotFound { .. })
        ));
    }

    #[test]
    fn from_activities_rejects_duplicate_participant() {
        let mut activities = BTreeMap::new();
        activities.insert(
            String::from("Chess Club"),
            Activity::new("d", "s", 5).with_participants(["a@x.edu", "a@x.edu"]),
        );

        let err = ActivityRegistry::from_activities(activities).unwrap_err();

        assert!(matches!(err, SeedError::DuplicateParticipant { .. }));
    }

    #[test]
    fn from_activities_accepts_empty_registry() {
        let registry = ActivityRegistry::from_activities(BTreeMap::new()).unwrap();
        assert!(registry.is_empty());
    }
}
