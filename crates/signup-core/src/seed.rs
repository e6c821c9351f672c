//! Seed catalogue for the activity registry.
//!
//! The registry is populated exactly once at startup, either from the
//! built-in catalogue returned by [`default_activities`] or from a YAML
//! file read by [`load_seed_file`]. A seed file has the same shape as the
//! `GET /activities` response:
//!
//! ```yaml
//! Chess Club:
//!   description: Learn strategies and compete in chess tournaments
//!   schedule: Fridays, 3:30 PM - 5:00 PM
//!   max_participants: 12
//!   participants:
//!     - michael@mergington.edu
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use signup_types::Activity;

/// Errors that can occur when loading or validating seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Failed to read the seed file from disk.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        /// The seed file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the seed YAML.
    #[error("failed to parse seed YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// A roster lists the same email more than once.
    #[error("activity {activity} lists participant {email} more than once")]
    DuplicateParticipant {
        /// The activity name.
        activity: String,
        /// The duplicated email.
        email: String,
    },

    /// A roster contains a blank email.
    #[error("activity {activity} has a blank participant email")]
    EmptyParticipant {
        /// The activity name.
        activity: String,
    },
}

/// Check the roster invariants of a seed catalogue.
///
/// # Errors
///
/// Returns the first [`SeedError::EmptyParticipant`] or
/// [`SeedError::DuplicateParticipant`] found.
pub fn validate(activities: &BTreeMap<String, Activity>) -> Result<(), SeedError> {
    for (name, activity) in activities {
        let mut seen = BTreeSet::new();
        for email in &activity.participants {
            if email.trim().is_empty() {
                return Err(SeedError::EmptyParticipant {
                    activity: name.clone(),
                });
            }
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Parse and validate a seed catalogue from a YAML string.
///
/// # Errors
///
/// Returns [`SeedError::Yaml`] for malformed YAML, or a validation error
/// from [`validate`].
pub fn parse_seed(yaml: &str) -> Result<BTreeMap<String, Activity>, SeedError> {
    let activities: BTreeMap<String, Activity> = serde_yml::from_str(yaml)?;
    validate(&activities)?;
    Ok(activities)
}

/// Read, parse, and validate a seed catalogue from a YAML file.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_seed`].
pub fn load_seed_file(path: &Path) -> Result<BTreeMap<String, Activity>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&contents)
}

/// The built-in catalogue of school activities.
pub fn default_activities() -> BTreeMap<String, Activity> {
    let catalogue = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ];

    catalogue
        .into_iter()
        .map(|(name, activity)| (name.to_owned(), activity))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogue_is_valid() {
        let activities = default_activities();
        assert!(activities.contains_key("Chess Club"));
        assert!(activities.contains_key("Programming Class"));
        assert!(activities.contains_key("Gym Class"));
        validate(&activities).unwrap();
    }

    #[test]
    fn default_rosters_fit_capacity() {
        for activity in default_activities().values() {
            assert!(activity.participant_count() <= activity.max_participants as usize);
        }
    }

    #[test]
    fn parse_seed_yaml() {
        let yaml = r"
Chess Club:
  description: Learn strategies and compete in chess tournaments
  schedule: Fridays, 3:30 PM - 5:00 PM
  max_participants: 12
  participants:
    - michael@mergington.edu
Robotics:
  description: Build robots
  schedule: Saturdays
  max_participants: 8
";
        let activities = parse_seed(yaml).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["michael@mergington.edu"]
        );
        assert!(activities["Robotics"].participants.is_empty());
    }

    #[test]
    fn parse_seed_rejects_duplicate_participant() {
        let yaml = r"
Chess Club:
  description: d
  schedule: s
  max_participants: 2
  participants: [a@x.edu, a@x.edu]
";
        let err = parse_seed(yaml).unwrap_err();
        assert!(matches!(
            err,
            SeedError::DuplicateParticipant { ref email, .. } if email == "a@x.edu"
        ));
    }

    #[test]
    fn parse_seed_rejects_blank_participant() {
        let yaml = r#"
Chess Club:
  description: d
  schedule: s
  max_participants: 2
  participants: ["  "]
"#;
        assert!(matches!(
            parse_seed(yaml).unwrap_err(),
            SeedError::EmptyParticipant { .. }
        ));
    }

    #[test]
    fn parse_seed_rejects_malformed_yaml() {
        let err = parse_seed("Chess Club: [not, a, record]").unwrap_err();
        assert!(matches!(err, SeedError::Yaml { .. }));
    }

    #[test]
    fn load_seed_file_reads_yaml_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.yaml");
        std::fs::write(
            &path,
            "Chess Club:\n  description: Chess\n  schedule: Fridays\n  max_participants: 4\n  participants: [a@x.edu, b@x.edu]\n",
        )
        .unwrap();

        let activities = load_seed_file(&path).unwrap();

        assert_eq!(activities.len(), 1);
        assert_eq!(activities["Chess Club"].max_participants, 4);
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["a@x.edu", "b@x.edu"]
        );
    }

    #[test]
    fn load_seed_file_validates_rosters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.yaml");
        std::fs::write(
            &path,
            "Chess Club:\n  description: d\n  schedule: s\n  max_participants: 2\n  participants: [a@x.edu, a@x.edu]\n",
        )
        .unwrap();

        assert!(matches!(
            load_seed_file(&path).unwrap_err(),
            SeedError::DuplicateParticipant { .. }
        ));
    }

    #[test]
    fn load_seed_file_reports_missing_path() {
        let path = Path::new("definitely/not/a/seed.yaml");
        let err = load_seed_file(path).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
