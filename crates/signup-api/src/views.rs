//! HTML rendering for the index page via `minijinja`.
//!
//! The template is compiled into the binary and parsed once, on first
//! use. Because it is registered under an `.html` name, `minijinja`
//! escapes every interpolated value, so participant emails are rendered
//! as text even when they contain markup.
//!
//! The page carries a signup form and per-participant unregister buttons
//! wired to the JSON endpoints by a small inline script.

use std::sync::LazyLock;

use minijinja::{context, Environment};
use serde::Serialize;
use signup_core::ActivityRegistry;

use crate::error::ApiError;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

static INDEX_ENV: LazyLock<Result<Environment<'static>, minijinja::Error>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)?;
    Ok(env)
});

/// One activity card on the index page.
#[derive(Debug, Serialize)]
struct ActivityCard<'a> {
    name: &'a str,
    description: &'a str,
    schedule: &'a str,
    spots_left: u32,
    participants: &'a [String],
}

/// Render the index page for the current registry contents.
///
/// # Errors
///
/// Returns [`ApiError::Template`] if the template fails to compile or
/// render.
pub fn render_index(registry: &ActivityRegistry) -> Result<String, ApiError> {
    let env = INDEX_ENV
        .as_ref()
        .map_err(|e| ApiError::Template(format!("index template invalid: {e}")))?;

    let activities: Vec<ActivityCard<'_>> = registry
        .list_activities()
        .iter()
        .map(|(name, activity)| ActivityCard {
            name,
            description: &activity.description,
            schedule: &activity.schedule,
            spots_left: activity.spots_left(),
            participants: &activity.participants,
        })
        .collect();

    env.get_template("index.html")
        .and_then(|tpl| tpl.render(context! { activities }))
        .map_err(|e| ApiError::Template(format!("index render failed: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use signup_types::Activity;

    use super::*;

    #[test]
    fn renders_every_activity() {
        let registry = ActivityRegistry::seeded();
        let html = render_index(&registry).unwrap();
        for name in registry.list_activities().keys() {
            assert!(html.contains(name.as_str()), "missing {name}");
        }
        assert!(html.contains("michael@mergington.edu"));
    }

    #[test]
    fn escapes_participant_markup() {
        let mut activities = BTreeMap::new();
        activities.insert(
            String::from("Chess Club"),
            Activity::new("d", "s", 3).with_participants(["<script>x</script>@a.com"]),
        );
        let registry = ActivityRegistry::from_activities(activities).unwrap();

        let html = render_index(&registry).unwrap();

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_signup_and_unregister_controls() {
        let html = render_index(&ActivityRegistry::seeded()).unwrap();

        assert!(html.contains(r#"<form id="signup-form""#));
        assert!(html.contains(r#"<option value="Chess Club">"#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"id="message""#));
        assert!(html.contains(
            r#"data-activity="Chess Club" data-email="michael@mergington.edu""#
        ));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn repeated_renders_share_environment() {
        let registry = ActivityRegistry::seeded();
        let first = render_index(&registry).unwrap();
        let second = render_index(&registry).unwrap();

        assert_eq!(first, second);
        assert!(INDEX_ENV.is_ok());
    }

    #[test]
    fn shows_placeholder_for_empty_roster() {
        let mut activities = BTreeMap::new();
        activities.insert(String::from("Robotics"), Activity::new("d", "s", 8));
        let registry = ActivityRegistry::from_activities(activities).unwrap();

        let html = render_index(&registry).unwrap();

        assert!(html.contains("No participants yet."));
    }
}
