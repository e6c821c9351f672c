//! REST API endpoint handlers for the signup service.
//!
//! All handlers go through the shared [`AppState`] registry lock.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | HTML page listing activities |
//! | `GET` | `/activities` | All activities keyed by name |
//! | `GET` | `/activities/{name}` | Single activity record |
//! | `POST` | `/activities/{name}/signup?email=` | Add a participant |
//! | `DELETE` | `/activities/{name}/participants?email=` | Remove a participant |

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the signup and unregister endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct ParticipantQuery {
    /// The participant's email address.
    pub email: String,
}

impl ParticipantQuery {
    /// Unwrap the extractor result and reject blank emails.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidQuery`] if the `email` parameter is
    /// missing, malformed, or blank.
    pub fn validated(query: Result<Query<Self>, QueryRejection>) -> Result<String, ApiError> {
        let Query(Self { email }) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
        if email.trim().is_empty() {
            return Err(ApiError::InvalidQuery(String::from(
                "email must not be empty",
            )));
        }
        Ok(email)
    }
}

/// Confirmation body for successful roster changes.
#[derive(Debug, serde::Serialize)]
struct MessageResponse {
    /// Human-readable confirmation.
    message: String,
}

// ---------------------------------------------------------------------------
// GET / -- HTML index page
// ---------------------------------------------------------------------------

/// Serve the HTML page listing every activity with its roster.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let registry = state.registry.read().await;
    Ok(Html(views::render_index(&registry)?))
}

// ---------------------------------------------------------------------------
// GET /activities -- list activities
// ---------------------------------------------------------------------------

/// Return every activity keyed by name.
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let registry = state.registry.read().await;
    Ok(Json(serde_json::to_value(registry.list_activities())?))
}

// ---------------------------------------------------------------------------
// GET /activities/{name} -- single activity
// ---------------------------------------------------------------------------

/// Return a single activity record.
pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let registry = state.registry.read().await;
    let activity = registry
        .get(&name)
        .ok_or_else(|| ApiError::NotFound(String::from("Activity not found")))?;
    Ok(Json(serde_json::to_value(activity)?))
}

// ---------------------------------------------------------------------------
// POST /activities/{name}/signup -- add participant
// ---------------------------------------------------------------------------

/// Sign a student up for an activity.
///
/// Returns 404 if the activity does not exist and 400 if the student is
/// already on the roster or the email is missing.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let email = ParticipantQuery::validated(query)?;

    state.registry.write().await.signup(&name, &email)?;
    info!(activity = %name, email = %email, "Signed up participant");

    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {name}"),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /activities/{name}/participants -- remove participant
// ---------------------------------------------------------------------------

/// Remove a student from an activity's roster.
///
/// Returns 404 both when the activity does not exist and when the student
/// is not on the roster, and 400 if the email is missing.
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let email = ParticipantQuery::validated(query)?;

    state.registry.write().await.unregister(&name, &email)?;
    info!(activity = %name, email = %email, "Unregistered participant");

    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {name}"),
    }))
}
