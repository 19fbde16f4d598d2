use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

use mergington::data::{Activities, EmailQuery, MessageResponse};
use mergington::id::{ActivityName, Email};
use mergington::log;
use mergington::serde::Deserialize;

use crate::error::ApiError;
use crate::services::ActivityService;

/// Unregister tolerates a missing `email` so it can answer with
/// "Email is required" instead of a query rejection.
#[derive(Debug, Deserialize)]
#[serde(crate = "mergington::serde")]
pub struct UnregisterQuery {
    #[serde(default)]
    pub email: Option<Email>,
}

/// Handler to list every activity with its roster
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Result<Json<Activities>, ApiError> {
    let activities = state.activities.list().await?;
    Ok(Json(activities))
}

/// Handler to sign a participant up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    path: Result<Path<ActivityName>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query.inspect_err(|rejection| {
        log::warn!("Signup for {} rejected: {}", activity_name, rejection.body_text())
    })?;

    if let Err(err) = state.activities.signup(&activity_name, &query.email).await {
        log::warn!("Signup of {} for {} rejected: {}", query.email, activity_name, err);
        return Err(err.into());
    }

    log::info!("Signed up {} for {}", query.email, activity_name);
    Ok(Json(MessageResponse::signed_up(&query.email, &activity_name)))
}

/// Handler to remove a participant from an activity, matching the email
/// case-insensitively
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    path: Result<Path<ActivityName>, PathRejection>,
    query: Result<Query<UnregisterQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = query.email.unwrap_or_else(|| Email::from(""));

    match state.activities.unregister(&activity_name, &email).await {
        Ok(normalized) => {
            log::info!("Unregistered {} from {}", normalized, activity_name);
            Ok(Json(MessageResponse::unregistered(&normalized, &activity_name)))
        }
        Err(err) => {
            log::warn!("Unregister of {:?} from {} rejected: {}", email.as_str(), activity_name, err);
            Err(err.into())
        }
    }
}
