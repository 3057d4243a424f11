use crate::activities::Activity;
use crate::activities::SignupError;
use crate::activities::UnregisterError;
use crate::state;
use crate::templates;

use axum::Json;
use axum::extract::Path as AxumPath;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use std::collections::HashMap;

#[derive(Serialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

pub(crate) async fn activities_page(
    State(state): State<state::AppState>,
) -> templates::ActivitiesTemplate {
    let mut activities: Vec<templates::ActivityView> = {
        let registry = state.registry.lock().expect("activity registry lock");
        registry
            .activities()
            .iter()
            .map(|(name, activity)| templates::ActivityView {
                name: name.clone(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                max_participants: activity.max_participants,
                spots_left: activity
                    .max_participants
                    .saturating_sub(activity.participants.len() as u32),
                participants: activity.participants.clone(),
            })
            .collect()
    };
    activities.sort_by(|a, b| a.name.cmp(&b.name));

    templates::ActivitiesTemplate {
        app_name: state.config.app_name,
        activities,
    }
}

pub(crate) async fn activities_list(
    State(state): State<state::AppState>,
) -> Json<HashMap<String, Activity>> {
    let activities = {
        let registry = state.registry.lock().expect("activity registry lock");
        registry.activities().clone()
    };
    Json(activities)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignupQuery {
    pub(crate) email: String,
}

pub(crate) async fn activity_signup(
    State(state): State<state::AppState>,
    AxumPath(name): AxumPath<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "email is required.",
            }),
        ));
    }

    let mut registry = state.registry.lock().expect("activity registry lock");
    match registry.signup(&name, email) {
        Ok(()) => Ok(Json(MessageResponse {
            message: format!("Signed up {email} for {name}"),
        })),
        Err(SignupError::UnknownActivity) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Activity not found.",
            }),
        )),
        Err(SignupError::AlreadyRegistered) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Student is already signed up for this activity.",
            }),
        )),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UnregisterQuery {
    pub(crate) email: String,
}

pub(crate) async fn activity_unregister(
    State(state): State<state::AppState>,
    AxumPath(name): AxumPath<String>,
    Query(query): Query<UnregisterQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "email is required.",
            }),
        ));
    }

    let mut registry = state.registry.lock().expect("activity registry lock");
    match registry.unregister(&name, email) {
        Ok(()) => Ok(Json(MessageResponse {
            message: format!("Unregistered {email} from {name}"),
        })),
        Err(UnregisterError::UnknownActivity) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Activity not found.",
            }),
        )),
        Err(UnregisterError::NotRegistered) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Student is not signed up for this activity.",
            }),
        )),
    }
}
