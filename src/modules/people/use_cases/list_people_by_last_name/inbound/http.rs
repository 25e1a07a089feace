use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(last_name): Path<String>,
) -> impl IntoResponse {
    match state.people.find_by_last_name(&last_name).await {
        Ok(people) if people.is_empty() => {
            tracing::debug!(%last_name, "no people with last name");
            StatusCode::NOT_FOUND.into_response()
        }
        Ok(people) => Json(people).into_response(),
        Err(err) => {
            tracing::error!(error = %err, %last_name, "listing people by last name failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
