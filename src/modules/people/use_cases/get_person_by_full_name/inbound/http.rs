use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::infrastructure::person_store::PersonStoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct FullNamePath {
    pub last_name: String,
    pub first_name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(path): Path<FullNamePath>,
) -> impl IntoResponse {
    match state
        .people
        .find_by_full_name(&path.first_name, &path.last_name)
        .await
    {
        Ok(person) => Json(person).into_response(),
        Err(PersonStoreError::NotFound { .. }) => {
            tracing::debug!(
                first_name = %path.first_name,
                last_name = %path.last_name,
                "person not found"
            );
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "looking up person by full name failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
