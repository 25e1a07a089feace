use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::people::use_cases::register_person::command::RegisterPerson;
use crate::modules::people::use_cases::register_person::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPersonBody {
    pub first_name: String,
    pub last_name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterPersonBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected register person body");
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    let command = RegisterPerson {
        first_name: body.first_name,
        last_name: body.last_name,
    };

    match state.register_handler.handle(command).await {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(ApplicationError::Domain(reason)) => {
            tracing::warn!(%reason, "person registration rejected");
            (StatusCode::CONFLICT, reason.to_string()).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "person registration failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
