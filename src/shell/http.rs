use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::people::use_cases::get_person_by_full_name::inbound::http as get_http;
use crate::modules::people::use_cases::list_people_by_last_name::inbound::http as list_http;
use crate::modules::people::use_cases::register_person::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/person", post(register_http::handle))
        .route("/person/{last_name}", get(list_http::handle))
        .route("/person/{last_name}/{first_name}", get(get_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
