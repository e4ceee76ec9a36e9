mod light;
mod panel;
mod pong;
mod settings;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::routing::{get, head, post};
use axum::{Json, Router};
use log::error;
use transport::Response;
use uuid::Uuid;

use crate::{Error, SharedTranslator};

/// An internal failure while serving a request. The id is logged and handed
/// back to the caller so the two can be matched up.
pub struct ServiceError {
    error: Error,
    id: Uuid,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> HttpResponse {
        error!("request {} failed: {}", self.id, self.error);

        let body = Response::failure(format!("internal error {}", self.id));
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<Error> for ServiceError {
    fn from(error: Error) -> Self {
        ServiceError {
            error,
            id: Uuid::new_v4(),
        }
    }
}

impl From<lightcontrol::settings::Error> for ServiceError {
    fn from(error: lightcontrol::settings::Error) -> Self {
        Error::from(error).into()
    }
}

pub fn router(translator: SharedTranslator) -> Router {
    Router::new()
        .route("/", get(panel::panel))
        .route("/ping", head(pong::pong).get(pong::pong))
        .route("/api/light", post(light::command))
        .route(
            "/api/settings",
            get(settings::settings).post(settings::update_settings),
        )
        .with_state(translator)
}
