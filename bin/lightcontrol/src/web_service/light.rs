use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lightcontrol::{Command, Error};
use log::{debug, warn};
use serde_json::Value;
use transport::Response;

use crate::SharedTranslator;

pub async fn command(
    State(translator): State<SharedTranslator>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Response>) {
    debug!("[light]: {body}");

    let result = match Command::from_json(&body) {
        Ok(command) => translator.lock().await.execute(command),
        Err(err) => Err(err),
    };

    match result {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(err) => {
            warn!("light command rejected: {err} ({err:?})");
            (status_code(&err), Json(Response::failure(err.to_string())))
        }
    }
}

fn status_code(err: &Error) -> StatusCode {
    match err {
        Error::InvalidStateParameter | Error::UnknownCommand => StatusCode::BAD_REQUEST,
        Error::BadTarget(_) | Error::UnknownState(_) => StatusCode::OK,
    }
}
