use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::Json;
use lightcontrol::settings::{self, apply_changes, snapshot};
use log::{info, warn};
use serde_json::{Map, Value};
use transport::Response;

use crate::web_service::ServiceError;
use crate::SharedTranslator;

pub async fn settings(State(translator): State<SharedTranslator>) -> Json<BTreeMap<String, String>> {
    let translator = translator.lock().await;
    Json(snapshot(translator.settings()))
}

pub async fn update_settings(
    State(translator): State<SharedTranslator>,
    Json(changes): Json<Map<String, Value>>,
) -> Result<HttpResponse, ServiceError> {
    let mut translator = translator.lock().await;

    match apply_changes(translator.settings_mut(), &changes) {
        Ok(()) => {
            info!(
                "updated settings: {}",
                changes.keys().cloned().collect::<Vec<_>>().join(", ")
            );
            Ok(Json(snapshot(translator.settings())).into_response())
        }
        Err(err @ (settings::Error::UnknownKey(_) | settings::Error::InvalidValue(_))) => {
            warn!("rejected settings update: {err}");
            Ok((StatusCode::BAD_REQUEST, Json(Response::failure(err.to_string()))).into_response())
        }
        Err(err) => Err(err.into()),
    }
}
