//! Public contact-form handler.
//!
//! Validates the submission, then forwards it as a multipart form to the
//! configured relay endpoint. The relay response body is not interpreted
//! beyond its status; failures surface as a sanitized 500 so the visitor can
//! retry.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use korin_core::contact::{validate_contact, ContactMessage};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub ok: bool,
}

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactMessage>,
) -> AppResult<impl IntoResponse> {
    let message = validate_contact(&input)?;

    let Some(relay_url) = state.config.contact_relay_url.clone() else {
        return Err(AppError::InternalError(
            "CONTACT_RELAY_URL is not configured".into(),
        ));
    };

    let form = reqwest::multipart::Form::new()
        .text("name", message.name.clone())
        .text("email", message.email.clone())
        .text("message", message.message.clone());

    let response = state
        .http
        .post(&relay_url)
        .header(reqwest::header::ACCEPT, "application/json")
        .multipart(form)
        .send()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Contact relay request failed to send");
            AppError::InternalError("contact relay unreachable".into())
        })?;

    if !response.status().is_success() {
        tracing::error!(
            status = %response.status(),
            "Contact relay rejected the submission",
        );
        return Err(AppError::InternalError("contact relay request failed".into()));
    }

    tracing::info!(email = %message.email, "Contact form forwarded");

    Ok(Json(DataResponse {
        data: ContactAccepted { ok: true },
    }))
}
