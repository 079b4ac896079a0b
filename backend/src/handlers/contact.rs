//! HTTP handlers for the contact form

use std::path::PathBuf;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::header,
    Form, Json,
};
use shared::{ContactReceipt, ContactSubmission};

use crate::error::{AppError, AppResult};
use crate::services::ContactService;
use crate::AppState;

/// Contact form body, accepted as JSON or as a urlencoded form post.
///
/// An empty body reads as an empty submission so the missing-field check
/// reports it. Bodies that cannot be decoded become validation errors
/// instead of axum's plain-text rejections.
pub struct ContactBody(pub ContactSubmission);

#[axum::async_trait]
impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if is_form {
            let Form(input) = Form::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;
            return Ok(Self(input));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| invalid_body(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(ContactSubmission::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| invalid_body(e.to_string()))
    }
}

fn invalid_body(detail: String) -> AppError {
    tracing::debug!(detail = %detail, "Contact body rejected");
    AppError::ValidationError("Invalid request body".to_string())
}

/// Accept a contact form submission
pub async fn submit_contact(
    State(state): State<AppState>,
    ContactBody(input): ContactBody,
) -> AppResult<Json<ContactReceipt>> {
    let inbox = state.config.contact.inbox_path.as_ref().map(PathBuf::from);
    let service = ContactService::new(inbox);
    let receipt = service.submit(input).await?;
    Ok(Json(receipt))
}
