use axum::Json;
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::application::ports::ChatSession;
use crate::domain::{ChatTurn, Upload};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

const DEFAULT_UPLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// Fields of a chat message as submitted, before validation. JSON bodies
/// cannot carry a file.
#[derive(Debug, Default, Deserialize)]
pub struct ChatMessageForm {
    pub message: Option<String>,
    pub user_name: Option<String>,
    pub language: Option<String>,
    #[serde(skip)]
    pub file: Option<Upload>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub response: String,
}

impl ChatMessageForm {
    pub fn into_turn(self) -> Result<ChatTurn, ApiError> {
        let user_name = required(self.user_name, "user_name")?;
        let language = required(self.language, "language")?;

        ChatTurn::new(self.message, self.file, user_name, language)
            .map_err(|e| ApiError::bad_request(e.to_string()))
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request(format!("Field '{field}' is required")))
}

/// `POST /chat/message`: accepts `multipart/form-data` (with an optional
/// `file` part) or a JSON body, and answers `{"response": ...}`.
#[tracing::instrument(skip(state, request))]
pub async fn chat_message_handler<S>(
    State(state): State<AppState<S>>,
    request: Request,
) -> Result<Json<ChatMessageResponse>, ApiError>
where
    S: ChatSession + ?Sized + 'static,
{
    let form = read_form(request).await?;

    let turn = form.into_turn().inspect_err(|e| {
        tracing::warn!(detail = %e.detail, "Chat message rejected");
    })?;

    tracing::debug!(
        message = %sanitize_prompt(&turn.message),
        attachment = ?turn.attachment_filename(),
        "Processing chat message"
    );

    match state.chat_service.reply(&turn).await {
        Ok(response) => Ok(Json(ChatMessageResponse { response })),
        Err(e) => {
            tracing::error!(error = %e, "Chat message failed");
            Err(ApiError::bad_gateway(e.to_string()))
        }
    }
}

async fn read_form(request: Request) -> Result<ChatMessageForm, ApiError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        read_multipart(request).await
    } else if content_type.starts_with("application/json") {
        let Json(form) = Json::<ChatMessageForm>::from_request(request, &())
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        Ok(form)
    } else {
        Err(ApiError::unsupported_media_type(format!(
            "Unsupported content type: {}",
            if content_type.is_empty() {
                "<none>"
            } else {
                content_type.as_str()
            }
        )))
    }
}

async fn read_multipart(request: Request) -> Result<ChatMessageForm, ApiError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?;

    let mut form = ChatMessageForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "message" => form.message = Some(field_text(field).await?),
            "user_name" => form.user_name = Some(field_text(field).await?),
            "language" => form.language = Some(field_text(field).await?),
            "file" => form.file = read_upload(field).await?,
            other => tracing::debug!(field = other, "Ignoring unknown multipart field"),
        }
    }

    Ok(form)
}

async fn field_text(field: Field<'_>) -> Result<String, ApiError> {
    field.text().await.map_err(multipart_error)
}

/// Browsers send an empty, unnamed file part when nothing was selected; that
/// counts as no upload.
async fn read_upload(field: Field<'_>) -> Result<Option<Upload>, ApiError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or(DEFAULT_UPLOAD_CONTENT_TYPE)
        .to_string();

    let data = field.bytes().await.map_err(multipart_error)?;

    if filename.is_empty() && data.is_empty() {
        return Ok(None);
    }

    tracing::debug!(
        filename = %filename,
        content_type = %content_type,
        bytes = data.len(),
        "File upload received"
    );

    Ok(Some(Upload::new(filename, content_type, data.to_vec())))
}

fn multipart_error(e: MultipartError) -> ApiError {
    ApiError {
        status: e.status(),
        detail: format!("Failed to read multipart: {}", e.body_text()),
    }
}
