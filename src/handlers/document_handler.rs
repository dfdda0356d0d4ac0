use actix_web::{get, http::header::CONTENT_TYPE, post, web, HttpRequest, HttpResponse};
use futures::StreamExt;

use crate::{
    app_state::AppState,
    auth::AuthenticatedSession,
    errors::{AppError, AppResult},
    models::dto::response::DocumentResponse,
    services::Upload,
};

const FILE_NAME_HEADER: &str = "x-file-name";

/// Reads the raw request body, stopping as soon as it passes `limit` bytes.
async fn read_body(mut payload: web::Payload, limit: usize) -> AppResult<web::Bytes> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk =
            chunk.map_err(|e| AppError::Validation(format!("Failed to read upload: {}", e)))?;
        if body.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "PDF exceeds the {} byte limit",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[post("/document")]
pub async fn upload_document(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let bytes = read_body(payload, state.config.max_upload_bytes).await?;
    let upload = Upload {
        file_name: header_value(&req, FILE_NAME_HEADER),
        content_type: header_value(&req, CONTENT_TYPE.as_str()),
        bytes,
    };

    let document = state
        .document_service
        .upload(&session.0.sub, upload)
        .await?;
    Ok(HttpResponse::Created().json(DocumentResponse {
        document,
        message: "PDF uploaded and text extracted".to_string(),
    }))
}

#[get("/document")]
pub async fn get_document(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let document = state.document_service.current(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(document))
}
