use std::sync::Arc;

use actix_web::web;

use crate::{
    clients::{pdf_extractor::is_pdf, PdfExtractor},
    errors::{AppError, AppResult},
    models::domain::{Document, DocumentInfo, SessionContext},
    repositories::SessionRepository,
    services::auth_service::load_session,
};

/// An uploaded file as it arrives from the client.
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: web::Bytes,
}

pub struct DocumentService {
    sessions: Arc<dyn SessionRepository>,
    max_upload_bytes: usize,
}

impl DocumentService {
    pub fn new(sessions: Arc<dyn SessionRepository>, max_upload_bytes: usize) -> Self {
        Self {
            sessions,
            max_upload_bytes,
        }
    }

    /// Extracts the upload's text and makes it the session's document,
    /// dropping every artifact and quiz derived from the previous one.
    pub async fn upload(&self, session_id: &str, upload: Upload) -> AppResult<DocumentInfo> {
        if upload.bytes.is_empty() {
            return Err(AppError::Validation("No file uploaded".to_string()));
        }
        if upload.bytes.len() > self.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "PDF is {} bytes; the limit is {}",
                upload.bytes.len(),
                self.max_upload_bytes
            )));
        }
        if !is_pdf(upload.content_type.as_deref(), &upload.bytes) {
            return Err(AppError::Validation(
                "Only PDF uploads are supported".to_string(),
            ));
        }

        let byte_size = upload.bytes.len();
        let bytes = upload.bytes;
        let text = web::block(move || PdfExtractor::extract(&bytes)).await??;

        let document = Document::new(upload.file_name, byte_size, text);
        let info = document.info();

        self.sessions
            .modify(
                session_id,
                Box::new(move |session: &mut SessionContext| {
                    session.replace_document(document);
                    Ok(())
                }),
            )
            .await?;

        log::info!(
            "Session {} loaded document {} ({} bytes, {} chars)",
            session_id,
            info.id,
            info.byte_size,
            info.char_count
        );
        Ok(info)
    }

    pub async fn current(&self, session_id: &str) -> AppResult<DocumentInfo> {
        let session = load_session(self.sessions.as_ref(), session_id).await?;
        session
            .document
            .as_ref()
            .map(Document::info)
            .ok_or_else(|| AppError::NotFound("No document has been uploaded".to_string()))
    }
}
