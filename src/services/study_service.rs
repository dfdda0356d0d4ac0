use std::sync::Arc;

use validator::Validate;

use crate::{
    clients::GenerationClient,
    errors::{AppError, AppResult},
    models::{
        domain::{ArtifactKind, Document, GenerationRequest, Mode, SessionContext},
        dto::{
            request::{AskRequest, FlashcardsRequest, SummaryRequest},
            response::{AnswerResponse, ArtifactResponse},
        },
    },
    repositories::SessionRepository,
    services::auth_service::load_session,
};

/// The session's document, or the "upload first" input error.
pub fn current_document(session: &SessionContext) -> AppResult<&Document> {
    session
        .document
        .as_ref()
        .ok_or_else(|| AppError::Validation("Upload a PDF first".to_string()))
}

pub fn document_text(session: &SessionContext) -> AppResult<String> {
    current_document(session).map(|document| document.text.clone())
}

/// Output generated from one document must not land on its replacement.
pub fn ensure_same_document(session: &SessionContext, document_id: &str) -> AppResult<()> {
    match &session.document {
        Some(document) if document.id == document_id => Ok(()),
        _ => Err(AppError::Conflict(
            "The document was replaced while this was being generated. Please try again."
                .to_string(),
        )),
    }
}

/// Question answering and the text study artifacts.
pub struct StudyService {
    sessions: Arc<dyn SessionRepository>,
    generator: Arc<dyn GenerationClient>,
}

impl StudyService {
    pub fn new(sessions: Arc<dyn SessionRepository>, generator: Arc<dyn GenerationClient>) -> Self {
        Self {
            sessions,
            generator,
        }
    }

    pub async fn ask(&self, session_id: &str, request: AskRequest) -> AppResult<AnswerResponse> {
        request.validate()?;
        let question = request.question.trim().to_string();
        if question.is_empty() {
            return Err(AppError::Validation("Question must not be empty".to_string()));
        }

        let artifact = self
            .generate_artifact(session_id, ArtifactKind::Answer, |text| {
                GenerationRequest::new(Mode::Qa, text).with_query(question.clone())
            })
            .await?;

        Ok(AnswerResponse { question, artifact })
    }

    pub async fn summarize(
        &self,
        session_id: &str,
        request: SummaryRequest,
    ) -> AppResult<ArtifactResponse> {
        self.generate_artifact(session_id, ArtifactKind::Summary, |text| {
            GenerationRequest::new(Mode::Summary, text).with_style(request.style)
        })
        .await
    }

    pub async fn flashcards(
        &self,
        session_id: &str,
        request: FlashcardsRequest,
    ) -> AppResult<ArtifactResponse> {
        request.validate()?;

        self.generate_artifact(session_id, ArtifactKind::Flashcards, |text| {
            GenerationRequest::new(Mode::Flashcards, text).with_count(request.count)
        })
        .await
    }

    pub async fn outline(&self, session_id: &str) -> AppResult<ArtifactResponse> {
        self.generate_artifact(session_id, ArtifactKind::Outline, |text| {
            GenerationRequest::new(Mode::Outline, text)
        })
        .await
    }

    /// Text of the last artifact of `kind`, for download.
    pub async fn artifact(&self, session_id: &str, kind: ArtifactKind) -> AppResult<String> {
        let session = load_session(self.sessions.as_ref(), session_id).await?;
        session
            .artifact_text(kind)
            .ok_or_else(|| AppError::NotFound(format!("No {} has been generated yet", kind)))
    }

    /// One outbound call; the stored artifact changes only when it succeeds.
    async fn generate_artifact<F>(
        &self,
        session_id: &str,
        kind: ArtifactKind,
        build: F,
    ) -> AppResult<ArtifactResponse>
    where
        F: FnOnce(String) -> GenerationRequest,
    {
        let session = load_session(self.sessions.as_ref(), session_id).await?;
        let document = current_document(&session)?;
        let document_id = document.id.clone();
        let request = build(document.text.clone());

        let content = self.generator.generate(&request).await.map_err(|e| {
            log::warn!("Session {}: {} generation failed: {}", session_id, kind, e);
            e
        })?;

        let stored = content.clone();
        self.sessions
            .modify(
                session_id,
                Box::new(move |session: &mut SessionContext| {
                    ensure_same_document(session, &document_id)?;
                    session.store_artifact(kind, stored);
                    Ok(())
                }),
            )
            .await
            .map_err(|e| {
                if matches!(e, AppError::Conflict(_)) {
                    log::warn!("Session {}: discarded {} for a replaced document", session_id, kind);
                }
                e
            })?;

        Ok(ArtifactResponse::new(kind, content))
    }
}
