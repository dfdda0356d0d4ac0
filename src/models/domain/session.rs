use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::domain::{document::Document, quiz::Quiz};

/// A downloadable text artifact produced for the current document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Answer,
    Summary,
    Flashcards,
    Quiz,
    Outline,
}

impl ArtifactKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Answer => "answer.txt",
            ArtifactKind::Summary => "summary.txt",
            ArtifactKind::Flashcards => "flashcards.txt",
            ArtifactKind::Quiz => "quiz.txt",
            ArtifactKind::Outline => "notebook_outline.txt",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Answer => "answer",
            ArtifactKind::Summary => "summary",
            ArtifactKind::Flashcards => "flashcards",
            ArtifactKind::Quiz => "quiz",
            ArtifactKind::Outline => "outline",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "answer" => Ok(ArtifactKind::Answer),
            "summary" => Ok(ArtifactKind::Summary),
            "flashcards" => Ok(ArtifactKind::Flashcards),
            "quiz" => Ok(ArtifactKind::Quiz),
            "outline" => Ok(ArtifactKind::Outline),
            other => Err(AppError::NotFound(format!("Unknown artifact '{}'", other))),
        }
    }
}

/// Per-login state handed to every handler through the session repository.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub id: String,
    pub name: String,
    pub email: String,
    pub document: Option<Document>,
    pub artifacts: HashMap<ArtifactKind, String>,
    pub quiz: Option<Quiz>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(name: &str, email: &str, expires_at: DateTime<Utc>) -> Self {
        SessionContext {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            document: None,
            artifacts: HashMap::new(),
            quiz: None,
            created_at: Utc::now(),
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Installs a freshly uploaded document and drops everything derived from the old one.
    pub fn replace_document(&mut self, document: Document) {
        self.document = Some(document);
        self.artifacts.clear();
        self.quiz = None;
    }

    pub fn store_artifact(&mut self, kind: ArtifactKind, content: String) {
        self.artifacts.insert(kind, content);
    }

    /// Quiz downloads are rendered from the held quiz rather than stored text.
    pub fn artifact_text(&self, kind: ArtifactKind) -> Option<String> {
        match kind {
            ArtifactKind::Quiz => self.quiz.as_ref().map(|quiz| quiz.to_text()),
            _ => self.artifacts.get(&kind).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session() -> SessionContext {
        SessionContext::new("Ada", "ada@example.com", Utc::now() + Duration::hours(1))
    }

    #[test]
    fn test_new_session_is_empty_and_live() {
        let session = session();

        assert!(session.document.is_none());
        assert!(session.artifacts.is_empty());
        assert!(session.quiz.is_none());
        assert!(!session.is_expired());
    }

    #[test]
    fn test_replace_document_clears_derived_state() {
        let mut session = session();
        session.replace_document(Document::new(None, 10, "first".to_string()));
        session.store_artifact(ArtifactKind::Summary, "old summary".to_string());

        session.replace_document(Document::new(None, 20, "second".to_string()));

        assert_eq!(session.document.as_ref().map(|d| d.text.as_str()), Some("second"));
        assert!(session.artifact_text(ArtifactKind::Summary).is_none());
    }

    #[test]
    fn test_artifact_kind_round_trip_and_file_names() {
        for kind in [
            ArtifactKind::Answer,
            ArtifactKind::Summary,
            ArtifactKind::Flashcards,
            ArtifactKind::Quiz,
            ArtifactKind::Outline,
        ] {
            assert_eq!(kind.as_str().parse::<ArtifactKind>().unwrap(), kind);
            assert!(kind.file_name().ends_with(".txt"));
        }
        assert_eq!(ArtifactKind::Outline.file_name(), "notebook_outline.txt");
        assert!("video".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn test_expired_session() {
        let session = SessionContext::new("Ada", "ada@example.com", Utc::now() - Duration::minutes(1));
        assert!(session.is_expired());
    }
}
