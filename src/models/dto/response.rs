use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{ArtifactKind, DocumentInfo};

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub session_id: String,
    pub name: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactResponse {
    pub kind: ArtifactKind,
    pub content: String,
    pub download_path: String,
}

impl ArtifactResponse {
    pub fn new(kind: ArtifactKind, content: String) -> Self {
        ArtifactResponse {
            kind,
            content,
            download_path: format!("/api/artifacts/{}", kind),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub question: String,
    #[serde(flatten)]
    pub artifact: ArtifactResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    #[serde(flatten)]
    pub document: DocumentInfo,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub url: Option<String>,
    pub message: String,
}

impl VideoResponse {
    pub fn from_url(url: Option<String>) -> Self {
        let message = if url.is_some() {
            "Found a related video".to_string()
        } else {
            "No relevant video found.".to_string()
        };
        VideoResponse { url, message }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
