use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flattened text of an uploaded PDF. Replaced wholesale on re-upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub file_name: Option<String>,
    pub byte_size: usize,
    pub text: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(file_name: Option<String>, byte_size: usize, text: String) -> Self {
        Document {
            id: uuid::Uuid::new_v4().to_string(),
            file_name,
            byte_size,
            text,
            uploaded_at: Utc::now(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn info(&self) -> DocumentInfo {
        DocumentInfo {
            id: self.id.clone(),
            file_name: self.file_name.clone(),
            byte_size: self.byte_size,
            char_count: self.char_count(),
            uploaded_at: self.uploaded_at,
        }
    }
}

/// What the client sees about the document; the text itself stays server side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentInfo {
    pub id: String,
    pub file_name: Option<String>,
    pub byte_size: usize,
    pub char_count: usize,
    pub uploaded_at: DateTime<Utc>,
}
