use std::panic::{self, AssertUnwindSafe};

use crate::errors::{AppError, AppResult};

const PDF_MAGIC: &[u8] = b"%PDF-";
const PAGE_BREAK: char = '\u{000C}';

/// True when the bytes carry the PDF magic and the declared content type, if any, allows a PDF.
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    head.starts_with(PDF_MAGIC)
        && (ct.is_empty() || ct.contains("application/pdf") || ct.contains("octet-stream"))
}

/// Pulls the text out of an in-memory PDF and flattens it into one string.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn extract(bytes: &[u8]) -> AppResult<String> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(AppError::Validation("Uploaded file is not a PDF".to_string()));
        }

        // pdf-extract panics on some malformed inputs instead of returning an error.
        let raw = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }))
        .map_err(|_| AppError::Pdf("PDF could not be read".to_string()))?
        .map_err(|e| AppError::Pdf(format!("Failed to extract PDF text: {}", e)))?;

        let text = flatten_pages(&raw);
        if text.is_empty() {
            return Err(AppError::Pdf("PDF contains no extractable text".to_string()));
        }

        Ok(text)
    }
}

/// Joins page texts with single spaces; layout inside a page is kept as-is.
fn flatten_pages(raw: &str) -> String {
    raw.split(PAGE_BREAK)
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
