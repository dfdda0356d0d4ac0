use actix_web::web;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

/// Reads an optional JSON body. Only an empty body falls back to the defaults;
/// anything else must deserialize.
pub fn json_or_default<T>(body: &web::Bytes) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
}
