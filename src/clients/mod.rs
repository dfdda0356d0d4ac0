pub mod generation_client;
pub mod pdf_extractor;
pub mod video_search_client;

use std::{future::Future, time::Duration};

use crate::errors::{AppError, AppResult};

pub use generation_client::{GenerationClient, OpenAiGenerationClient};
pub use pdf_extractor::PdfExtractor;
pub use video_search_client::{VideoSearchClient, YoutubeSearchClient};

/// Bounds an outbound call; running past `limit` is an upstream failure.
pub async fn with_timeout<F, T>(limit: Duration, what: &str, call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(AppError::Upstream(format!(
            "{} timed out after {}s",
            what,
            limit.as_secs_f32()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_hung_call_times_out_as_upstream_error() {
        let result: AppResult<String> = with_timeout(
            Duration::from_millis(20),
            "generation request",
            std::future::pending(),
        )
        .await;

        match result {
            Err(AppError::Upstream(msg)) => assert!(msg.contains("timed out")),
            other => panic!("expected Upstream timeout, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_fast_call_passes_through() {
        let result = with_timeout(Duration::from_secs(1), "search", async {
            Ok::<_, AppError>(7)
        })
        .await;

        assert_eq!(result.unwrap(), 7);
    }
}
