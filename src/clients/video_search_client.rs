use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Looks up the single best video for a search query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearchClient: Send + Sync {
    /// `Ok(None)` when the search ran but found nothing.
    async fn search_first_video(&self, query: &str) -> AppResult<Option<String>>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

pub struct YoutubeSearchClient {
    http: reqwest::Client,
    api_base_url: String,
    api_key: Option<SecretString>,
}

impl YoutubeSearchClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::Configuration(format!("Failed to build video search client: {}", e))
            })?;

        Ok(Self {
            http,
            api_base_url: config.youtube_api_base_url.trim_end_matches('/').to_string(),
            api_key: config.youtube_api_key.clone(),
        })
    }

    pub fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", video_id)
    }

    fn first_video_url(response: SearchResponse) -> Option<String> {
        response
            .items
            .into_iter()
            .find_map(|item| item.id.video_id)
            .filter(|id| !id.is_empty())
            .map(|id| Self::watch_url(&id))
    }
}

#[async_trait]
impl VideoSearchClient for YoutubeSearchClient {
    async fn search_first_video(&self, query: &str) -> AppResult<Option<String>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AppError::Configuration("YOUTUBE_API_KEY is not set".to_string())
        })?;

        let response = self
            .http
            .get(format!("{}/search", self.api_base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "1"),
                ("q", query),
                ("key", api_key.expose_secret()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "video search returned status {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(Self::first_video_url(body))
    }
}
