use crate::error::{Result, SourceError};
use crate::result::FetchResult;
use crate::source::ArticleSource;
use bylines_core::model::ArticleRecord;
use reqwest::Client;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Bylines/0.1 (https://github.com/trapdoorsec/bylines)";

/// Loads the article feed. One request per call, no retries.
pub struct Fetcher {
    timeout_secs: u64,
    user_agent: String,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn client(&self) -> Result<Client> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.timeout_secs) / 2)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(client)
    }

    pub async fn load(&self, source: &ArticleSource) -> Result<FetchResult> {
        match source {
            ArticleSource::Url(url) => self.fetch(url).await,
            ArticleSource::File(path) => read_articles_file(path).await,
        }
    }

    pub async fn fetch(&self, url: &Url) -> Result<FetchResult> {
        info!("Fetching article feed from {}", url);

        let client = self.client()?;
        let start = Instant::now();
        let response = client.get(url.clone()).send().await?;
        let response_time = start.elapsed();

        let status = response.status();
        if !status.is_success() {
            warn!("Article feed {} answered {}", url, status);
            return Err(SourceError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let content_length = response.content_length();

        let body = response.text().await?;
        debug!("Read {} bytes from {}", body.len(), url);

        let mut result = FetchResult::new(url.to_string());
        result.status_code = Some(status.as_u16());
        result.content_type = content_type;
        result.content_length = content_length;
        result.response_time = response_time;
        result.articles = parse_articles(&body)?;

        info!(
            "Fetched {} articles from {} in {:?}",
            result.articles.len(),
            url,
            response_time
        );
        Ok(result)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a JSON array of article records
pub fn parse_articles(json: &str) -> Result<Vec<ArticleRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub async fn read_articles_file(path: &Path) -> Result<FetchResult> {
    info!("Reading article feed from {}", path.display());

    let start = Instant::now();
    let body = tokio::fs::read_to_string(path).await?;

    let mut result = FetchResult::new(path.display().to_string());
    result.content_length = Some(body.len() as u64);
    result.articles = parse_articles(&body)?;
    result.response_time = start.elapsed();

    info!("Read {} articles from {}", result.articles.len(), path.display());
    Ok(result)
}
