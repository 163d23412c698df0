use bylines_core::model::ArticleRecord;
use std::time::Duration;

/// Outcome of loading the article feed once
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL or file path the feed came from
    pub source: String,
    /// `None` for file sources
    pub status_code: Option<u16>,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub response_time: Duration,
    pub articles: Vec<ArticleRecord>,
}

impl FetchResult {
    pub fn new(source: String) -> Self {
        Self {
            source,
            status_code: None,
            content_type: None,
            content_length: None,
            response_time: Duration::from_secs(0),
            articles: Vec::new(),
        }
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}
