use crate::error::{Result, SourceError};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Where the article feed lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleSource {
    Url(Url),
    File(PathBuf),
}

impl ArticleSource {
    /// `http(s)://` inputs are URLs, `file://` URLs and everything else are
    /// paths (with `~` expanded).
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SourceError::InvalidUrl("empty article source".to_string()));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            let url = Url::parse(input)
                .map_err(|e| SourceError::InvalidUrl(format!("{}: {}", input, e)))?;
            return Ok(ArticleSource::Url(url));
        }

        if input.starts_with("file://") {
            let path = Url::parse(input)
                .ok()
                .and_then(|u| u.to_file_path().ok())
                .ok_or_else(|| SourceError::InvalidUrl(format!("{}: not a local file URL", input)))?;
            return Ok(ArticleSource::File(path));
        }

        let expanded = shellexpand::tilde(input);
        Ok(ArticleSource::File(PathBuf::from(expanded.as_ref())))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ArticleSource::Url(_))
    }
}

impl fmt::Display for ArticleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleSource::Url(url) => write!(f, "{}", url),
            ArticleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
