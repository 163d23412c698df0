pub mod error;
pub mod fetcher;
pub mod result;
pub mod source;

pub use error::SourceError;
pub use fetcher::{Fetcher, parse_articles, read_articles_file};
pub use result::FetchResult;
pub use source::ArticleSource;
