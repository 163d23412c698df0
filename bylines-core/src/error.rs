use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("malformed link: no domain suffix found in '{0}'")]
    MalformedLink(String),

    #[error("article #{index} (id '{id}') has no author")]
    MissingAuthor { index: usize, id: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
