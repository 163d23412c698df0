pub mod domain;
pub mod error;
pub mod graph;
pub mod layout;
pub mod model;
pub mod report;

pub use domain::{DomainKey, KeyExtractor, SuffixPatternExtractor, extract_domain_key};
pub use error::{GraphError, Result};
pub use graph::{
    ArticleGraph, AuthorNode, DomainNode, GraphBuilder, GraphEdge, GraphNode, MissingAuthorPolicy,
    build_graph,
};
pub use layout::{LayoutConfig, NodeStyle, RenderScene};
pub use model::{ArticleRecord, Author, UpVote};
pub use report::ReportFormat;
