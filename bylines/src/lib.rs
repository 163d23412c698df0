pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    GraphOptions, GraphRun, build_layout_config, build_report, domain_key_lines,
    graph_options_from_matches, load_articles, resolve_output_path, run_graph,
};

// Re-export the graph API from bylines-core
pub use bylines_core::{
    ArticleGraph, ArticleRecord, GraphBuilder, LayoutConfig, MissingAuthorPolicy, ReportFormat,
    build_graph,
};
