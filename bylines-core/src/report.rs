// Report generation from a built graph

use crate::graph::{ArticleGraph, GraphNode};
use crate::layout::{LayoutConfig, RenderScene};
use petgraph::dot::{Config, Dot};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Markdown,
    Dot,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            "dot" | "gv" | "graphviz" => Some(ReportFormat::Dot),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Markdown => "md",
            ReportFormat::Dot => "dot",
        }
    }
}

pub fn render_report(
    format: ReportFormat,
    graph: &ArticleGraph,
    layout: &LayoutConfig,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(graph)),
        ReportFormat::Json => generate_json_report(graph, layout),
        ReportFormat::Csv => Ok(generate_csv_report(graph)),
        ReportFormat::Markdown => Ok(generate_markdown_report(graph)),
        ReportFormat::Dot => Ok(generate_dot_report(graph)),
    }
}

pub fn generate_text_report(graph: &ArticleGraph) -> String {
    let mut report = String::new();

    report.push_str(RULE);
    report.push_str("                          BYLINES GRAPH REPORT\n");
    report.push_str(RULE);
    report.push('\n');

    report.push_str(&format!("Domains:      {}\n", graph.domain_count()));
    report.push_str(&format!("Authors:      {}\n", graph.author_count()));
    report.push_str(&format!("Edges:        {}\n", graph.edges().len()));
    report.push('\n');

    if graph.is_empty() {
        report.push_str("  (empty)\n\n");
        return report;
    }

    report.push_str(RULE);
    report.push_str("DOMAINS\n");
    report.push_str(RULE);
    report.push('\n');

    for (idx, node) in graph.nodes().iter().enumerate() {
        if let GraphNode::Domain(domain) = node {
            report.push_str(&format!(
                "[{}] {}  ({} {})\n",
                idx,
                domain.domain,
                domain.authors.len(),
                plural(domain.authors.len(), "author", "authors")
            ));
            for (i, author) in domain.authors.iter().enumerate() {
                let prefix = if i == domain.authors.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                report.push_str(&format!(
                    "    {}{} ({})\n",
                    prefix, author.username, author.user_id
                ));
            }
        }
    }
    report.push('\n');

    report.push_str(RULE);
    report.push_str("AUTHORS\n");
    report.push_str(RULE);
    report.push('\n');

    for (idx, node) in graph.nodes().iter().enumerate() {
        if let Some(author) = node.as_author() {
            let domains = graph.edges().iter().filter(|e| e.target == idx).count();
            report.push_str(&format!(
                "[{}] {} ({})  posted to {} {}\n",
                idx,
                author.username,
                author.user_id,
                domains,
                plural(domains, "domain", "domains")
            ));
        }
    }
    report.push('\n');

    report
}

/// The render scene (`layout`, `nodes`, `edges`) with generator metadata
/// alongside. Renderers can read `nodes`/`edges` straight off the top level.
pub fn generate_json_report(
    graph: &ArticleGraph,
    layout: &LayoutConfig,
) -> Result<String, serde_json::Error> {
    let scene = RenderScene::new(graph, layout.clone());
    let mut json_report = serde_json::to_value(&scene)?;

    if let Some(object) = json_report.as_object_mut() {
        object.insert(
            "metadata".to_string(),
            serde_json::json!({
                "generator": "Bylines",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            }),
        );
        object.insert(
            "summary".to_string(),
            serde_json::json!({
                "domains": graph.domain_count(),
                "authors": graph.author_count(),
                "edges": graph.edges().len()
            }),
        );
    }

    serde_json::to_string_pretty(&json_report)
}

/// One row per edge
pub fn generate_csv_report(graph: &ArticleGraph) -> String {
    let mut report = String::from("source,target,domain,user_id,username\n");

    for edge in graph.edges() {
        let domain = graph.node(edge.source).map(GraphNode::label).unwrap_or("");
        let (user_id, username) = graph
            .node(edge.target)
            .and_then(GraphNode::as_author)
            .map(|a| (a.user_id.as_str(), a.username.as_str()))
            .unwrap_or(("", ""));

        report.push_str(&format!(
            "{},{},{},{},{}\n",
            edge.source,
            edge.target,
            csv_field(domain),
            csv_field(user_id),
            csv_field(username)
        ));
    }

    report
}

pub fn generate_markdown_report(graph: &ArticleGraph) -> String {
    let mut report = String::from("# Bylines graph\n\n");

    report.push_str(&format!(
        "**{}** domains, **{}** authors, **{}** edges\n\n",
        graph.domain_count(),
        graph.author_count(),
        graph.edges().len()
    ));

    report.push_str("## Domains\n\n");
    report.push_str("| # | Domain | Authors |\n");
    report.push_str("|---|--------|---------|\n");
    for (idx, node) in graph.nodes().iter().enumerate() {
        if let GraphNode::Domain(domain) = node {
            let names: Vec<&str> = domain.authors.iter().map(|a| a.username.as_str()).collect();
            report.push_str(&format!(
                "| {} | `{}` | {} |\n",
                idx,
                domain.domain,
                markdown_cell(&names.join(", "))
            ));
        }
    }

    report.push_str("\n## Authors\n\n");
    report.push_str("| # | Username | User ID |\n");
    report.push_str("|---|----------|---------|\n");
    for (idx, node) in graph.nodes().iter().enumerate() {
        if let Some(author) = node.as_author() {
            report.push_str(&format!(
                "| {} | {} | `{}` |\n",
                idx,
                markdown_cell(&author.username),
                author.user_id
            ));
        }
    }

    report
}

/// Graphviz output, labelled with domain keys and usernames
pub fn generate_dot_report(graph: &ArticleGraph) -> String {
    let labelled = graph.to_petgraph().map(|_, label| label.clone(), |_, _| "");
    format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn markdown_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
