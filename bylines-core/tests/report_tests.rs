// Tests for report generation and the render contract

use bylines_core::graph::{ArticleGraph, build_graph};
use bylines_core::layout::{AUTHOR_FILL, DOMAIN_FILL, LayoutConfig, RenderScene, node_style};
use bylines_core::model::{ArticleRecord, Author};
use bylines_core::report::{
    ReportFormat, generate_csv_report, generate_dot_report, generate_json_report,
    generate_markdown_report, generate_text_report, render_report, save_report,
};
use tempfile::TempDir;

fn sample_graph() -> ArticleGraph {
    let alice = Author::new("u1", "alice", "https://avatars.example.com/alice");
    let bob = Author::new("u2", "bob", "https://avatars.example.com/bob");
    let articles = vec![
        ArticleRecord::new("1", "https://acadgild.com/blog/x", alice.clone()),
        ArticleRecord::new("2", "https://acadgild.com/blog/y", bob.clone()),
        ArticleRecord::new("3", "https://medium.com/p/z", alice),
    ];
    build_graph(&articles).unwrap()
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str() {
    assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("json"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("csv"), Some(ReportFormat::Csv));
    assert_eq!(ReportFormat::from_str("markdown"), Some(ReportFormat::Markdown));
    assert_eq!(ReportFormat::from_str("dot"), Some(ReportFormat::Dot));
}

#[test]
fn test_report_format_aliases() {
    assert_eq!(ReportFormat::from_str("md"), Some(ReportFormat::Markdown));
    assert_eq!(ReportFormat::from_str("gv"), Some(ReportFormat::Dot));
    assert_eq!(ReportFormat::from_str("graphviz"), Some(ReportFormat::Dot));
}

#[test]
fn test_report_format_case_insensitive() {
    assert_eq!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("Csv"), Some(ReportFormat::Csv));
}

#[test]
fn test_report_format_invalid() {
    assert!(ReportFormat::from_str("pdf").is_none());
    assert!(ReportFormat::from_str("").is_none());
}

#[test]
fn test_report_format_extension() {
    assert_eq!(ReportFormat::Json.extension(), "json");
    assert_eq!(ReportFormat::Markdown.extension(), "md");
    assert_eq!(ReportFormat::Dot.extension(), "dot");
}

// ============================================================================
// Render Contract
// ============================================================================

#[test]
fn test_layout_defaults() {
    let layout = LayoutConfig::default();
    assert_eq!(layout.width, 800);
    assert_eq!(layout.height, 800);
    assert_eq!(layout.link_distance, 50.0);
    assert_eq!(layout.charge, -120.0);
}

#[test]
fn test_layout_builders() {
    let layout = LayoutConfig::default()
        .with_size(1024, 768)
        .with_link_distance(80.0)
        .with_charge(-300.0);
    assert_eq!((layout.width, layout.height), (1024, 768));
    assert_eq!(layout.link_distance, 80.0);
    assert_eq!(layout.charge, -300.0);
}

#[test]
fn test_node_styles() {
    let graph = sample_graph();

    let acadgild = node_style(&graph.nodes()[0]);
    assert_eq!(acadgild.radius, 4.0);
    assert_eq!(acadgild.fill, DOMAIN_FILL);

    let medium = node_style(&graph.nodes()[1]);
    assert_eq!(medium.radius, 2.0);

    let alice = node_style(&graph.nodes()[2]);
    assert_eq!(alice.radius, 5.0);
    assert_eq!(alice.fill, AUTHOR_FILL);
}

#[test]
fn test_render_scene_keeps_indices() {
    let graph = sample_graph();
    let scene = RenderScene::new(&graph, LayoutConfig::default());

    assert_eq!(scene.nodes.len(), graph.nodes().len());
    assert_eq!(scene.edges, graph.edges());

    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["nodes"][0]["domain"], "https://acadgild.com/");
    assert_eq!(json["nodes"][0]["style"]["radius"], 4.0);
    assert_eq!(json["nodes"][2]["author"]["userId"], "u1");
    assert_eq!(json["layout"]["width"], 800);
}

// ============================================================================
// Report Content
// ============================================================================

#[test]
fn test_text_report() {
    let report = generate_text_report(&sample_graph());

    assert!(report.contains("BYLINES GRAPH REPORT"));
    assert!(report.contains("Domains:      2"));
    assert!(report.contains("Authors:      2"));
    assert!(report.contains("Edges:        3"));
    assert!(report.contains("[0] https://acadgild.com/  (2 authors)"));
    assert!(report.contains("[1] https://medium.com/  (1 author)"));
    assert!(report.contains("alice (u1)  posted to 2 domains"));
    assert!(report.contains("bob (u2)  posted to 1 domain"));
}

#[test]
fn test_text_report_empty_graph() {
    let report = generate_text_report(&ArticleGraph::default());
    assert!(report.contains("Domains:      0"));
    assert!(report.contains("(empty)"));
}

#[test]
fn test_json_report() {
    let report = generate_json_report(&sample_graph(), &LayoutConfig::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["metadata"]["generator"], "Bylines");
    assert_eq!(json["summary"]["domains"], 2);
    assert_eq!(json["summary"]["authors"], 2);
    assert_eq!(json["summary"]["edges"], 3);
    assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(json["edges"][0]["source"], 0);
    assert_eq!(json["edges"][0]["target"], 2);
    assert_eq!(json["layout"]["charge"], -120.0);
}

#[test]
fn test_csv_report() {
    let report = generate_csv_report(&sample_graph());
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "source,target,domain,user_id,username");
    assert_eq!(lines[1], "0,2,https://acadgild.com/,u1,alice");
    assert_eq!(lines[2], "0,3,https://acadgild.com/,u2,bob");
    assert_eq!(lines[3], "1,2,https://medium.com/,u1,alice");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_markdown_report() {
    let report = generate_markdown_report(&sample_graph());

    assert!(report.starts_with("# Bylines graph"));
    assert!(report.contains("**2** domains, **2** authors, **3** edges"));
    assert!(report.contains("| 0 | `https://acadgild.com/` | alice, bob |"));
    assert!(report.contains("| 3 | bob | `u2` |"));
}

#[test]
fn test_dot_report() {
    let report = generate_dot_report(&sample_graph());

    assert!(report.starts_with("digraph"));
    assert!(report.contains("https://acadgild.com/"));
    assert!(report.contains("alice"));
    assert!(report.contains("0 -> 2"));
    assert!(report.contains("1 -> 2"));
}

#[test]
fn test_render_report_dispatch() {
    let graph = sample_graph();
    let layout = LayoutConfig::default();

    let csv = render_report(ReportFormat::Csv, &graph, &layout).unwrap();
    assert!(csv.starts_with("source,target"));

    let text = render_report(ReportFormat::Text, &graph, &layout).unwrap();
    assert!(text.contains("BYLINES GRAPH REPORT"));
}

// ============================================================================
// Saving Reports
// ============================================================================

#[test]
fn test_save_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.json");

    save_report("{\"nodes\":[]}", &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "{\"nodes\":[]}");
}

#[test]
fn test_save_report_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("graph.json");
    assert!(save_report("x", &path).is_err());
}
