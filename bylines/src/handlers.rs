use bylines_core::domain::extract_domain_key;
use bylines_core::graph::{ArticleGraph, GraphBuilder, MissingAuthorPolicy};
use bylines_core::layout::LayoutConfig;
use bylines_core::model::ArticleRecord;
use bylines_core::report::{ReportFormat, render_report, save_report};
use bylines_source::{ArticleSource, Fetcher};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::commands::DEFAULT_SOURCE;

/// Everything `graph` needs, pulled out of the command line
#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub source: ArticleSource,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub missing_author: MissingAuthorPolicy,
    pub timeout_secs: u64,
    pub layout: LayoutConfig,
}

/// What a finished `graph` run produced
#[derive(Debug)]
pub struct GraphRun {
    pub graph: ArticleGraph,
    pub report: String,
    pub article_count: usize,
}

pub fn graph_options_from_matches(args: &ArgMatches) -> Result<GraphOptions, String> {
    let source_arg = args
        .get_one::<String>("source")
        .map(String::as_str)
        .unwrap_or(DEFAULT_SOURCE);
    let source = ArticleSource::parse(source_arg).map_err(|e| e.to_string())?;

    let format_arg = args.get_one::<String>("format").map(String::as_str).unwrap_or("json");
    let format = ReportFormat::from_str(format_arg)
        .ok_or_else(|| format!("Unsupported format '{}'", format_arg))?;

    let output = args
        .get_one::<String>("output")
        .map(|raw| resolve_output_path(raw));

    let missing_author = if args.get_flag("skip-missing-authors") {
        MissingAuthorPolicy::Skip
    } else {
        MissingAuthorPolicy::Reject
    };

    let timeout_secs = *args.get_one::<u64>("timeout").unwrap_or(&10);

    Ok(GraphOptions {
        source,
        format,
        output,
        missing_author,
        timeout_secs,
        layout: build_layout_config(args),
    })
}

pub fn build_layout_config(args: &ArgMatches) -> LayoutConfig {
    let defaults = LayoutConfig::default();
    let width = args.get_one::<u32>("width").copied().unwrap_or(defaults.width);
    let height = args.get_one::<u32>("height").copied().unwrap_or(defaults.height);
    let link_distance = args
        .get_one::<f64>("link-distance")
        .copied()
        .unwrap_or(defaults.link_distance);
    let charge = args.get_one::<f64>("charge").copied().unwrap_or(defaults.charge);

    defaults
        .with_size(width, height)
        .with_link_distance(link_distance)
        .with_charge(charge)
}

/// Expand `~` in a user supplied output path
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Load the feed once. URL sources get a single request, no retries.
pub async fn load_articles(
    source: &ArticleSource,
    timeout_secs: u64,
    show_spinner: bool,
) -> Result<Vec<ArticleRecord>, String> {
    let spinner = if show_spinner {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Loading articles from {}", source));
        Some(pb)
    } else {
        None
    };

    let result = Fetcher::new()
        .with_timeout(timeout_secs)
        .load(source)
        .await
        .map_err(|e| format!("Failed to load articles from {}: {}", source, e));

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    Ok(result?.articles)
}

/// Build the graph and render it; nothing is returned unless both succeed
pub fn build_report(
    articles: &[ArticleRecord],
    options: &GraphOptions,
) -> Result<(ArticleGraph, String), String> {
    let graph = GraphBuilder::new()
        .with_missing_author_policy(options.missing_author)
        .build(articles)
        .map_err(|e| format!("Failed to build graph: {}", e))?;

    let report = render_report(options.format, &graph, &options.layout)
        .map_err(|e| format!("Failed to render report: {}", e))?;

    Ok((graph, report))
}

pub async fn run_graph(options: &GraphOptions, quiet: bool) -> Result<GraphRun, String> {
    let articles = load_articles(&options.source, options.timeout_secs, !quiet).await?;
    let (graph, report) = build_report(&articles, options)?;

    if let Some(ref path) = options.output {
        save_report(&report, path)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    }

    Ok(GraphRun {
        graph,
        report,
        article_count: articles.len(),
    })
}

pub async fn handle_graph(sub_matches: &ArgMatches, quiet: bool) {
    let options = match graph_options_from_matches(sub_matches) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let run = match run_graph(&options, quiet).await {
        Ok(run) => run,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    match options.output {
        Some(ref path) => {
            if !quiet {
                eprintln!(
                    "{} Report written to {}",
                    "✓".green().bold(),
                    path.display().to_string().bright_white()
                );
            }
        }
        None => print!("{}", run.report),
    }

    if !quiet {
        print_summary(&run, &options.source);
    }
}

fn print_summary(run: &GraphRun, source: &ArticleSource) {
    eprintln!();
    eprintln!("{}", "═".repeat(60).bright_blue().bold());
    eprintln!(
        "{} {} articles from {}",
        "✓".green().bold(),
        run.article_count.to_string().cyan(),
        source.to_string().bright_white()
    );
    eprintln!(
        "  {} domains, {} authors, {} edges",
        run.graph.domain_count().to_string().cyan(),
        run.graph.author_count().to_string().cyan(),
        run.graph.edges().len().to_string().cyan()
    );
    eprintln!("{}", "═".repeat(60).bright_blue().bold());
}

/// One output line per link, and whether every link produced a key
pub fn domain_key_lines(links: &[String]) -> (Vec<String>, bool) {
    let mut all_ok = true;
    let lines = links
        .iter()
        .map(|link| match extract_domain_key(link) {
            Ok(key) => format!("{}\t{}", link, key),
            Err(e) => {
                all_ok = false;
                format!("{}\t✗ {}", link, e)
            }
        })
        .collect();
    (lines, all_ok)
}

pub fn handle_key(sub_matches: &ArgMatches) {
    let links: Vec<String> = sub_matches
        .get_many::<String>("LINK")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let (lines, all_ok) = domain_key_lines(&links);
    for line in lines {
        println!("{}", line);
    }

    if !all_ok {
        std::process::exit(1);
    }
}
