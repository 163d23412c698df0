use clap::{Arg, arg, command};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub const DEFAULT_SOURCE: &str = "./data.json";

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("bylines")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("bylines")
        .about("Builds the domain/author graph of an article feed")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress the summary and progress output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("graph")
                .about(
                    "Load the article feed once, build the domain/author graph and write it \
                in the chosen format.",
                )
                .arg(
                    arg!(-s --"source" <SOURCE>)
                        .required(false)
                        .help("URL or path of the JSON article feed")
                        .default_value(DEFAULT_SOURCE),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: json, text, csv, markdown, dot")
                        .value_parser([
                            "json", "text", "csv", "markdown", "md", "dot", "gv", "graphviz",
                        ])
                        .default_value("json"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save the output to a file (default: print to stdout)"),
                )
                .arg(
                    arg!(--"skip-missing-authors")
                        .required(false)
                        .help("Skip articles without an author instead of failing")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds for URL sources")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"width" <PIXELS>)
                        .required(false)
                        .help("Layout canvas width")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("800"),
                )
                .arg(
                    arg!(--"height" <PIXELS>)
                        .required(false)
                        .help("Layout canvas height")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("800"),
                )
                .arg(
                    arg!(--"link-distance" <DISTANCE>)
                        .required(false)
                        .help("Target edge length for the force layout")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("50"),
                )
                .arg(
                    arg!(--"charge" <STRENGTH>)
                        .required(false)
                        .help("Node charge for the force layout (negative repels)")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("-120"),
                ),
        )
        .subcommand(
            command!("key")
                .about("Print the domain key extracted from each link")
                .arg(
                    Arg::new("LINK")
                        .required(true)
                        .num_args(1..)
                        .help("Article links"),
                ),
        )
}
