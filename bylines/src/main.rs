use bylines::commands::command_argument_builder;
use bylines::handlers::{handle_graph, handle_key};
use tracing::Level;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // stdout carries the report, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if quiet { Level::WARN } else { Level::INFO })
        .try_init();

    match chosen_command.subcommand() {
        Some(("graph", primary_command)) => handle_graph(primary_command, quiet).await,
        Some(("key", primary_command)) => handle_key(primary_command),
        None => {
            let _ = command_argument_builder().print_help();
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
