use clap::Parser;
use results_app::config::Cli;
use results_app::logging::{self, LogDestination};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = results_logging::parse_level(&cli.log_level);
    let destination = match cli.log_file.as_deref() {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    logging::initialize(destination, level);

    results_app::run(cli)
}
