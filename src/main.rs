//! CLI entry point for maze generation, solving and rendering

use clap::Parser;
use gridmaze::io::cli::{Cli, CommandRunner};

fn main() -> gridmaze::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    CommandRunner::new(cli).run()
}
