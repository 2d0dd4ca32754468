//! CLI entry point for the road sketch cleaner

use clap::Parser;
use roadclean::io::cli::{Cli, FileProcessor};
use roadclean::io::logging::init_logging;

fn main() -> roadclean::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log_level)?;
    let mut processor = FileProcessor::new(cli)?;
    processor.process()
}
