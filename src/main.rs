//! CLI entry point for merging occupancy masks into tile rectangles

use clap::Parser;
use log::LevelFilter;
use tilemerge::io::cli::{Cli, FileProcessor};

fn main() -> tilemerge::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(LevelFilter::Info);
    }
    logger.init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
