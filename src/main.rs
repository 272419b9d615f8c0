//! CLI entry point for rendering pattern documents

use clap::Parser;
use env_logger::Env;
use wavyshapes::io::cli::{Cli, FileProcessor};

fn main() -> wavyshapes::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
