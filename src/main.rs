//! CLI entry point for the word-cloud generator

use clap::Parser;
use wordbloom::io::cli::{Cli, CloudProcessor};

fn main() -> wordbloom::Result<()> {
    let cli = Cli::parse();
    let processor = CloudProcessor::new(cli);
    processor.process()
}
