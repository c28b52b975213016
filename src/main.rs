//! CLI entry point for the edge-matching tile solver

use clap::Parser;
use tilewave::io::cli::{Cli, Runner};

fn main() -> tilewave::Result<()> {
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.run()
}
