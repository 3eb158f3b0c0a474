//! CLI entry point for the ramp color and scene snippet generator

use clap::Parser;
use rampgen::io::cli::{Cli, CommandRunner};

fn main() -> rampgen::Result<()> {
    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    runner.run()
}
