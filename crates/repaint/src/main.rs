use clap::Parser;

use repaint::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)?;
    Ok(())
}
