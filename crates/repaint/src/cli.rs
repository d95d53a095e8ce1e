//! Command-line surface for the `repaint` binary.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::assemble;
use crate::output;
use crate::settings::DEFAULT_BASE_PATH;

/// Generate a themed jQuery Mobile stylesheet bundle.
#[derive(Debug, Parser)]
#[command(name = "repaint", version, about)]
pub struct Cli {
    /// Path to the theme settings document (YAML).
    pub settings: PathBuf,

    /// Base settings document merged in as fallback defaults.
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    pub base: PathBuf,

    /// Output root for generated bundles.
    #[arg(long, default_value = output::DEFAULT_OUT_ROOT)]
    pub out: PathBuf,

    /// Resource root holding index.html and the per-version jqm assets.
    #[arg(long, default_value = output::DEFAULT_RES_ROOT)]
    pub res: PathBuf,
}

/// Runs one theme generation: assemble, report, write.
///
/// Returns the bundle directory on success.
pub fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let theme = assemble::assemble_with_base(&cli.settings, &cli.base)?;
    println!("Generating theme {}", style(&theme.name).bold());

    let bundle = output::write_bundle_under(&theme, &cli.out, &cli.res)?;
    println!("Wrote {}", style(bundle.display()).green());

    Ok(bundle)
}
