use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Regenerate the Ntfy me store images and driver icons.
#[derive(Parser, Debug)]
#[command(name = "ntfy-assetgen", version)]
struct Cli {
    /// Directory the `assets/` and `drivers/` trees are written under (defaults to the crate dir).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Bold TrueType/OpenType font for the title (defaults to the first system font found).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print the generation report as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut opts = ntfy_assetgen::GenerateOptions::default();
    if let Some(root) = cli.root {
        opts.root = root;
    }
    if let Some(font) = cli.font {
        opts.font = ntfy_assetgen::FontSource::Path(font);
    }

    let report = ntfy_assetgen::generate_all(&opts)
        .with_context(|| format!("generate assets under '{}'", opts.root.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        eprintln!(
            "wrote {} assets under {}",
            report.assets.len(),
            opts.root.display()
        );
    }
    Ok(())
}
