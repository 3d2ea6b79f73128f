//! glb-analyzer - print component counts of a GLB file
//!
//! Usage:
//!   glb-analyzer <path_to_glb>

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use glb_rigging::{ComponentCounts, GlbDocument};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glb-analyzer")]
#[command(about = "Print scene, node, mesh, skin and animation counts of a GLB file")]
#[command(version)]
struct Cli {
    /// Input GLB (or glTF) file
    input: Option<PathBuf>,

    /// Arguments past the input path are ignored
    #[arg(trailing_var_arg = true, hide = true)]
    _ignored: Vec<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the counts
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let document = GlbDocument::load(&input)
        .with_context(|| format!("Failed to load glTF: {:?}", input))?;

    println!("{}", ComponentCounts::of(&document.root));

    Ok(())
}
