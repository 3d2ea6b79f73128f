//! glb-skele-rigger - add a humanoid skeleton to a GLB file
//!
//! Ensures the 25 canonical humanoid bones exist as nodes, appends a skin
//! over them and binds it to the first node that references a mesh.
//!
//! Usage:
//!   glb-skele-rigger <input.glb> <output.glb>

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use glb_rigging::{rig_document, GlbDocument};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glb-skele-rigger")]
#[command(about = "Add a humanoid bone hierarchy and skin to a GLB file")]
#[command(version)]
struct Cli {
    /// Input GLB (or glTF) file
    input: Option<PathBuf>,

    /// Output GLB file
    output: Option<PathBuf>,

    /// Arguments past the output path are ignored
    #[arg(trailing_var_arg = true, hide = true)]
    _ignored: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    tracing::info!("Rigging {:?} -> {:?}", input, output);

    let mut document = GlbDocument::load(&input)
        .with_context(|| format!("Failed to load glTF: {:?}", input))?;

    let report = rig_document(&mut document.root);
    tracing::info!(
        "Skin {}: {} joints ({} bones created, {} reused)",
        report.skin,
        report.joints.len(),
        report.created,
        report.reused
    );

    match report.mesh_node {
        Some(node) => tracing::info!("Bound skin {} to mesh node {}", report.skin, node),
        None => tracing::warn!("No mesh node found; skin {} left unbound", report.skin),
    }

    document
        .save(&output)
        .with_context(|| format!("Failed to write output: {:?}", output))?;

    tracing::info!("Done!");

    Ok(())
}
