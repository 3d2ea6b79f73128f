//! GLB inspection and skeleton injection for Nethercore asset tools
//!
//! This library backs two small command-line tools:
//! - `glb-analyzer`: prints how many scenes, nodes, meshes, skins and
//!   animations a GLB file contains
//! - `glb-skele-rigger`: adds a flat 25-bone humanoid skeleton to a GLB file
//!   and binds it to the first mesh node
//!
//! Parsing of the container and the JSON schema is delegated to the `gltf`
//! and `gltf-json` crates; this crate only walks and edits the object model.
//!
//! # Example
//!
//! ```no_run
//! use glb_rigging::*;
//!
//! let mut document = GlbDocument::load("character.glb")?;
//! println!("{}", ComponentCounts::of(&document.root));
//!
//! let report = rig_document(&mut document.root);
//! println!("skin {} bound to {:?}", report.skin, report.mesh_node);
//!
//! document.save("character-rigged.glb")?;
//! # Ok::<(), DocumentError>(())
//! ```

pub mod document;
pub mod skeleton;
pub mod summary;

pub use document::{DocumentError, GlbDocument};
pub use skeleton::{
    assign_skin_to_mesh, build_skin, get_or_create_node, rig_document, NodeLookup, RigReport,
    SkinBuild, HUMANOID_BONES,
};
pub use summary::ComponentCounts;

// Re-export the object model callers mutate
pub use gltf_json as json;
