//! Top-level component counts

use gltf_json as json;
use std::fmt;

/// Lengths of the five top-level collections of a glTF document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentCounts {
    pub scenes: usize,
    pub nodes: usize,
    pub meshes: usize,
    pub skins: usize,
    pub animations: usize,
}

impl ComponentCounts {
    /// Count the collections of a document.
    ///
    /// Collections missing from the source JSON deserialize as empty and
    /// count as zero.
    pub fn of(root: &json::Root) -> Self {
        Self {
            scenes: root.scenes.len(),
            nodes: root.nodes.len(),
            meshes: root.meshes.len(),
            skins: root.skins.len(),
            animations: root.animations.len(),
        }
    }
}

impl fmt::Display for ComponentCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenes: {}", self.scenes)?;
        writeln!(f, "Nodes: {}", self.nodes)?;
        writeln!(f, "Meshes: {}", self.meshes)?;
        writeln!(f, "Skins: {}", self.skins)?;
        write!(f, "Animations: {}", self.animations)
    }
}
