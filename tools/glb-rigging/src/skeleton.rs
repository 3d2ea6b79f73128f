//! Humanoid skeleton injection
//!
//! Bones are plain named nodes with no transform and no parent/child links.
//! The skin built from them carries no inverse bind matrices, so the result
//! is a skeleton scaffold rather than an animation-ready rig.

use gltf_json as json;

/// Canonical humanoid bone names, in joint order. `Hips` is the skeleton root.
pub const HUMANOID_BONES: [&str; 25] = [
    "Hips",
    "Spine",
    "Spine01",
    "Spine02",
    "Chest",
    "Neck",
    "Head",
    "head_end",
    "headfront",
    "LeftShoulder",
    "LeftArm",
    "LeftForeArm",
    "LeftHand",
    "RightShoulder",
    "RightArm",
    "RightForeArm",
    "RightHand",
    "LeftUpLeg",
    "LeftLeg",
    "LeftFoot",
    "LeftToeBase",
    "RightUpLeg",
    "RightLeg",
    "RightFoot",
    "RightToeBase",
];

/// Outcome of a node lookup by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLookup {
    /// First node already carrying the name
    Existing(u32),
    /// Newly appended node
    Created(u32),
}

impl NodeLookup {
    /// Node index, whichever way it was obtained
    pub fn index(self) -> u32 {
        match self {
            NodeLookup::Existing(index) | NodeLookup::Created(index) => index,
        }
    }

    pub fn is_created(self) -> bool {
        matches!(self, NodeLookup::Created(_))
    }
}

/// Result of [`build_skin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinBuild {
    /// Index of the appended skin
    pub skin: u32,
    /// Joint node indices in canonical bone order
    pub joints: Vec<u32>,
    /// Bones that had to be created
    pub created: usize,
    /// Bones matched to existing nodes
    pub reused: usize,
}

/// Result of [`rig_document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigReport {
    pub skin: u32,
    pub joints: Vec<u32>,
    pub created: usize,
    pub reused: usize,
    /// Node that received the skin, `None` when no node references a mesh
    pub mesh_node: Option<u32>,
}

/// Return the first node named `name`, appending a bare named node if none exists.
///
/// Nodes without a name never match.
pub fn get_or_create_node(root: &mut json::Root, name: &str) -> NodeLookup {
    if let Some(index) = root
        .nodes
        .iter()
        .position(|node| node.name.as_deref() == Some(name))
    {
        return NodeLookup::Existing(index as u32);
    }

    root.nodes.push(json::Node {
        camera: None,
        children: None,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh: None,
        name: Some(name.to_string()),
        rotation: None,
        scale: None,
        translation: None,
        skin: None,
        weights: None,
    });
    NodeLookup::Created(root.nodes.len() as u32 - 1)
}

/// Ensure every humanoid bone exists and append a skin over them.
///
/// Existing skins are left alone, so calling this twice yields two skins.
pub fn build_skin(root: &mut json::Root) -> SkinBuild {
    let lookups: Vec<NodeLookup> = HUMANOID_BONES
        .iter()
        .map(|bone| get_or_create_node(root, bone))
        .collect();

    let joints: Vec<u32> = lookups.iter().map(|lookup| lookup.index()).collect();
    let created = lookups.iter().filter(|lookup| lookup.is_created()).count();

    root.skins.push(json::Skin {
        extensions: Default::default(),
        extras: Default::default(),
        inverse_bind_matrices: None,
        joints: joints.iter().map(|j| json::Index::new(*j)).collect(),
        name: None,
        skeleton: Some(json::Index::new(joints[0])),
    });
    let skin = root.skins.len() as u32 - 1;

    tracing::debug!(
        "Built skin {}: {} joints ({} created, {} reused)",
        skin,
        joints.len(),
        created,
        joints.len() - created
    );

    SkinBuild {
        skin,
        reused: joints.len() - created,
        created,
        joints,
    }
}

/// Bind `skin` to the first node that references a mesh.
///
/// Returns the node index, or `None` (without error) if no node has a mesh.
pub fn assign_skin_to_mesh(root: &mut json::Root, skin: u32) -> Option<u32> {
    let (index, node) = root
        .nodes
        .iter_mut()
        .enumerate()
        .find(|(_, node)| node.mesh.is_some())?;

    node.skin = Some(json::Index::new(skin));
    Some(index as u32)
}

/// Build the humanoid skin and bind it to the first mesh node
pub fn rig_document(root: &mut json::Root) -> RigReport {
    let build = build_skin(root);
    let mesh_node = assign_skin_to_mesh(root, build.skin);

    RigReport {
        skin: build.skin,
        joints: build.joints,
        created: build.created,
        reused: build.reused,
        mesh_node,
    }
}
