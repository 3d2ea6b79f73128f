//! Programmatic GLB generation for integration tests.
//!
//! Every fixture shares one triangle mesh (mesh 0) backed by a real binary
//! chunk; nodes are described by name and whether they reference that mesh.

use glb_rigging::json;
use glb_rigging::GlbDocument;
use json::validation::Checked::Valid;

/// Triangle vertex positions (the whole binary chunk)
pub const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]];

/// Node description for a fixture
#[derive(Debug, Clone, Copy)]
pub struct FixtureNode {
    pub name: Option<&'static str>,
    pub has_mesh: bool,
}

pub const fn named(name: &'static str) -> FixtureNode {
    FixtureNode {
        name: Some(name),
        has_mesh: false,
    }
}

pub const fn mesh_node(name: &'static str) -> FixtureNode {
    FixtureNode {
        name: Some(name),
        has_mesh: true,
    }
}

pub const fn unnamed_mesh_node() -> FixtureNode {
    FixtureNode {
        name: None,
        has_mesh: true,
    }
}

/// Binary chunk holding the triangle positions
pub fn triangle_bin() -> Vec<u8> {
    bytemuck::cast_slice(&TRIANGLE).to_vec()
}

/// Build a root with one scene over all `nodes`, one triangle mesh and its buffer
pub fn build_root(nodes: &[FixtureNode]) -> json::Root {
    let bin_len = triangle_bin().len();

    let buffer = json::Buffer {
        byte_length: bin_len.into(),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        uri: None,
    };

    let view = json::buffer::View {
        buffer: json::Index::new(0),
        byte_length: bin_len.into(),
        byte_offset: Some(0u64.into()),
        byte_stride: None,
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        target: Some(Valid(json::buffer::Target::ArrayBuffer)),
    };

    let positions = json::Accessor {
        buffer_view: Some(json::Index::new(0)),
        byte_offset: Some(0u64.into()),
        count: TRIANGLE.len().into(),
        component_type: Valid(json::accessor::GenericComponentType(
            json::accessor::ComponentType::F32,
        )),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(json::accessor::Type::Vec3),
        min: Some(serde_json::json!([0.0, 0.0, 0.0])),
        max: Some(serde_json::json!([1.0, 1.0, 0.0])),
        name: None,
        normalized: false,
        sparse: None,
    };

    let mut attributes = std::collections::BTreeMap::new();
    attributes.insert(
        Valid(json::mesh::Semantic::Positions),
        json::Index::new(0),
    );

    let mesh = json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some("Triangle".to_string()),
        primitives: vec![json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: None,
            material: None,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        }],
        weights: None,
    };

    let nodes: Vec<json::Node> = nodes
        .iter()
        .map(|fixture| json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: fixture.has_mesh.then(|| json::Index::new(0)),
            name: fixture.name.map(str::to_string),
            rotation: None,
            scale: None,
            translation: None,
            skin: None,
            weights: None,
        })
        .collect();

    let scene = json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some("Scene".to_string()),
        nodes: (0..nodes.len() as u32).map(json::Index::new).collect(),
    };

    json::Root {
        accessors: vec![positions],
        buffers: vec![buffer],
        buffer_views: vec![view],
        meshes: vec![mesh],
        nodes,
        scene: Some(json::Index::new(0)),
        scenes: vec![scene],
        ..Default::default()
    }
}

/// Generate a complete GLB for the given nodes
pub fn generate_glb(nodes: &[FixtureNode]) -> Vec<u8> {
    GlbDocument {
        root: build_root(nodes),
        bin: Some(triangle_bin()),
    }
    .to_glb_bytes()
    .expect("Failed to assemble fixture GLB")
}
