//! GLB container loading and saving
//!
//! A [`GlbDocument`] is the parsed JSON chunk plus the raw binary chunk. The
//! binary chunk is never interpreted here; it is carried through unchanged so
//! that mesh and animation data survive a load/edit/save cycle.

use gltf_json as json;
use std::fs;
use std::path::Path;

/// GLB magic bytes ("glTF")
const GLB_MAGIC: &[u8; 4] = b"glTF";
/// GLB container version written on save
const GLB_VERSION: u32 = 2;
/// Chunk type for the JSON chunk ("JSON")
const CHUNK_JSON: u32 = 0x4E4F534A;
/// Chunk type for the binary chunk ("BIN\0")
const CHUNK_BIN: u32 = 0x004E4942;
/// Header (12 bytes) size
const HEADER_LEN: usize = 12;
/// Chunk header (length + type) size
const CHUNK_HEADER_LEN: usize = 8;

/// Error type for GLB loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid GLB container: {0}")]
    Container(#[from] gltf::Error),

    #[error("Invalid glTF JSON: {0}")]
    Json(#[from] json::Error),

    #[error("Failed to serialize glTF JSON: {0}")]
    Serialize(#[source] json::Error),

    #[error("GLB would be {0} bytes, which exceeds the 32-bit length field")]
    TooLarge(usize),
}

/// A glTF document held in memory for one load/edit/save cycle
#[derive(Debug, Clone)]
pub struct GlbDocument {
    /// Parsed JSON chunk
    pub root: json::Root,
    /// Raw binary chunk, if the source had one
    pub bin: Option<Vec<u8>>,
}

impl GlbDocument {
    /// Wrap an in-memory root with no binary chunk
    pub fn from_root(root: json::Root) -> Self {
        Self { root, bin: None }
    }

    /// Parse a document from bytes.
    ///
    /// Binary GLB is detected by its magic; anything else is parsed as a
    /// plain `.gltf` JSON document.
    pub fn from_slice(data: &[u8]) -> Result<Self, DocumentError> {
        if data.starts_with(GLB_MAGIC) {
            let glb = gltf::Glb::from_slice(data)?;
            let root = json::Root::from_slice(&glb.json)?;
            Ok(Self {
                root,
                bin: glb.bin.map(|bin| bin.into_owned()),
            })
        } else {
            Ok(Self::from_root(json::Root::from_slice(data)?))
        }
    }

    /// Load a document from a `.glb` or `.gltf` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let document = Self::from_slice(&data)?;
        tracing::debug!(
            "Loaded {:?}: {} bytes, binary chunk {}",
            path,
            data.len(),
            document.bin.as_ref().map_or(0, Vec::len)
        );
        Ok(document)
    }

    /// Assemble a GLB 2.0 container from the current root and binary chunk
    pub fn to_glb_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let json_string =
            json::serialize::to_string(&self.root).map_err(DocumentError::Serialize)?;
        let json_bytes = json_string.as_bytes();

        // JSON is padded with spaces, BIN with zeros
        let json_padding = padding(json_bytes.len());
        let json_chunk_length = json_bytes.len() + json_padding;

        let bin_chunk_length = self
            .bin
            .as_ref()
            .map(|bin| bin.len() + padding(bin.len()));

        let total_length = HEADER_LEN
            + CHUNK_HEADER_LEN
            + json_chunk_length
            + bin_chunk_length.map_or(0, |len| CHUNK_HEADER_LEN + len);
        let total_length_u32 =
            u32::try_from(total_length).map_err(|_| DocumentError::TooLarge(total_length))?;

        let mut glb = Vec::with_capacity(total_length);

        // Header
        glb.extend_from_slice(GLB_MAGIC);
        glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
        glb.extend_from_slice(&total_length_u32.to_le_bytes());

        // JSON chunk
        glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
        glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
        glb.extend_from_slice(json_bytes);
        glb.extend(std::iter::repeat_n(0x20u8, json_padding));

        // BIN chunk
        if let (Some(bin), Some(chunk_length)) = (&self.bin, bin_chunk_length) {
            glb.extend_from_slice(&(chunk_length as u32).to_le_bytes());
            glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
            glb.extend_from_slice(bin);
            glb.extend(std::iter::repeat_n(0u8, chunk_length - bin.len()));
        }

        Ok(glb)
    }

    /// Write the document as GLB, whatever the path's extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let glb = self.to_glb_bytes()?;
        fs::write(path, &glb)?;
        tracing::debug!("Saved {:?}: {} bytes", path, glb.len());
        Ok(())
    }
}

/// Bytes needed to reach the next 4-byte boundary
fn padding(len: usize) -> usize {
    (4 - (len % 4)) % 4
}
