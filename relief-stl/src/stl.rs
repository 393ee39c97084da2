//! Binary STL encoding.

use std::io::Write;

use relief_types::{TriangleMesh, Vector3};
use tracing::debug;

use crate::error::StlResult;

/// Size of the binary STL header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one binary triangle record in bytes.
pub const TRIANGLE_SIZE: usize = 50;

/// Where triangle normals in the output come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalSource {
    /// Emit `(0, 0, 0)` for every triangle. Standard practice for
    /// generated meshes; consumers recompute normals from the vertex
    /// winding.
    #[default]
    Zero,

    /// Emit the normalized cross product of each triangle's edges.
    /// Degenerate triangles still get a zero normal.
    Computed,
}

/// Options for STL encoding.
#[derive(Debug, Clone, Default)]
pub struct StlEncodeOptions {
    /// Normal emission mode.
    pub normals: NormalSource,
}

/// Encode a mesh as binary STL with zero normals.
///
/// The layout is fixed and little-endian: an 80-byte header, a u32
/// triangle count, then a 50-byte record per triangle (normal, three
/// vertices, attribute word). The returned buffer is always exactly
/// `84 + 50 * triangle_count` bytes. A mesh with no faces encodes to
/// just the 84-byte preamble.
///
/// The encoder serializes whatever triangle list it is given; it does
/// not check solidity.
///
/// # Example
///
/// ```
/// use relief_stl::encode_stl;
/// use relief_types::TriangleMesh;
///
/// let bytes = encode_stl(&TriangleMesh::new());
/// assert_eq!(bytes.len(), 84);
/// ```
#[must_use]
pub fn encode_stl(mesh: &TriangleMesh) -> Vec<u8> {
    encode_stl_with(mesh, &StlEncodeOptions::default())
}

/// Encode a mesh as binary STL with explicit options.
#[must_use]
pub fn encode_stl_with(mesh: &TriangleMesh, options: &StlEncodeOptions) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + 4 + mesh.face_count() * TRIANGLE_SIZE);

    push_header(&mut buffer, mesh.face_count());
    for index in 0..mesh.face_count() {
        push_record(&mut buffer, mesh, index, options.normals);
    }

    debug!(
        "Encoded {} triangles into {} bytes",
        mesh.face_count(),
        buffer.len()
    );
    buffer
}

/// Encode a mesh as binary STL and write it to `writer`.
///
/// The mesh is encoded into memory first and written as one block.
///
/// # Errors
///
/// Returns [`StlError::Io`](crate::StlError::Io) if the writer rejects
/// the bytes.
///
/// # Example
///
/// ```
/// use relief_stl::{write_stl, StlEncodeOptions};
/// use relief_types::TriangleMesh;
///
/// let mut out = Vec::new();
/// write_stl(&mut out, &TriangleMesh::new(), &StlEncodeOptions::default())
///     .expect("writing to a Vec cannot fail");
/// assert_eq!(out.len(), 84);
/// ```
pub fn write_stl<W: Write>(
    writer: &mut W,
    mesh: &TriangleMesh,
    options: &StlEncodeOptions,
) -> StlResult<()> {
    writer.write_all(&encode_stl_with(mesh, options))?;
    Ok(())
}

/// Append the 80-byte header and the triangle count.
fn push_header(buffer: &mut Vec<u8>, face_count: usize) {
    // 80-byte header padded with spaces
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by relief-stl";
    header[..text.len()].copy_from_slice(text);
    buffer.extend_from_slice(&header);

    #[allow(clippy::cast_possible_truncation)]
    // Face count: u32 face indices keep meshes under 4B triangles
    let count = face_count as u32;
    buffer.extend_from_slice(&count.to_le_bytes());
}

/// Append one 50-byte triangle record.
fn push_record(buffer: &mut Vec<u8>, mesh: &TriangleMesh, index: usize, normals: NormalSource) {
    let [v0, v1, v2] = mesh.triangle(index);

    let normal = match normals {
        NormalSource::Zero => Vector3::zeros(),
        NormalSource::Computed => face_normal(&(v1 - v0), &(v2 - v0)),
    };

    push_vector(buffer, normal.x, normal.y, normal.z);
    push_vector(buffer, v0.x, v0.y, v0.z);
    push_vector(buffer, v1.x, v1.y, v1.z);
    push_vector(buffer, v2.x, v2.y, v2.z);

    // Attribute byte count, unused
    buffer.extend_from_slice(&0u16.to_le_bytes());
}

/// Unit normal of a triangle given two edge vectors, zero if degenerate.
fn face_normal(e1: &Vector3<f64>, e2: &Vector3<f64>) -> Vector3<f64> {
    let normal = e1.cross(e2);
    let len = normal.norm();
    if len > f64::EPSILON {
        normal / len
    } else {
        Vector3::zeros()
    }
}

/// Append three coordinates as little-endian f32.
fn push_vector(buffer: &mut Vec<u8>, x: f64, y: f64, z: f64) {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: the STL wire format stores f32
    {
        buffer.extend_from_slice(&(x as f32).to_le_bytes());
        buffer.extend_from_slice(&(y as f32).to_le_bytes());
        buffer.extend_from_slice(&(z as f32).to_le_bytes());
    }
}
