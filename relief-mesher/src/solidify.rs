//! Bottom layer and boundary walls.

// Mesh indices are u32; truncation would only occur for meshes with >4B
// vertices which exceeds practical limits.
#![allow(clippy::cast_possible_truncation)]

use relief_types::{Point3, TriangleMesh};
use tracing::debug;

use crate::quads::QuadGrid;

/// Counts from the solidify pass.
#[derive(Debug, Clone, Copy)]
pub struct SolidifyResult {
    /// Bottom faces appended. Equals the top-face count.
    pub bottom_face_count: usize,
    /// Wall faces appended.
    pub wall_face_count: usize,
    /// Boundary edges sealed with walls, two faces each.
    pub boundary_edge_count: usize,
}

/// Close an open top surface into a solid.
///
/// Appends one z=0 bottom vertex per top vertex (bottom index = top
/// index + W*H), mirrors every valid quad as a -Z-facing bottom face
/// pair, then seals each boundary edge with a two-triangle vertical
/// wall. A quad edge is a boundary when the grid-adjacent quad on the
/// far side is invalid or off the grid.
///
/// The mesh must be a top surface from
/// [`build_top_surface`](crate::build_top_surface) over the same quad
/// grid. The result is watertight unless the valid region contains
/// cells joined only at a corner; those pinch points leave locally
/// non-manifold edges and are reported, not repaired.
pub fn solidify(mesh: &mut TriangleMesh, quads: &QuadGrid) -> SolidifyResult {
    let width = quads.width() + 1;
    let height = quads.height() + 1;
    let top_count = mesh.vertex_count();
    debug_assert_eq!(top_count, width as usize * height as usize);
    let offset = top_count as u32;

    // Step 1: mirror every top vertex onto the z=0 plane
    mesh.positions.reserve(top_count);
    for i in 0..top_count {
        let top = mesh.positions[i];
        mesh.positions.push(Point3::new(top.x, top.y, 0.0));
    }

    // Step 2: bottom faces, winding reversed relative to the top so they
    // face -Z
    let mut bottom_face_count = 0;
    for y in 0..quads.height() {
        for x in 0..quads.width() {
            if !quads.is_valid(i64::from(x), i64::from(y)) {
                continue;
            }
            let tl = y * width + x + offset;
            let tr = tl + 1;
            let bl = (y + 1) * width + x + offset;
            let br = bl + 1;
            mesh.faces.push([tl, tr, br]);
            mesh.faces.push([tl, br, bl]);
            bottom_face_count += 2;
        }
    }

    // Step 3: seal boundary edges. Each wall edge is ordered with the
    // solid's interior on its left, which puts the wall's outward face
    // away from the interior.
    let mut boundary_edge_count = 0;
    for y in 0..quads.height() {
        for x in 0..quads.width() {
            let (qx, qy) = (i64::from(x), i64::from(y));
            if !quads.is_valid(qx, qy) {
                continue;
            }
            let tl = y * width + x;
            let tr = tl + 1;
            let bl = (y + 1) * width + x;
            let br = bl + 1;

            if !quads.is_valid(qx, qy - 1) {
                wall(&mut mesh.faces, tr, tl, offset);
                boundary_edge_count += 1;
            }
            if !quads.is_valid(qx, qy + 1) {
                wall(&mut mesh.faces, bl, br, offset);
                boundary_edge_count += 1;
            }
            if !quads.is_valid(qx - 1, qy) {
                wall(&mut mesh.faces, tl, bl, offset);
                boundary_edge_count += 1;
            }
            if !quads.is_valid(qx + 1, qy) {
                wall(&mut mesh.faces, br, tr, offset);
                boundary_edge_count += 1;
            }
        }
    }

    let wall_face_count = boundary_edge_count * 2;
    debug!(
        "Solidified: {} bottom faces, {} wall faces over {} boundary edges",
        bottom_face_count, wall_face_count, boundary_edge_count
    );

    SolidifyResult {
        bottom_face_count,
        wall_face_count,
        boundary_edge_count,
    }
}

/// Two triangles sealing the top edge `top_a -> top_b` down to the
/// bottom layer.
fn wall(faces: &mut Vec<[u32; 3]>, top_a: u32, top_b: u32, offset: u32) {
    let bottom_a = top_a + offset;
    let bottom_b = top_b + offset;
    faces.push([bottom_a, bottom_b, top_b]);
    faces.push([bottom_a, top_b, top_a]);
}
