//! Top-surface generation from a sampled height field.

// Grid meshing uses u32 indices; truncation would only occur for rasters
// with >4B samples which exceeds practical limits.
#![allow(clippy::cast_possible_truncation)]

use relief_types::{Point3, TriangleMesh};
use tracing::debug;

use crate::params::ReliefParams;
use crate::quads::QuadGrid;
use crate::sampler::Sampler;

/// Generate the top surface of the relief.
///
/// Emits one vertex per raster sample (W x H total) in physical units,
/// then two +Z-facing triangles per valid quad with a fixed diagonal
/// split. Vertex (x, y) lands at index `y * W + x`. X grows rightward,
/// Y is flipped so the first raster row sits at the far edge of the
/// piece (right-handed, Z-up), and the footprint is centered on the
/// origin.
///
/// Opaque samples sit at `brightness * max_depth + base_thickness`;
/// transparent samples sit at z=0 and are referenced by no face.
///
/// The sampler and quad grid must be built over the same raster with
/// `params`' invert flag and alpha threshold, and the raster must be at
/// least 2x2. [`generate_relief`](crate::generate_relief) wires this up
/// after validating.
#[must_use]
pub fn build_top_surface(
    sampler: &Sampler,
    quads: &QuadGrid,
    params: &ReliefParams,
) -> TriangleMesh {
    let raster = sampler.raster();
    let width = raster.width();
    let height = raster.height();

    let vertex_count = width as usize * height as usize;
    let mut mesh = TriangleMesh::with_capacity(vertex_count, quads.valid_count() * 2);

    let scale_x = params.target_width / f64::from(width - 1);
    let scale_y = params.target_height / f64::from(height - 1);
    let half_width = params.target_width / 2.0;
    let half_height = params.target_height / 2.0;

    // Step 1: one vertex per sample, opaque samples raised by brightness
    for y in 0..height {
        for x in 0..width {
            let sample = sampler.sample(i64::from(x), i64::from(y));
            let z = if sample.alpha > params.alpha_threshold {
                sample.brightness.mul_add(params.max_depth, params.base_thickness)
            } else {
                0.0
            };
            let pos_x = f64::from(x).mul_add(scale_x, -half_width);
            let pos_y = -f64::from(y).mul_add(scale_y, -half_height);
            mesh.positions.push(Point3::new(pos_x, pos_y, z));
        }
    }

    // Step 2: two triangles per valid quad, CCW seen from above
    for y in 0..quads.height() {
        for x in 0..quads.width() {
            if !quads.is_valid(i64::from(x), i64::from(y)) {
                continue;
            }
            let tl = y * width + x;
            let tr = tl + 1;
            let bl = (y + 1) * width + x;
            let br = bl + 1;
            mesh.faces.push([tl, bl, br]);
            mesh.faces.push([tl, br, tr]);
        }
    }

    debug!(
        "Top surface: {} vertices, {} faces over {} valid quads",
        mesh.vertex_count(),
        mesh.face_count(),
        quads.valid_count()
    );

    mesh
}
