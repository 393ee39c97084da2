//! Relief generation pipeline.

use relief_types::{Raster, TriangleMesh};
use tracing::{debug, info, warn};

use crate::error::{ReliefError, ReliefResult};
use crate::heightfield::build_top_surface;
use crate::params::ReliefParams;
use crate::quads::QuadGrid;
use crate::report::{analyze_solidity, SolidityReport};
use crate::sampler::Sampler;
use crate::solidify::solidify;

/// Result of relief generation.
#[derive(Debug)]
pub struct ReliefStats {
    /// Vertices in the final mesh, top and bottom layers together.
    pub vertex_count: usize,
    /// Valid quads in the validity grid.
    pub valid_quad_count: usize,
    /// Top-surface faces (twice the valid quad count).
    pub top_face_count: usize,
    /// Bottom faces (equals the top-face count).
    pub bottom_face_count: usize,
    /// Wall faces.
    pub wall_face_count: usize,
    /// Boundary edges sealed by walls.
    pub boundary_edge_count: usize,
    /// Edge-level analysis of the final mesh.
    pub solidity: SolidityReport,
}

/// Generate a closed relief solid from a raster.
///
/// Runs the full pipeline: per-pixel sampling, quad validation,
/// top-surface meshing, then solidification with a mirrored bottom and
/// boundary walls. Parameters and raster dimensions are validated before
/// any geometry is allocated.
///
/// An entirely transparent raster is not an error; it produces an empty
/// mesh with zero faces.
///
/// # Arguments
///
/// * `raster` - RGBA8 input, at least 2x2 pixels
/// * `params` - Physical size, depth and threshold configuration
///
/// # Returns
///
/// A tuple of (mesh, generation stats).
///
/// # Errors
///
/// - [`ReliefError::RasterTooSmall`] if the raster is under 2x2 pixels
/// - [`ReliefError::InvalidTargetSize`] if a target extent is not a
///   positive finite number
/// - [`ReliefError::InvalidDepth`] if `max_depth` or `base_thickness` is
///   negative or not finite
/// - [`ReliefError::InvalidAlphaThreshold`] if the threshold is outside
///   [0, 1]
///
/// # Example
///
/// ```
/// use relief_mesher::{generate_relief, ReliefParams};
/// use relief_types::Raster;
///
/// let raster = Raster::filled(2, 2, [255, 255, 255, 255]);
/// let (mesh, stats) = generate_relief(&raster, &ReliefParams::default())
///     .expect("relief generation failed");
///
/// assert_eq!(stats.valid_quad_count, 1);
/// assert_eq!(mesh.face_count(), 12);
/// assert!(stats.solidity.is_closed());
/// ```
pub fn generate_relief(
    raster: &Raster,
    params: &ReliefParams,
) -> ReliefResult<(TriangleMesh, ReliefStats)> {
    validate(raster, params)?;

    info!(
        "Generating relief from {}x{} raster onto {:.1}x{:.1} target",
        raster.width(),
        raster.height(),
        params.target_width,
        params.target_height
    );

    let sampler = Sampler::new(raster, params.invert, params.alpha_threshold);
    let quads = QuadGrid::build(&sampler);
    debug!(
        "{} of {} quads valid",
        quads.valid_count(),
        quads.width() as usize * quads.height() as usize
    );

    let mut mesh = build_top_surface(&sampler, &quads, params);
    let top_face_count = mesh.face_count();
    let solid = solidify(&mut mesh, &quads);

    let solidity = analyze_solidity(&mesh);
    if !solidity.is_closed() {
        warn!(
            "Generated mesh is not closed: {} boundary, {} non-manifold, {} misoriented edge(s)",
            solidity.boundary_edge_count,
            solidity.non_manifold_edge_count,
            solidity.misoriented_edge_count
        );
    }

    info!(
        "Relief complete: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    let stats = ReliefStats {
        vertex_count: mesh.vertex_count(),
        valid_quad_count: quads.valid_count(),
        top_face_count,
        bottom_face_count: solid.bottom_face_count,
        wall_face_count: solid.wall_face_count,
        boundary_edge_count: solid.boundary_edge_count,
        solidity,
    };

    Ok((mesh, stats))
}

/// Check raster dimensions and parameters before any allocation.
fn validate(raster: &Raster, params: &ReliefParams) -> ReliefResult<()> {
    if raster.width() < 2 || raster.height() < 2 {
        return Err(ReliefError::raster_too_small(
            raster.width(),
            raster.height(),
        ));
    }
    if !params.target_width.is_finite()
        || !params.target_height.is_finite()
        || params.target_width <= 0.0
        || params.target_height <= 0.0
    {
        return Err(ReliefError::invalid_target_size(
            params.target_width,
            params.target_height,
        ));
    }
    if !params.max_depth.is_finite()
        || !params.base_thickness.is_finite()
        || params.max_depth < 0.0
        || params.base_thickness < 0.0
    {
        return Err(ReliefError::invalid_depth(
            params.max_depth,
            params.base_thickness,
        ));
    }
    if !(0.0..=1.0).contains(&params.alpha_threshold) {
        return Err(ReliefError::invalid_alpha_threshold(params.alpha_threshold));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn rejects_thin_rasters() {
        let params = ReliefParams::default();
        for (w, h) in [(1, 4), (4, 1), (1, 1)] {
            let raster = Raster::filled(w, h, WHITE);
            let err = generate_relief(&raster, &params).unwrap_err();
            assert!(matches!(err, ReliefError::RasterTooSmall { .. }));
        }
    }

    #[test]
    fn rejects_bad_targets() {
        let raster = Raster::filled(2, 2, WHITE);
        for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0), (f64::INFINITY, 10.0)] {
            let params = ReliefParams::default().target_size(w, h);
            let err = generate_relief(&raster, &params).unwrap_err();
            assert!(matches!(err, ReliefError::InvalidTargetSize { .. }));
        }
    }

    #[test]
    fn rejects_bad_depths() {
        let raster = Raster::filled(2, 2, WHITE);
        for params in [
            ReliefParams::default().max_depth(-0.5),
            ReliefParams::default().base_thickness(-1.0),
            ReliefParams::default().max_depth(f64::NAN),
        ] {
            let err = generate_relief(&raster, &params).unwrap_err();
            assert!(matches!(err, ReliefError::InvalidDepth { .. }));
        }
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let raster = Raster::filled(2, 2, WHITE);
        for threshold in [-0.1, 1.1, f64::NAN] {
            let params = ReliefParams::default().alpha_threshold(threshold);
            let err = generate_relief(&raster, &params).unwrap_err();
            assert!(matches!(err, ReliefError::InvalidAlphaThreshold { .. }));
        }
    }

    #[test]
    fn zero_depth_parameters_are_allowed() {
        let raster = Raster::filled(2, 2, WHITE);
        let params = ReliefParams::default().max_depth(0.0).base_thickness(0.0);
        let (mesh, _) = generate_relief(&raster, &params).unwrap();
        // A completely flat solid still has its full face set.
        assert_eq!(mesh.face_count(), 12);
    }

    #[test]
    fn transparent_raster_yields_empty_mesh() {
        let raster = Raster::filled(8, 8, [255, 255, 255, 0]);
        let (mesh, stats) = generate_relief(&raster, &ReliefParams::default()).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(stats.valid_quad_count, 0);
        assert_eq!(stats.boundary_edge_count, 0);
        // Vertices still exist for both layers; they are just unreferenced.
        assert_eq!(stats.vertex_count, 128);
    }

    #[test]
    fn stats_counts_are_consistent() {
        let mut raster = Raster::filled(6, 5, WHITE);
        raster.set_rgba(2, 2, [0, 0, 0, 0]);
        let (mesh, stats) = generate_relief(&raster, &ReliefParams::default()).unwrap();

        assert_eq!(stats.top_face_count, stats.valid_quad_count * 2);
        assert_eq!(stats.bottom_face_count, stats.top_face_count);
        assert_eq!(stats.wall_face_count, stats.boundary_edge_count * 2);
        assert_eq!(
            mesh.face_count(),
            stats.top_face_count + stats.bottom_face_count + stats.wall_face_count
        );
        assert_eq!(stats.vertex_count, 2 * 6 * 5);
    }

    #[test]
    fn opaque_raster_produces_closed_solid() {
        let raster = Raster::filled(5, 4, WHITE);
        let (mesh, stats) = generate_relief(&raster, &ReliefParams::default()).unwrap();
        assert!(stats.solidity.is_closed());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn invert_mirrors_heights_around_mid_depth() {
        let mut raster = Raster::filled(3, 2, WHITE);
        raster.set_rgba(1, 0, [80, 80, 80, 255]);
        raster.set_rgba(1, 1, [80, 80, 80, 255]);
        let params = ReliefParams::default();

        let (plain, _) = generate_relief(&raster, &params).unwrap();
        let (inverted, _) = generate_relief(&raster, &params.clone().inverted(true)).unwrap();

        let top = 3 * 2; // top-layer vertex count
        for i in 0..top {
            let z = plain.positions[i].z;
            let zi = inverted.positions[i].z;
            let expected = params.base_thickness + params.max_depth - (z - params.base_thickness);
            assert!((zi - expected).abs() < 1e-9, "vertex {i}: {zi} vs {expected}");
        }
    }

    #[test]
    fn diagonal_pinch_is_reported_not_repaired() {
        // Two quads touching only at a corner.
        let mut raster = Raster::filled(3, 3, WHITE);
        raster.set_rgba(2, 0, [0, 0, 0, 0]);
        raster.set_rgba(0, 2, [0, 0, 0, 0]);
        let (_, stats) = generate_relief(&raster, &ReliefParams::default()).unwrap();
        assert_eq!(stats.valid_quad_count, 2);
        assert!(stats.solidity.non_manifold_edge_count > 0);
    }
}
