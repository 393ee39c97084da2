//! Convert RGBA images into solid 3D-printable relief meshes.
//!
//! This umbrella crate re-exports the relief-* crates, providing a
//! unified API for the full image-to-STL pipeline: sample an RGBA
//! raster, build a height-field surface over it, close the surface
//! into a watertight solid, and serialize the result as binary STL.
//!
//! # Quick Start
//!
//! ```
//! use relief::prelude::*;
//!
//! fn run() -> Result<Vec<u8>, ReliefError> {
//!     // A 2x2 opaque white image.
//!     let raster = Raster::from_rgba8(2, 2, vec![255; 16])?;
//!
//!     // 10mm square, 5mm relief over a 1mm floor.
//!     let params = ReliefParams::default()
//!         .target_size(10.0, 10.0)
//!         .max_depth(5.0)
//!         .base_thickness(1.0);
//!
//!     relief::convert(&raster, &params)
//! }
//!
//! let stl = run().expect("valid input");
//! assert_eq!(stl.len(), 84 + 12 * 50);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `Raster`, `TriangleMesh`, `Aabb`
//! - [`mesher`] - Height-field meshing, solidification, solidity analysis
//! - [`stl`] - Binary STL encoding
//!
//! # Concurrency
//!
//! Every stage is a pure function of its inputs. Converting different
//! rasters on different threads needs no synchronization.
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/Deserialize for meshes and bounds

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

use tracing::info;

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `Raster`, `TriangleMesh`, `Aabb`.
pub use relief_types as types;

/// Height-field meshing, solidification, solidity analysis.
pub use relief_mesher as mesher;

/// Binary STL encoding.
pub use relief_stl as stl;

// =============================================================================
// Pipeline
// =============================================================================

/// Run the full pipeline: raster in, binary STL bytes out.
///
/// Equivalent to [`mesher::generate_relief`] followed by
/// [`stl::encode_stl`], discarding the intermediate statistics. Use
/// the stages directly to inspect the mesh or its solidity report.
///
/// # Errors
///
/// Returns [`ReliefError`](mesher::ReliefError) if the raster is
/// smaller than 2x2 pixels or the parameters are out of range.
pub fn convert(
    raster: &types::Raster,
    params: &mesher::ReliefParams,
) -> Result<Vec<u8>, mesher::ReliefError> {
    let (mesh, stats) = mesher::generate_relief(raster, params)?;
    let bytes = stl::encode_stl(&mesh);
    info!(
        "Converted {}x{} raster into {} STL bytes ({} triangles)",
        raster.width(),
        raster.height(),
        bytes.len(),
        stats.top_face_count + stats.bottom_face_count + stats.wall_face_count
    );
    Ok(bytes)
}

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for image-to-mesh conversion.
///
/// # Usage
///
/// ```
/// use relief::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use relief_types::{Aabb, Point3, Raster, TriangleMesh, Vector3};

    // Meshing
    pub use relief_mesher::{generate_relief, ReliefError, ReliefParams, ReliefStats};

    // Encoding
    pub use relief_stl::{encode_stl, write_stl, StlEncodeOptions};

    // Pipeline
    pub use crate::convert;
}

// =============================================================================
// Tests
// =============================================================================
