//! Core data types for the relief pipeline.
//!
//! This crate defines the plain data structures shared by every stage of
//! the raster-to-solid conversion:
//!
//! - [`Raster`] - RGBA8 pixel grid, the pipeline input
//! - [`TriangleMesh`] - indexed triangle geometry, the pipeline output
//! - [`Aabb`] - axis-aligned bounding box
//!
//! All geometry uses `f64` coordinates via [`nalgebra`], re-exported here
//! so downstream crates agree on one math library.
//!
//! # Example
//!
//! ```
//! use relief_types::{Raster, TriangleMesh};
//!
//! let raster = Raster::filled(4, 4, [255, 255, 255, 255]);
//! assert_eq!(raster.width(), 4);
//! assert_eq!(raster.rgba(0, 0), [255, 255, 255, 255]);
//!
//! let mesh = TriangleMesh::new();
//! assert!(mesh.is_empty());
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/Deserialize derives on the plain data types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod raster;

pub use bounds::Aabb;
pub use mesh::TriangleMesh;
pub use raster::{Raster, RasterError, RasterResult};

// Re-export the nalgebra types used in public APIs.
pub use nalgebra::{Point3, Vector3};
