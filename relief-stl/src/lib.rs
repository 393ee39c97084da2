//! Binary STL export for relief meshes.
//!
//! This crate serializes a [`TriangleMesh`](relief_types::TriangleMesh)
//! into the binary STL format consumed by slicers and mesh viewers:
//! an 80-byte header, a little-endian `u32` triangle count, then one
//! 50-byte record per triangle. Output length is always
//! `84 + 50 * triangle_count` bytes.
//!
//! Normals default to zero, which slicers treat as "recompute from the
//! vertex winding". Pass [`NormalSource::Computed`] to emit per-face
//! unit normals instead.
//!
//! # Example
//!
//! ```
//! use relief_stl::encode_stl;
//! use relief_types::{Point3, TriangleMesh};
//!
//! let mesh = TriangleMesh::from_parts(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! let bytes = encode_stl(&mesh);
//! assert_eq!(bytes.len(), 84 + 50);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{StlError, StlResult};
pub use stl::{
    encode_stl, encode_stl_with, write_stl, NormalSource, StlEncodeOptions, HEADER_SIZE,
    TRIANGLE_SIZE,
};
