//! Relief solid generation from RGBA rasters.
//!
//! This crate turns a pixel grid into a closed, printable solid. Pixel
//! brightness drives a height field over a centered footprint, transparent
//! regions are masked out, and the open top surface is closed with a
//! mirrored bottom and vertical boundary walls.
//!
//! The pipeline is a chain of pure stages over explicit buffers:
//!
//! 1. [`Sampler`] - brightness/opacity per grid coordinate
//! 2. [`QuadGrid`] - dense validity grid over sample quads
//! 3. [`build_top_surface`] - top vertices and +Z faces
//! 4. [`solidify`] - bottom layer and outward walls
//!
//! [`generate_relief`] wires the stages together, validates inputs up
//! front and reports per-stage counts plus an edge-level
//! [`SolidityReport`].
//!
//! # Example
//!
//! ```
//! use relief_mesher::{generate_relief, ReliefParams};
//! use relief_types::Raster;
//!
//! let raster = Raster::filled(4, 4, [200, 200, 200, 255]);
//! let params = ReliefParams::default().target_size(40.0, 40.0);
//!
//! let (mesh, stats) = generate_relief(&raster, &params).expect("generation failed");
//! assert_eq!(stats.valid_quad_count, 9);
//! assert!(stats.solidity.is_closed());
//! assert!(mesh.signed_volume() > 0.0);
//! ```
//!
//! # Coordinate Convention
//!
//! Output is right-handed and Z-up: X grows with raster columns, Y is
//! flipped so the first raster row lands at +Y, and the footprint is
//! centered on the origin. Top faces look up, bottom faces look down,
//! walls look away from the solid.

mod error;
mod generate;
mod heightfield;
mod params;
mod quads;
mod report;
mod sampler;
mod solidify;

pub use error::{ReliefError, ReliefResult};

// Pipeline driver
pub use generate::{generate_relief, ReliefStats};

// Configuration
pub use params::ReliefParams;

// Pipeline stages
pub use heightfield::build_top_surface;
pub use quads::QuadGrid;
pub use sampler::{Sample, Sampler};
pub use solidify::{solidify, SolidifyResult};

// Solidity analysis
pub use report::{analyze_solidity, SolidityReport};
