//! Error types for relief generation.

use relief_types::RasterError;
use thiserror::Error;

/// Result type alias for relief operations.
pub type ReliefResult<T> = Result<T, ReliefError>;

/// Errors that can occur during relief generation.
///
/// All parameter and dimension checks run before any geometry buffer is
/// allocated, so a failed call produces no partial output.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// The raster is too small to form a single quad.
    #[error("raster must be at least 2x2 pixels, got {width}x{height}")]
    RasterTooSmall {
        /// Raster width in pixels.
        width: u32,
        /// Raster height in pixels.
        height: u32,
    },

    /// Target dimensions must be positive, finite lengths.
    #[error("target size must be positive and finite, got {width}x{height}")]
    InvalidTargetSize {
        /// Requested physical width.
        width: f64,
        /// Requested physical height.
        height: f64,
    },

    /// Depth parameters must be non-negative, finite lengths.
    #[error(
        "depth parameters must be non-negative and finite: max_depth={max_depth}, base_thickness={base_thickness}"
    )]
    InvalidDepth {
        /// Requested relief height.
        max_depth: f64,
        /// Requested base thickness.
        base_thickness: f64,
    },

    /// The alpha threshold must lie in [0, 1].
    #[error("alpha threshold must be within [0, 1], got {threshold}")]
    InvalidAlphaThreshold {
        /// Requested threshold.
        threshold: f64,
    },

    /// The raster data itself is malformed.
    #[error(transparent)]
    Raster(#[from] RasterError),
}

impl ReliefError {
    /// Create a raster-too-small error.
    #[must_use]
    pub const fn raster_too_small(width: u32, height: u32) -> Self {
        Self::RasterTooSmall { width, height }
    }

    /// Create an invalid target size error.
    #[must_use]
    pub const fn invalid_target_size(width: f64, height: f64) -> Self {
        Self::InvalidTargetSize { width, height }
    }

    /// Create an invalid depth error.
    #[must_use]
    pub const fn invalid_depth(max_depth: f64, base_thickness: f64) -> Self {
        Self::InvalidDepth {
            max_depth,
            base_thickness,
        }
    }

    /// Create an invalid alpha threshold error.
    #[must_use]
    pub const fn invalid_alpha_threshold(threshold: f64) -> Self {
        Self::InvalidAlphaThreshold { threshold }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReliefError::raster_too_small(1, 4);
        assert!(format!("{err}").contains("1x4"));

        let err = ReliefError::invalid_target_size(0.0, 10.0);
        assert!(format!("{err}").contains("0x10"));

        let err = ReliefError::invalid_depth(-1.0, 1.0);
        assert!(format!("{err}").contains("max_depth=-1"));

        let err = ReliefError::invalid_alpha_threshold(1.5);
        assert!(format!("{err}").contains("1.5"));
    }

    #[test]
    fn raster_error_converts() {
        let raster_err = relief_types::Raster::from_rgba8(2, 2, vec![0; 3]).unwrap_err();
        let err: ReliefError = raster_err.into();
        assert!(matches!(err, ReliefError::Raster(_)));
    }
}
