//! RGBA8 raster input.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors arising from malformed raster data.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The pixel buffer length does not match the declared dimensions.
    #[error(
        "raster buffer length mismatch for {width}x{height}: expected {expected} bytes, got {actual}"
    )]
    BufferSizeMismatch {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Expected buffer length (`width * height * 4`).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// An RGBA8 pixel grid in row-major order.
///
/// Four bytes per pixel (red, green, blue, alpha), rows stored top to
/// bottom. The buffer length is checked against the declared dimensions
/// at construction, so consumers can index pixels without re-validating.
///
/// Dimension minimums are deliberately not enforced here; whether a
/// raster is large enough to mesh is a conversion-time concern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Create a raster from a raw RGBA8 byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::BufferSizeMismatch`] if `data.len()` is not
    /// exactly `width * height * 4`.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::Raster;
    ///
    /// let raster = Raster::from_rgba8(2, 1, vec![0; 8]).unwrap();
    /// assert_eq!(raster.height(), 1);
    ///
    /// assert!(Raster::from_rgba8(2, 1, vec![0; 7]).is_err());
    /// ```
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> RasterResult<Self> {
        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster with every pixel set to `rgba`.
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * Self::CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The four channel bytes of the pixel at (`x`, `y`).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[must_use]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of range");
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Overwrite the pixel at (`x`, `y`).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        assert!(x < self.width && y < self.height, "pixel out of range");
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        self.data[idx..idx + Self::CHANNELS].copy_from_slice(&rgba);
    }
}
