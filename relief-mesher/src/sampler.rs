//! Per-pixel brightness and opacity sampling.

use relief_types::Raster;

// ITU-R BT.601 luminance weights.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Brightness and opacity derived from one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Luminance-weighted brightness in [0, 1], inverted if configured.
    pub brightness: f64,
    /// Normalized opacity in [0, 1].
    pub alpha: f64,
}

/// Answers brightness, opacity and validity queries over a raster.
///
/// Coordinates are signed so neighbor lookups can walk off the raster
/// edge; out-of-grid samples are `{brightness: 0, alpha: 0}` rather than
/// an error.
///
/// # Example
///
/// ```
/// use relief_mesher::Sampler;
/// use relief_types::Raster;
///
/// let raster = Raster::filled(2, 2, [255, 255, 255, 255]);
/// let sampler = Sampler::new(&raster, false, 0.1);
///
/// assert!(sampler.is_opaque(0, 0));
/// assert!(!sampler.is_opaque(-1, 0));
/// assert!((sampler.sample(1, 1).brightness - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    raster: &'a Raster,
    invert: bool,
    alpha_threshold: f64,
}

impl<'a> Sampler<'a> {
    /// Create a sampler over `raster`.
    #[must_use]
    pub const fn new(raster: &'a Raster, invert: bool, alpha_threshold: f64) -> Self {
        Self {
            raster,
            invert,
            alpha_threshold,
        }
    }

    /// The raster being sampled.
    #[must_use]
    pub const fn raster(&self) -> &'a Raster {
        self.raster
    }

    /// Sample the pixel at (`x`, `y`).
    ///
    /// Out-of-grid coordinates yield `{0, 0}`.
    #[must_use]
    pub fn sample(&self, x: i64, y: i64) -> Sample {
        if x < 0
            || y < 0
            || x >= i64::from(self.raster.width())
            || y >= i64::from(self.raster.height())
        {
            return Sample {
                brightness: 0.0,
                alpha: 0.0,
            };
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // In-bounds check above keeps both coordinates within u32 range.
        let [r, g, b, a] = self.raster.rgba(x as u32, y as u32);

        let mut brightness = f64::from(r)
            .mul_add(LUMA_R, f64::from(g).mul_add(LUMA_G, f64::from(b) * LUMA_B))
            / 255.0;
        if self.invert {
            brightness = 1.0 - brightness;
        }

        Sample {
            brightness,
            alpha: f64::from(a) / 255.0,
        }
    }

    /// Whether the sample at (`x`, `y`) is opaque.
    ///
    /// A sample is opaque iff its alpha is strictly greater than the
    /// configured threshold; out-of-grid samples are never opaque.
    #[must_use]
    pub fn is_opaque(&self, x: i64, y: i64) -> bool {
        self.sample(x, y).alpha > self.alpha_threshold
    }
}
