//! Parameters for relief generation.

/// Parameters controlling how a raster is turned into a relief solid.
///
/// Physical values are in mesh units, typically millimeters.
///
/// # Example
///
/// ```
/// use relief_mesher::ReliefParams;
///
/// // Defaults: 100x100 units, 5 units of relief on a 1 unit base
/// let params = ReliefParams::default();
/// assert!((params.max_depth - 5.0).abs() < 1e-10);
///
/// // Lithophane preset inverts brightness so dark pixels print thick
/// let litho = ReliefParams::lithophane();
/// assert!(litho.invert);
///
/// // Builder-style adjustment
/// let params = ReliefParams::default().target_size(60.0, 40.0).max_depth(3.0);
/// assert!((params.target_width - 60.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct ReliefParams {
    /// Physical width of the generated solid (x extent).
    pub target_width: f64,

    /// Physical height of the generated solid (y extent).
    pub target_height: f64,

    /// Maximum relief height above the base. A fully bright pixel sits
    /// this far above the base surface.
    pub max_depth: f64,

    /// Thickness of the solid under zero-brightness pixels. Keeps the
    /// thinnest regions printable.
    pub base_thickness: f64,

    /// Invert brightness before computing heights. Dark pixels become
    /// tall, which is what lithophanes need.
    pub invert: bool,

    /// Opacity cutoff in [0, 1]. Samples at or below this alpha are
    /// treated as empty and generate no geometry.
    pub alpha_threshold: f64,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            target_width: 100.0,  // 100mm square output
            target_height: 100.0,
            max_depth: 5.0,       // 5mm relief range
            base_thickness: 1.0,  // 1mm floor
            invert: false,
            alpha_threshold: 0.1,
        }
    }
}

impl ReliefParams {
    /// Create params for lithophane printing.
    ///
    /// Inverts brightness so dark image regions become thick (opaque when
    /// backlit) and bright regions become thin.
    #[must_use]
    pub fn lithophane() -> Self {
        Self {
            invert: true,
            max_depth: 2.5,      // thin enough to transmit light
            base_thickness: 0.8, // minimum printable membrane
            ..Self::default()
        }
    }

    /// Set the physical output size.
    #[must_use]
    pub const fn target_size(mut self, width: f64, height: f64) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    /// Set the maximum relief height above the base.
    #[must_use]
    pub const fn max_depth(mut self, depth: f64) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the base thickness.
    #[must_use]
    pub const fn base_thickness(mut self, thickness: f64) -> Self {
        self.base_thickness = thickness;
        self
    }

    /// Set whether brightness is inverted.
    #[must_use]
    pub const fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Set the opacity cutoff.
    #[must_use]
    pub const fn alpha_threshold(mut self, threshold: f64) -> Self {
        self.alpha_threshold = threshold;
        self
    }
}
