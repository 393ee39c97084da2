//! Dense quad-validity grid.

use crate::sampler::Sampler;

/// Validity of every grid cell (quad) between adjacent samples.
///
/// A quad at cell (x, y) spans samples (x, y) through (x+1, y+1) and is
/// valid iff all four corner samples are opaque. Validity is stored as a
/// dense row-major boolean grid, so the neighbor lookups during wall
/// generation are O(1) and allocation-free.
#[derive(Debug, Clone)]
pub struct QuadGrid {
    /// Cells per row, raster width minus one.
    width: u32,
    /// Cell rows, raster height minus one.
    height: u32,
    cells: Vec<bool>,
    valid_count: usize,
}

impl QuadGrid {
    /// Build the validity grid for `sampler`'s raster.
    ///
    /// A raster narrower or shorter than 2 pixels produces an empty grid
    /// with no valid quads.
    #[must_use]
    pub fn build(sampler: &Sampler) -> Self {
        let width = sampler.raster().width().saturating_sub(1);
        let height = sampler.raster().height().saturating_sub(1);

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        let mut valid_count = 0;

        for y in 0..i64::from(height) {
            for x in 0..i64::from(width) {
                let valid = sampler.is_opaque(x, y)
                    && sampler.is_opaque(x + 1, y)
                    && sampler.is_opaque(x, y + 1)
                    && sampler.is_opaque(x + 1, y + 1);
                if valid {
                    valid_count += 1;
                }
                cells.push(valid);
            }
        }

        Self {
            width,
            height,
            cells,
            valid_count,
        }
    }

    /// Cells per row (raster width minus one).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Cell rows (raster height minus one).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of valid quads.
    #[must_use]
    pub const fn valid_count(&self) -> usize {
        self.valid_count
    }

    /// Whether the quad at cell (`x`, `y`) is valid.
    ///
    /// Cells outside the grid are invalid, so boundary checks at the
    /// raster edges need no special casing.
    #[must_use]
    pub fn is_valid(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Range check above keeps both coordinates within the grid.
        let index = y as usize * self.width as usize + x as usize;
        self.cells[index]
    }
}
