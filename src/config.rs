use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::error::ConfigError;
use crate::matcher::DEFAULT_PRECISION;

/// Smallest supported rounding precision, in decimal places.
///
/// Corner coordinates are multiples of 0.5, which do not survive rounding to whole numbers.
pub const MIN_PRECISION: u32 = 1;

/// Largest supported rounding precision, in decimal places.
pub const MAX_PRECISION: u32 = 9;

/// Largest number of cells a single scan may visit.
pub const MAX_CELLS: usize = 1 << 30;

/// Checks that `precision` lies in `MIN_PRECISION..=MAX_PRECISION`.
pub fn check_precision(precision: u32) -> Result<(), ConfigError> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(ConfigError::PrecisionOutOfRange(precision))
    }
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// Settings for scanning a volume with a [`Polygonizer`](crate::Polygonizer).
///
/// The volume is divided into cubic cells of edge length `cell_size`, starting at
/// `bounds.min`. The last cell along an axis may extend past `bounds.max`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonizerConfig {
    pub bounds: BoundingBox,
    pub cell_size: f64,
    /// Decimal places corner positions are rounded to when matching.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl PolygonizerConfig {
    pub fn new(bounds: BoundingBox, cell_size: f64) -> Self {
        Self { bounds, cell_size, precision: DEFAULT_PRECISION }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Checks that the bounds, cell size and precision describe a usable grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in 0..3 {
            let (min, max) = (self.bounds.min[axis], self.bounds.max[axis]);
            if !(max > min) || !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::EmptyBounds { axis, min, max });
            }
        }
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        check_precision(self.precision)?;
        self.count_cells()
            .filter(|&n| n <= MAX_CELLS)
            .map(|_| ())
            .ok_or(ConfigError::TooManyCells { max: MAX_CELLS })
    }

    /// Total number of cells, or `None` if it does not fit in a `usize`.
    pub fn count_cells(&self) -> Option<usize> {
        let mut total = 1usize;
        for axis in 0..3 {
            let n = (self.bounds.extent(axis) / self.cell_size).ceil();
            if !n.is_finite() || n >= usize::MAX as f64 {
                return None;
            }
            total = total.checked_mul((n as usize).max(1))?;
        }
        Some(total)
    }

    /// Number of cells along each axis.
    pub fn resolution(&self) -> [usize; 3] {
        let n = |axis: usize| ((self.bounds.extent(axis) / self.cell_size).ceil() as usize).max(1);
        [n(0), n(1), n(2)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> BoundingBox {
        BoundingBox::new([0.0, 0.0, 0.0], [1.0, 2.0, 3.0])
    }

    #[test]
    fn test_resolution_rounds_up() {
        let config = PolygonizerConfig::new(unit_bounds(), 0.4);
        assert_eq!(config.resolution(), [3, 5, 8]);
    }

    #[test]
    fn test_validate() {
        assert!(PolygonizerConfig::new(unit_bounds(), 0.5).validate().is_ok());

        let flat = PolygonizerConfig::new(BoundingBox::new([0.0, 0.0, 0.0], [1.0, 0.0, 1.0]), 0.5);
        assert_eq!(flat.validate(), Err(ConfigError::EmptyBounds { axis: 1, min: 0.0, max: 0.0 }));

        let zero = PolygonizerConfig::new(unit_bounds(), 0.0);
        assert_eq!(zero.validate(), Err(ConfigError::InvalidCellSize(0.0)));

        let precise = PolygonizerConfig::new(unit_bounds(), 0.5).with_precision(12);
        assert_eq!(precise.validate(), Err(ConfigError::PrecisionOutOfRange(12)));
    }

    #[test]
    fn test_precision_bounds() {
        let config = |p| PolygonizerConfig::new(unit_bounds(), 0.5).with_precision(p);
        assert_eq!(config(0).validate(), Err(ConfigError::PrecisionOutOfRange(0)));
        assert!(config(MIN_PRECISION).validate().is_ok());
        assert!(config(MAX_PRECISION).validate().is_ok());
        assert_eq!(config(MAX_PRECISION + 1).validate(), Err(ConfigError::PrecisionOutOfRange(MAX_PRECISION + 1)));
    }

    #[test]
    fn test_tiny_cell_size_is_rejected() {
        let config = PolygonizerConfig::new(BoundingBox::new([0.0; 3], [1.0; 3]), 1e-300);
        assert_eq!(config.count_cells(), None);
        assert_eq!(config.validate(), Err(ConfigError::TooManyCells { max: MAX_CELLS }));

        // 2048^3 cells fit in a usize but exceed the cap.
        let dense = PolygonizerConfig::new(BoundingBox::new([0.0; 3], [1.0; 3]), 1.0 / 2048.0);
        assert_eq!(dense.count_cells(), 2048usize.checked_mul(2048).and_then(|n| n.checked_mul(2048)));
        assert_eq!(dense.validate(), Err(ConfigError::TooManyCells { max: MAX_CELLS }));

        let fine = PolygonizerConfig::new(BoundingBox::new([0.0; 3], [1.0; 3]), 1.0 / 512.0);
        assert!(fine.validate().is_ok());
    }
}
