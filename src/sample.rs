use crate::cube::{ALL_CORNERS, CORNERS, CORNER_COUNT, mask_positions};
use crate::error::QueryError;
use crate::field::ScalarField;

/// The corners of one grid cell that lie inside a field, reduced to at most four corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerSample {
    /// Center of the cell in world space.
    pub center: [f64; 3],
    /// Edge length of the cell in world space.
    pub scale: f64,
    /// Bitmask of the corners found inside the field.
    pub inside: u8,
    /// Bitmask after mirroring; has between 1 and 4 corners set.
    pub mask: u8,
    /// True if `mask` is the complement of `inside`.
    pub mirrored: bool,
}

impl CornerSample {
    /// Evaluates `field` at the eight corners of the cell at `center` with edge length `scale`.
    ///
    /// Returns [`QueryError::DegenerateSample`] if the cell is entirely inside or outside.
    pub fn classify<F: ScalarField + ?Sized>(field: &F, center: [f64; 3], scale: f64) -> Result<Self, QueryError> {
        let mut inside = 0u8;
        for (i, c) in CORNERS.iter().enumerate() {
            let p = [
                center[0] + c[0] * scale,
                center[1] + c[1] * scale,
                center[2] + c[2] * scale,
            ];
            if field.contains(&p) {
                inside |= 1 << i;
            }
        }
        Self::from_mask(center, scale, inside)
    }

    /// Builds a sample from an already known inside bitmask.
    pub fn from_mask(center: [f64; 3], scale: f64, inside: u8) -> Result<Self, QueryError> {
        let (mask, mirrored) = normalize_mask(inside)?;
        Ok(Self { center, scale, inside, mask, mirrored })
    }

    /// Unit cube positions of the normalized corners.
    pub fn positions(&self) -> Vec<[f64; 3]> {
        mask_positions(self.mask)
    }

    /// Number of normalized corners.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

/// Mirrors a corner bitmask to its complement if more than half the corners are set.
///
/// Returns the normalized mask and whether it was mirrored, or
/// [`QueryError::DegenerateSample`] for 0 or 8 corners.
pub fn normalize_mask(inside: u8) -> Result<(u8, bool), QueryError> {
    match inside {
        0 => Err(QueryError::DegenerateSample { inside: false }),
        ALL_CORNERS => Err(QueryError::DegenerateSample { inside: true }),
        m if m.count_ones() as usize > CORNER_COUNT / 2 => Ok((!m, true)),
        m => Ok((m, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::geometries::SphereGeometry;

    #[test]
    fn test_degenerate_masks() {
        assert_eq!(normalize_mask(0), Err(QueryError::DegenerateSample { inside: false }));
        assert_eq!(normalize_mask(0xFF), Err(QueryError::DegenerateSample { inside: true }));
    }

    #[test]
    fn test_mirroring() {
        assert_eq!(normalize_mask(0b0000_1111), Ok((0b0000_1111, false)));
        assert_eq!(normalize_mask(0b1111_1110), Ok((0b0000_0001, true)));
        assert_eq!(normalize_mask(0b0111_1101), Ok((0b1000_0010, true)));
    }

    #[test]
    fn test_classify_sphere_corner() {
        // Only corner 6 at (+0.5, +0.5, +0.5) is within 0.3 of (0.6, 0.6, 0.6).
        let sphere = SphereGeometry::new([0.6, 0.6, 0.6], 0.3);
        let sample = CornerSample::classify(&sphere, [0.0, 0.0, 0.0], 1.0).unwrap();
        assert_eq!(sample.inside, 1 << 6);
        assert!(!sample.mirrored);
        assert_eq!(sample.positions(), vec![[0.5, 0.5, 0.5]]);
    }

    #[test]
    fn test_classify_uses_center_and_scale() {
        let sphere = SphereGeometry::new([10.0, 10.0, 10.0], 1.5);
        // Cell of size 2 around (10, 10, 10): corners at distance sqrt(3) > 1.5, so all outside.
        let err = CornerSample::classify(&sphere, [10.0, 10.0, 10.0], 2.0).unwrap_err();
        assert_eq!(err, QueryError::DegenerateSample { inside: false });
        // Cell of size 1: corners at distance ~0.87, all inside.
        let err = CornerSample::classify(&sphere, [10.0, 10.0, 10.0], 1.0).unwrap_err();
        assert_eq!(err, QueryError::DegenerateSample { inside: true });
    }
}
