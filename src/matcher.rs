use crate::cube::corner_index;
use crate::emit::{OrientedTriangles, emit_triangles};
use crate::config::check_precision;
use crate::error::{ConfigError, QueryError};
use crate::field::ScalarField;
use crate::lookup::{CaseEntry, LookupTable};
use crate::rotation::{CANONICAL_ROTATIONS, Rotation, rotate_points};
use crate::sample::CornerSample;

/// Default number of decimal places corner positions are rounded to before comparison.
pub const DEFAULT_PRECISION: u32 = 2;

type PointKey = [i64; 3];

/// A base case and the rotation that maps it onto a sampled corner set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseMatch {
    /// Index of the base case in the lookup table.
    pub case_index: usize,
    /// Index of the rotation in [`CANONICAL_ROTATIONS`].
    pub rotation_index: usize,
    pub rotation: Rotation,
}

/// Finds which base case a corner set is a rotation of.
///
/// Base cases are tried in table order and, for each, rotations in [`CANONICAL_ROTATIONS`]
/// order; the first rotation that maps the case's marked corners onto the queried set wins.
/// Sets are compared unordered, after rounding every coordinate to `precision` decimals.
pub struct Matcher {
    table: LookupTable,
    precision: u32,
    /// Sorted rounded corner positions for every (case, rotation) pair.
    rotated_keys: Vec<Vec<Vec<PointKey>>>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::build(DEFAULT_PRECISION)
    }

    /// Creates a matcher comparing positions rounded to `precision` decimal places.
    ///
    /// Fails with [`ConfigError::PrecisionOutOfRange`] outside `MIN_PRECISION..=MAX_PRECISION`.
    pub fn with_precision(precision: u32) -> Result<Self, ConfigError> {
        check_precision(precision)?;
        Ok(Self::build(precision))
    }

    fn build(precision: u32) -> Self {
        let table = LookupTable::new();
        let factor = 10f64.powi(precision as i32);
        let rotated_keys = table
            .entries()
            .iter()
            .map(|entry| {
                CANONICAL_ROTATIONS
                    .iter()
                    .map(|rotation| sorted_keys(&rotate_points(&entry.corner_positions, rotation), factor))
                    .collect()
            })
            .collect();
        Self { table, precision, rotated_keys }
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Finds the first base case and rotation whose rotated corners equal `positions`.
    ///
    /// `positions` are unit cube corner positions, in any order. An empty set is reported as
    /// degenerate rather than matched.
    pub fn find_matching_case(&self, positions: &[[f64; 3]]) -> Result<CaseMatch, QueryError> {
        if positions.is_empty() {
            return Err(QueryError::DegenerateSample { inside: false });
        }
        let factor = 10f64.powi(self.precision as i32);
        let target = sorted_keys(positions, factor);

        for (case_index, per_rotation) in self.rotated_keys.iter().enumerate() {
            if per_rotation[0].len() != target.len() {
                continue;
            }
            if let Some(rotation_index) = per_rotation.iter().position(|keys| *keys == target) {
                return Ok(CaseMatch {
                    case_index,
                    rotation_index,
                    rotation: CANONICAL_ROTATIONS[rotation_index],
                });
            }
        }

        let corners = positions
            .iter()
            .filter_map(|p| corner_index(p, 0.5 / factor))
            .fold(0u8, |mask, i| mask | (1 << i));
        log::error!("no base case matches corner set {:#010b} ({} positions)", corners, positions.len());
        Err(QueryError::NoMatchFound { corners })
    }

    /// Matches a normalized sample.
    pub fn match_sample(&self, sample: &CornerSample) -> Result<CaseMatch, QueryError> {
        self.find_matching_case(&sample.positions())
    }

    /// The table entry a match refers to.
    pub fn entry(&self, m: &CaseMatch) -> &CaseEntry {
        &self.table.entries()[m.case_index]
    }

    /// Runs normalize, match and emit for one cell.
    ///
    /// Returns [`QueryError::DegenerateSample`] for cells entirely inside or outside the field.
    pub fn query<F: ScalarField + ?Sized>(
        &self,
        field: &F,
        center: [f64; 3],
        scale: f64,
    ) -> Result<OrientedTriangles, QueryError> {
        let sample = CornerSample::classify(field, center, scale)?;
        let m = self.match_sample(&sample)?;
        log::trace!(
            "cell at {:?}: corners {:#010b} -> case {} rotation {}",
            center,
            sample.inside,
            m.case_index,
            m.rotation_index
        );
        Ok(emit_triangles(self.entry(&m), &m, &sample))
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_keys(points: &[[f64; 3]], factor: f64) -> Vec<PointKey> {
    let mut keys: Vec<PointKey> = points
        .iter()
        .map(|p| {
            [
                (p[0] * factor).round() as i64,
                (p[1] * factor).round() as i64,
                (p[2] * factor).round() as i64,
            ]
        })
        .collect();
    keys.sort_unstable();
    keys
}
