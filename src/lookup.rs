use crate::cube::{CORNERS, corner_mask, edge_midpoint};

/// Number of base cases in the lookup table.
pub const BASE_CASE_COUNT: usize = 15;

/// A canonical corner pattern with its precomputed triangulation.
///
/// Triangles are given as triples of edge indices; each triangle vertex lies at the midpoint
/// of its edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseCase {
    pub corners: &'static [usize],
    pub triangles: &'static [[usize; 3]],
}

/// The 15 corner patterns that cover every subset of at most four corners up to rotation.
///
/// Sorted by descending triangle count. Sets of more than four corners are handled by
/// matching their complement.
pub const BASE_CASES: [BaseCase; BASE_CASE_COUNT] = [
    BaseCase { corners: &[0, 1, 2, 4], triangles: &[[2, 10, 9], [2, 9, 7], [2, 7, 3], [7, 9, 4]] },
    BaseCase { corners: &[0, 1, 3, 4], triangles: &[[4, 7, 11], [9, 4, 11], [9, 11, 2], [9, 2, 1]] },
    BaseCase { corners: &[0, 2, 3, 4], triangles: &[[1, 11, 10], [1, 4, 11], [1, 0, 4], [7, 11, 4]] },
    BaseCase { corners: &[1, 2, 3, 4], triangles: &[[4, 7, 8], [9, 0, 11], [9, 11, 10], [11, 0, 3]] },
    BaseCase { corners: &[2, 3, 4, 5], triangles: &[[9, 5, 8], [8, 5, 7], [10, 1, 3], [10, 3, 11]] },
    BaseCase { corners: &[1, 3, 4, 6], triangles: &[[0, 1, 9], [4, 7, 8], [2, 3, 11], [5, 10, 6]] },
    BaseCase { corners: &[0, 1, 2], triangles: &[[2, 8, 3], [2, 10, 8], [10, 9, 8]] },
    BaseCase { corners: &[0, 2, 4], triangles: &[[3, 4, 7], [3, 0, 4], [1, 2, 10]] },
    BaseCase { corners: &[1, 3, 4], triangles: &[[9, 0, 1], [8, 4, 7], [2, 3, 11]] },
    BaseCase { corners: &[0, 1], triangles: &[[1, 8, 3], [9, 8, 1]] },
    BaseCase { corners: &[0, 2], triangles: &[[0, 8, 3], [1, 2, 10]] },
    BaseCase { corners: &[0, 1, 2, 3], triangles: &[[9, 8, 10], [10, 8, 11]] },
    BaseCase { corners: &[2, 4], triangles: &[[1, 2, 10], [8, 4, 7]] },
    BaseCase { corners: &[0], triangles: &[[3, 0, 8]] },
    BaseCase { corners: &[], triangles: &[] },
];

/// A base case resolved to positions on the unit cube.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseEntry {
    /// Index of the case in [`BASE_CASES`].
    pub index: usize,
    /// Bitmask of the marked corners.
    pub mask: u8,
    /// Positions of the marked corners.
    pub corner_positions: Vec<[f64; 3]>,
    /// Triangles as edge index triples.
    pub triangles: Vec<[usize; 3]>,
    /// Triangle vertices (edge midpoints), one `[a, b, c]` per triangle.
    pub triangle_vertices: Vec<[[f64; 3]; 3]>,
}

/// The resolved lookup table, built once and shared read-only between queries.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable {
    entries: Vec<CaseEntry>,
}

impl LookupTable {
    /// Builds the table from [`BASE_CASES`] and the cube corner and edge tables.
    pub fn new() -> Self {
        let entries: Vec<CaseEntry> = BASE_CASES
            .iter()
            .enumerate()
            .map(|(index, case)| CaseEntry {
                index,
                mask: corner_mask(case.corners),
                corner_positions: case.corners.iter().map(|&c| CORNERS[c]).collect(),
                triangles: case.triangles.to_vec(),
                triangle_vertices: case
                    .triangles
                    .iter()
                    .map(|t| [edge_midpoint(t[0]), edge_midpoint(t[1]), edge_midpoint(t[2])])
                    .collect(),
            })
            .collect();

        log::debug!(
            "built marching cubes lookup table: {} cases, {} triangles",
            entries.len(),
            entries.iter().map(|e| e.triangles.len()).sum::<usize>()
        );

        Self { entries }
    }

    pub fn entries(&self) -> &[CaseEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CaseEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the lookup table. Equivalent to [`LookupTable::new`].
pub fn create_lookup_table() -> LookupTable {
    LookupTable::new()
}
