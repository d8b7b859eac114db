/// Number of corners of a cube.
pub const CORNER_COUNT: usize = 8;

/// Number of edges of a cube.
pub const EDGE_COUNT: usize = 12;

/// Corner positions of the unit cube centred at the origin.
///
/// Corners 0-3 form the bottom face (z = -0.5) counter-clockwise seen from above,
/// corners 4-7 the top face (z = +0.5) directly above them.
pub const CORNERS: [[f64; 3]; CORNER_COUNT] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

/// Edges of the cube as pairs of corner indices.
///
/// Edges 0-3 run around the bottom face, 4-7 around the top face and 8-11 are the verticals.
pub const EDGES: [[usize; 2]; EDGE_COUNT] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Bitmask with all eight corners set.
pub const ALL_CORNERS: u8 = 0xFF;

/// Returns the midpoint of the given edge on the unit cube.
pub fn edge_midpoint(edge: usize) -> [f64; 3] {
    let [a, b] = EDGES[edge];
    let pa = CORNERS[a];
    let pb = CORNERS[b];
    [
        (pa[0] + pb[0]) * 0.5,
        (pa[1] + pb[1]) * 0.5,
        (pa[2] + pb[2]) * 0.5,
    ]
}

/// Converts a list of corner indices into a bitmask.
pub fn corner_mask(indices: &[usize]) -> u8 {
    indices.iter().fold(0u8, |mask, &i| mask | (1 << i))
}

/// Lists the corner indices set in a bitmask, in ascending order.
pub fn mask_indices(mask: u8) -> Vec<usize> {
    (0..CORNER_COUNT).filter(|&i| mask & (1 << i) != 0).collect()
}

/// Returns the unit cube positions of the corners set in a bitmask.
pub fn mask_positions(mask: u8) -> Vec<[f64; 3]> {
    mask_indices(mask).into_iter().map(|i| CORNERS[i]).collect()
}

/// Looks up the corner index whose position equals `point`, within `tolerance` per axis.
pub fn corner_index(point: &[f64; 3], tolerance: f64) -> Option<usize> {
    CORNERS.iter().position(|c| {
        (c[0] - point[0]).abs() <= tolerance
            && (c[1] - point[1]).abs() <= tolerance
            && (c[2] - point[2]).abs() <= tolerance
    })
}

/// Looks up the edge whose midpoint equals `point`, within `tolerance` per axis.
pub fn edge_index(point: &[f64; 3], tolerance: f64) -> Option<usize> {
    (0..EDGE_COUNT).find(|&e| {
        let m = edge_midpoint(e);
        (m[0] - point[0]).abs() <= tolerance
            && (m[1] - point[1]).abs() <= tolerance
            && (m[2] - point[2]).abs() <= tolerance
    })
}
