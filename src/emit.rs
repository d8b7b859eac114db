use crate::cube::edge_index;
use crate::lookup::CaseEntry;
use crate::matcher::CaseMatch;
use crate::rotation::{Rotation, mul_mat_vec};
use crate::sample::CornerSample;

/// A triangle placed in world space.
///
/// Its right-hand normal `(b - a) x (c - a)` points into the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedTriangle {
    pub vertices: [[f64; 3]; 3],
    /// Edges of the sampled cell each vertex lies on, if the rotated midpoint resolved to one.
    pub edges: [Option<usize>; 3],
}

impl OrientedTriangle {
    /// Unnormalized right-hand normal, pointing towards the inside of the field.
    pub fn normal(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]
    }

    pub fn centroid(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        [
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
            (a[2] + b[2] + c[2]) / 3.0,
        ]
    }
}

/// The triangulation of one grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientedTriangles {
    pub center: [f64; 3],
    pub scale: f64,
    /// Corners found inside the field, before mirroring.
    pub inside: u8,
    /// Corners the base case was matched against, after mirroring.
    pub matched: u8,
    pub mirrored: bool,
    pub case_index: usize,
    pub rotation: Rotation,
    pub triangles: Vec<OrientedTriangle>,
}

impl OrientedTriangles {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Flat vertex buffer `[x0, y0, z0, x1, ...]`, three vertices per triangle.
    pub fn vertices(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.triangles.len() * 9);
        for t in &self.triangles {
            for v in &t.vertices {
                out.extend_from_slice(v);
            }
        }
        out
    }
}

/// Rotates the triangles of `entry` by `rotation`, then scales and translates them into the cell.
///
/// Base case triangles wind their normals towards the marked corners. For a mirrored sample
/// the marked corners are outside the field, so two vertices are swapped to keep every
/// normal pointing into the field.
pub fn orient_triangles(
    entry: &CaseEntry,
    rotation: &Rotation,
    center: [f64; 3],
    scale: f64,
    mirrored: bool,
) -> Vec<OrientedTriangle> {
    let m = rotation.matrix();
    entry
        .triangle_vertices
        .iter()
        .map(|tri| {
            let mut vertices = [[0.0; 3]; 3];
            let mut edges = [None; 3];
            for (k, v) in tri.iter().enumerate() {
                let r = mul_mat_vec(&m, v);
                edges[k] = edge_index(&r, 1e-6);
                vertices[k] = [
                    center[0] + r[0] * scale,
                    center[1] + r[1] * scale,
                    center[2] + r[2] * scale,
                ];
            }
            if mirrored {
                vertices.swap(1, 2);
                edges.swap(1, 2);
            }
            OrientedTriangle { vertices, edges }
        })
        .collect()
}

/// Emits the triangles of a matched sample.
pub fn emit_triangles(entry: &CaseEntry, m: &CaseMatch, sample: &CornerSample) -> OrientedTriangles {
    OrientedTriangles {
        center: sample.center,
        scale: sample.scale,
        inside: sample.inside,
        matched: sample.mask,
        mirrored: sample.mirrored,
        case_index: m.case_index,
        rotation: m.rotation,
        triangles: orient_triangles(entry, &m.rotation, sample.center, sample.scale, sample.mirrored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupTable;
    use std::f64::consts::PI;

    #[test]
    fn test_half_turn_single_triangle() {
        let table = LookupTable::new();
        let entry = table.get(13).unwrap();
        let rotation = Rotation::new([0.0, 0.0, 1.0], PI);
        let tris = orient_triangles(entry, &rotation, [0.0, 0.0, 0.0], 1.0, false);
        assert_eq!(tris.len(), 1);
        // Edges 3, 0, 8 around corner 0 map to edges 1, 2, 10 around corner 2.
        assert_eq!(tris[0].edges, [Some(1), Some(2), Some(10)]);
        let v = tris[0].vertices[0];
        assert!((v[0] - 0.5).abs() < 1e-12 && v[1].abs() < 1e-12 && (v[2] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scale_and_translate() {
        let table = LookupTable::new();
        let entry = table.get(13).unwrap();
        let tris = orient_triangles(entry, &Rotation::IDENTITY, [10.0, 20.0, 30.0], 2.0, false);
        // Midpoint of edge 8 is (-0.5, -0.5, 0).
        let v = tris[0].vertices[2];
        assert!((v[0] - 9.0).abs() < 1e-12);
        assert!((v[1] - 19.0).abs() < 1e-12);
        assert!((v[2] - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_mirrored_reverses_winding() {
        let table = LookupTable::new();
        let entry = table.get(13).unwrap();
        let plain = orient_triangles(entry, &Rotation::IDENTITY, [0.0; 3], 1.0, false);
        let flipped = orient_triangles(entry, &Rotation::IDENTITY, [0.0; 3], 1.0, true);
        assert_eq!(plain[0].vertices[0], flipped[0].vertices[0]);
        assert_eq!(plain[0].vertices[1], flipped[0].vertices[2]);
        assert_eq!(plain[0].vertices[2], flipped[0].vertices[1]);
    }

    fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn test_normals_point_into_field() {
        let table = LookupTable::new();
        let corner = crate::cube::CORNERS[0];

        // Only corner 0 inside: the normal faces corner 0.
        let only = CornerSample::from_mask([0.0; 3], 1.0, 0b0000_0001).unwrap();
        let m = CaseMatch { case_index: 13, rotation_index: 0, rotation: Rotation::IDENTITY };
        let tris = emit_triangles(table.get(13).unwrap(), &m, &only);
        let t = tris.triangles[0];
        let to_corner = [corner[0] - t.centroid()[0], corner[1] - t.centroid()[1], corner[2] - t.centroid()[2]];
        assert!(dot(t.normal(), to_corner) > 0.0);

        // Every corner but 0 inside: same triangle, normal faces away from corner 0.
        let all_but = CornerSample::from_mask([0.0; 3], 1.0, 0b1111_1110).unwrap();
        assert!(all_but.mirrored);
        let tris = emit_triangles(table.get(13).unwrap(), &m, &all_but);
        assert!(dot(tris.triangles[0].normal(), to_corner) < 0.0);
    }
}
