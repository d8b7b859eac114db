use super::ScalarField;

fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize_or(v: [f64; 3], fallback: [f64; 3]) -> [f64; 3] {
    let len = dot(&v, &v).sqrt();
    if len == 0.0 { fallback } else { [v[0] / len, v[1] / len, v[2] / len] }
}

/// Splits `d` into its signed length along the unit `axis` and the squared distance from it.
fn axial_split(d: &[f64; 3], axis: &[f64; 3]) -> (f64, f64) {
    let along = dot(d, axis);
    (along, (dot(d, d) - along * along).max(0.0))
}

const Z_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

/// Half-space on the side `normal` points to. A zero normal falls back to +z.
#[derive(Debug)]
pub struct PlaneGeometry {
    pub point: [f64; 3],
    pub normal: [f64; 3],
}

impl PlaneGeometry {
    pub fn new(point: [f64; 3], normal: [f64; 3]) -> Self {
        Self { point, normal: normalize_or(normal, Z_AXIS) }
    }
}

impl ScalarField for PlaneGeometry {
    fn contains(&self, point: &[f64; 3]) -> bool {
        dot(&sub(point, &self.point), &self.normal) >= 0.0
    }
}

/// Solid ball.
#[derive(Debug)]
pub struct SphereGeometry {
    pub center: [f64; 3],
    pub radius: f64,
}

impl SphereGeometry {
    pub fn new(center: [f64; 3], radius: f64) -> Self {
        Self { center, radius }
    }
}

impl ScalarField for SphereGeometry {
    fn contains(&self, point: &[f64; 3]) -> bool {
        let d = sub(point, &self.center);
        dot(&d, &d) <= self.radius * self.radius
    }
}

/// Unbounded solid cylinder around the line through `center` along `axis`.
#[derive(Debug)]
pub struct CylinderGeometry {
    pub center: [f64; 3],
    /// Unit length.
    pub axis: [f64; 3],
    pub radius: f64,
}

impl CylinderGeometry {
    pub fn new(center: [f64; 3], axis: [f64; 3], radius: f64) -> Self {
        Self { center, axis: normalize_or(axis, Z_AXIS), radius }
    }
}

impl ScalarField for CylinderGeometry {
    fn contains(&self, point: &[f64; 3]) -> bool {
        let (_, radial_sq) = axial_split(&sub(point, &self.center), &self.axis);
        radial_sq <= self.radius * self.radius
    }
}

/// Unbounded solid cone with apex `tip`, opening along `axis` with half-angle `angle`.
#[derive(Debug)]
pub struct ConeGeometry {
    pub tip: [f64; 3],
    /// Unit length.
    pub axis: [f64; 3],
    pub angle: f64,
}

impl ConeGeometry {
    pub fn new(tip: [f64; 3], axis: [f64; 3], angle: f64) -> Self {
        Self { tip, axis: normalize_or(axis, Z_AXIS), angle }
    }
}

impl ScalarField for ConeGeometry {
    fn contains(&self, point: &[f64; 3]) -> bool {
        let (height, radial_sq) = axial_split(&sub(point, &self.tip), &self.axis);
        height >= 0.0 && radial_sq.sqrt() <= height * self.angle.tan()
    }
}

/// Solid torus: points within `minor_radius` of the circle of `major_radius` around `axis`.
#[derive(Debug)]
pub struct TorusGeometry {
    pub center: [f64; 3],
    /// Unit length.
    pub axis: [f64; 3],
    pub major_radius: f64,
    pub minor_radius: f64,
}

impl TorusGeometry {
    pub fn new(center: [f64; 3], axis: [f64; 3], major_radius: f64, minor_radius: f64) -> Self {
        Self { center, axis: normalize_or(axis, Z_AXIS), major_radius, minor_radius }
    }
}

impl ScalarField for TorusGeometry {
    fn contains(&self, point: &[f64; 3]) -> bool {
        let (height, radial_sq) = axial_split(&sub(point, &self.center), &self.axis);
        let ring = radial_sq.sqrt() - self.major_radius;
        ring * ring + height * height <= self.minor_radius * self.minor_radius
    }
}

/// A convex polyhedron given as an intersection of half-spaces.
#[derive(Debug)]
pub struct ConvexPolyhedronGeometry {
    /// `(point, outward normal)` per face.
    pub planes: Vec<([f64; 3], [f64; 3])>,
}

impl ConvexPolyhedronGeometry {
    pub fn new(planes: Vec<([f64; 3], [f64; 3])>) -> Self {
        Self { planes }
    }

    /// Creates a polyhedron from flat point and normal arrays `[x1, y1, z1, x2, ...]`.
    ///
    /// Returns `None` if the arrays differ in length or are not a multiple of 3.
    pub fn from_flat(points: &[f64], normals: &[f64]) -> Option<Self> {
        if points.len() != normals.len() || points.len() % 3 != 0 {
            return None;
        }
        let planes = points
            .chunks_exact(3)
            .zip(normals.chunks_exact(3))
            .map(|(p, n)| ([p[0], p[1], p[2]], [n[0], n[1], n[2]]))
            .collect();
        Some(Self { planes })
    }

    /// Creates an axis-aligned box with the given center and half extents.
    pub fn new_box(center: [f64; 3], half_extents: [f64; 3]) -> Self {
        let mut planes = Vec::with_capacity(6);
        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let mut point = center;
                point[axis] += sign * half_extents[axis];
                let mut normal = [0.0; 3];
                normal[axis] = sign;
                planes.push((point, normal));
            }
        }
        Self { planes }
    }

    /// Creates a regular octahedron with the given circumradius.
    pub fn new_octahedron(center: [f64; 3], radius: f64) -> Self {
        let dist = radius / 3.0f64.sqrt();
        let mut planes = Vec::with_capacity(8);
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    let n = normalize_or([sx, sy, sz], Z_AXIS);
                    let p = [center[0] + n[0] * dist, center[1] + n[1] * dist, center[2] + n[2] * dist];
                    planes.push((p, n));
                }
            }
        }
        Self { planes }
    }
}

impl ScalarField for ConvexPolyhedronGeometry {
    fn contains(&self, point: &[f64; 3]) -> bool {
        self.planes.iter().all(|(p, n)| dot(&sub(point, p), n) <= 0.0)
    }
}
