pub mod geometries;

/// A scalar field reduced to an inside/outside predicate.
///
/// Must be Send + Sync so a volume can be polygonized in parallel.
pub trait ScalarField: Send + Sync {
    /// Checks if a point is inside the field.
    fn contains(&self, point: &[f64; 3]) -> bool;
}

impl<F> ScalarField for F
where
    F: Fn(&[f64; 3]) -> bool + Send + Sync,
{
    fn contains(&self, point: &[f64; 3]) -> bool {
        self(point)
    }
}

/// The set of points outside another field.
#[derive(Debug)]
pub struct Complement<F: ScalarField> {
    pub inner: F,
}

impl<F: ScalarField> Complement<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: ScalarField> ScalarField for Complement<F> {
    fn contains(&self, point: &[f64; 3]) -> bool {
        !self.inner.contains(point)
    }
}

/// The set of points inside at least one of several fields.
#[derive(Default)]
pub struct Union {
    members: Vec<Box<dyn ScalarField>>,
}

impl Union {
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    pub fn with(mut self, field: impl ScalarField + 'static) -> Self {
        self.members.push(Box::new(field));
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl ScalarField for Union {
    fn contains(&self, point: &[f64; 3]) -> bool {
        self.members.iter().any(|f| f.contains(point))
    }
}

/// The set of points inside every one of several fields.
///
/// An empty intersection contains every point.
#[derive(Default)]
pub struct Intersection {
    members: Vec<Box<dyn ScalarField>>,
}

impl Intersection {
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    pub fn push(&mut self, field: Box<dyn ScalarField>) {
        self.members.push(field);
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl ScalarField for Intersection {
    fn contains(&self, point: &[f64; 3]) -> bool {
        self.members.iter().all(|f| f.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::geometries::SphereGeometry;

    #[test]
    fn test_closure_field() {
        let half_space = |p: &[f64; 3]| p[2] <= 0.0;
        assert!(half_space.contains(&[0.0, 0.0, -1.0]));
        assert!(!half_space.contains(&[0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_complement_and_union() {
        let shell = Complement::new(SphereGeometry::new([0.0, 0.0, 0.0], 1.0));
        assert!(!shell.contains(&[0.0, 0.0, 0.0]));
        assert!(shell.contains(&[2.0, 0.0, 0.0]));

        let pair = Union::new()
            .with(SphereGeometry::new([-2.0, 0.0, 0.0], 1.0))
            .with(SphereGeometry::new([2.0, 0.0, 0.0], 1.0));
        assert_eq!(pair.len(), 2);
        assert!(pair.contains(&[-2.0, 0.0, 0.0]));
        assert!(pair.contains(&[2.5, 0.0, 0.0]));
        assert!(!pair.contains(&[0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_intersection() {
        let mut lens = Intersection::new();
        assert!(lens.contains(&[100.0, 0.0, 0.0]));
        lens.push(Box::new(SphereGeometry::new([-0.5, 0.0, 0.0], 1.0)));
        lens.push(Box::new(SphereGeometry::new([0.5, 0.0, 0.0], 1.0)));
        assert!(lens.contains(&[0.0, 0.0, 0.0]));
        assert!(!lens.contains(&[-1.2, 0.0, 0.0]));
        lens.clear();
        assert!(lens.is_empty());
    }
}
