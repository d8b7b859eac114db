use crate::bounds::BoundingBox;
use crate::config::PolygonizerConfig;
use crate::field::ScalarField;
use crate::field::geometries::*;
use crate::polygonizer::Polygonizer;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

// --- Bounding Box ---

/// Represents an axis-aligned bounding box in 3D space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox3D {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

#[wasm_bindgen]
impl BoundingBox3D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> BoundingBox3D {
        BoundingBox3D { min_x, min_y, min_z, max_x, max_y, max_z }
    }
}

impl From<BoundingBox3D> for BoundingBox {
    fn from(b: BoundingBox3D) -> Self {
        Self {
            min: [b.min_x, b.min_y, b.min_z],
            max: [b.max_x, b.max_y, b.max_z],
        }
    }
}

// --- Field ---

/// WASM wrapper for scalar fields.
#[wasm_bindgen]
pub struct Field3D {
    inner: Option<Box<dyn ScalarField>>,
}

#[wasm_bindgen]
impl Field3D {
    /// Wraps a JS object with a `contains(x, y, z) -> boolean` method.
    #[wasm_bindgen(js_name = newCustom)]
    pub fn new_custom(val: JsValue) -> Field3D {
        Field3D { inner: Some(Box::new(JsField { val })) }
    }

    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        self.inner.as_ref().is_some_and(|f| f.contains(&[x, y, z]))
    }

    pub fn new_plane(px: f64, py: f64, pz: f64, nx: f64, ny: f64, nz: f64) -> Field3D {
        Field3D { inner: Some(Box::new(PlaneGeometry::new([px, py, pz], [nx, ny, nz]))) }
    }

    pub fn new_sphere(cx: f64, cy: f64, cz: f64, radius: f64) -> Field3D {
        Field3D { inner: Some(Box::new(SphereGeometry::new([cx, cy, cz], radius))) }
    }

    pub fn new_cylinder(cx: f64, cy: f64, cz: f64, ax: f64, ay: f64, az: f64, radius: f64) -> Field3D {
        Field3D { inner: Some(Box::new(CylinderGeometry::new([cx, cy, cz], [ax, ay, az], radius))) }
    }

    pub fn new_cone(tx: f64, ty: f64, tz: f64, ax: f64, ay: f64, az: f64, angle: f64) -> Field3D {
        Field3D { inner: Some(Box::new(ConeGeometry::new([tx, ty, tz], [ax, ay, az], angle))) }
    }

    pub fn new_torus(cx: f64, cy: f64, cz: f64, ax: f64, ay: f64, az: f64, major: f64, minor: f64) -> Field3D {
        Field3D { inner: Some(Box::new(TorusGeometry::new([cx, cy, cz], [ax, ay, az], major, minor))) }
    }

    pub fn new_box(cx: f64, cy: f64, cz: f64, hx: f64, hy: f64, hz: f64) -> Field3D {
        Field3D { inner: Some(Box::new(ConvexPolyhedronGeometry::new_box([cx, cy, cz], [hx, hy, hz]))) }
    }

    pub fn new_octahedron(cx: f64, cy: f64, cz: f64, radius: f64) -> Field3D {
        Field3D { inner: Some(Box::new(ConvexPolyhedronGeometry::new_octahedron([cx, cy, cz], radius))) }
    }
}

impl Field3D {
    pub fn take_inner(&mut self) -> Option<Box<dyn ScalarField>> {
        self.inner.take()
    }
}

/// Wrapper for JS-defined fields.
/// SAFETY: This claims to be Send+Sync to satisfy Rayon, but calling JS from workers is dangerous.
/// Users should not scan custom fields from worker threads unless the runtime supports it.
struct JsField {
    val: JsValue,
}

unsafe impl Send for JsField {}
unsafe impl Sync for JsField {}

impl ScalarField for JsField {
    fn contains(&self, point: &[f64; 3]) -> bool {
        if let Ok(func) = Reflect::get(&self.val, &"contains".into()).and_then(|f| f.dyn_into::<Function>()) {
            let args = Array::of3(&point[0].into(), &point[1].into(), &point[2].into());
            if let Ok(res) = func.apply(&self.val, &args) {
                return res.as_bool().unwrap_or(false);
            }
        }
        false
    }
}

// --- Polygonizer ---

#[wasm_bindgen(js_name = Polygonizer3D)]
pub struct Polygonizer3D {
    inner: Polygonizer,
}

#[wasm_bindgen(js_class = Polygonizer3D)]
impl Polygonizer3D {
    #[wasm_bindgen(constructor)]
    pub fn new(bounds: BoundingBox3D, cell_size: f64) -> Result<Polygonizer3D, JsError> {
        let config = PolygonizerConfig::new(bounds.into(), cell_size);
        Ok(Polygonizer3D { inner: Polygonizer::new(config)? })
    }

    pub fn add_field(&mut self, mut field: Field3D) {
        if let Some(f) = field.take_inner() {
            self.inner.add_boxed_field(f);
        }
    }

    pub fn clear_fields(&mut self) {
        self.inner.clear_fields();
    }

    /// Scans the volume; returns the number of cells that failed to match.
    pub fn calculate(&mut self) -> usize {
        self.inner.calculate().failed_cells.len()
    }

    #[wasm_bindgen(getter)]
    pub fn count_triangles(&self) -> usize {
        self.inner.count_triangles()
    }

    #[wasm_bindgen(getter)]
    pub fn count_surface_cells(&self) -> usize {
        self.inner.report().surface_cells
    }

    /// Flat vertex buffer, nine values per triangle.
    #[wasm_bindgen(getter)]
    pub fn vertices(&self) -> Vec<f64> {
        self.inner.vertices()
    }

    /// Triangulates a single cell; returns an empty buffer for degenerate cells.
    pub fn query(&self, x: f64, y: f64, z: f64, scale: f64) -> Result<Vec<f64>, JsError> {
        match self.inner.query([x, y, z], scale) {
            Ok(tris) => Ok(tris.vertices()),
            Err(err) if err.is_degenerate() => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}
