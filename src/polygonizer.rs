use crate::bounds::BoundingBox;
use crate::config::PolygonizerConfig;
use crate::emit::{OrientedTriangle, OrientedTriangles};
use crate::error::{ConfigError, QueryError};
use crate::field::{Intersection, ScalarField};
use crate::matcher::Matcher;
use rayon::prelude::*;

/// Summary of the last volume scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanReport {
    /// Number of cells visited.
    pub cells: usize,
    /// Cells that produced a triangulation.
    pub surface_cells: usize,
    /// Cells entirely inside or outside the field.
    pub degenerate_cells: usize,
    /// Cells whose corner set matched no base case, with the error for each.
    pub failed_cells: Vec<(usize, QueryError)>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.failed_cells.is_empty()
    }
}

/// Scans a volume cell by cell and collects the marching cubes triangulation of a field.
///
/// A point is inside when it lies inside every added field. Cells are processed
/// independently and in parallel; a cell that fails to match is recorded in the
/// [`ScanReport`] without affecting any other cell.
pub struct Polygonizer {
    config: PolygonizerConfig,
    resolution: [usize; 3],
    matcher: Matcher,
    fields: Intersection,
    cells: Vec<OrientedTriangles>,
    report: ScanReport,
}

impl Polygonizer {
    /// Creates a polygonizer for the grid described by `config`.
    pub fn new(config: PolygonizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let resolution = config.resolution();
        let matcher = Matcher::with_precision(config.precision)?;
        Ok(Self {
            config,
            resolution,
            matcher,
            fields: Intersection::new(),
            cells: Vec::new(),
            report: ScanReport::default(),
        })
    }

    pub fn add_field(&mut self, field: impl ScalarField + 'static) {
        self.fields.push(Box::new(field));
    }

    pub fn add_boxed_field(&mut self, field: Box<dyn ScalarField>) {
        self.fields.push(field);
    }

    /// Removes all fields and the results of the last scan.
    pub fn clear_fields(&mut self) {
        self.fields.clear();
        self.cells.clear();
        self.report = ScanReport::default();
    }

    pub fn count_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn config(&self) -> &PolygonizerConfig {
        &self.config
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.config.bounds
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Number of cells along each axis.
    pub fn resolution(&self) -> [usize; 3] {
        self.resolution
    }

    /// Total number of cells in the grid.
    pub fn count_grid_cells(&self) -> usize {
        self.resolution[0] * self.resolution[1] * self.resolution[2]
    }

    /// Center of the cell with linear index `index` (x fastest, then y, then z).
    pub fn cell_center(&self, index: usize) -> [f64; 3] {
        let [nx, ny, _] = self.resolution;
        let ix = index % nx;
        let iy = (index / nx) % ny;
        let iz = index / (nx * ny);
        let s = self.config.cell_size;
        let min = self.config.bounds.min;
        [
            min[0] + (ix as f64 + 0.5) * s,
            min[1] + (iy as f64 + 0.5) * s,
            min[2] + (iz as f64 + 0.5) * s,
        ]
    }

    /// Checks whether a point is inside all fields.
    pub fn contains(&self, point: &[f64; 3]) -> bool {
        self.fields.contains(point)
    }

    /// Triangulates a single cell of arbitrary center and size.
    pub fn query(&self, center: [f64; 3], scale: f64) -> Result<OrientedTriangles, QueryError> {
        self.matcher.query(&self.fields, center, scale)
    }

    /// Applies `f` to the query result of every grid cell, in parallel, without storing the cells.
    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize, Result<OrientedTriangles, QueryError>) -> T + Send + Sync,
    {
        let scale = self.config.cell_size;
        (0..self.count_grid_cells())
            .into_par_iter()
            .map(|i| f(i, self.query(self.cell_center(i), scale)))
            .collect()
    }

    /// Scans every grid cell and stores the triangulated ones.
    pub fn calculate(&mut self) -> &ScanReport {
        let results = self.map(|i, result| (i, result));

        let mut report = ScanReport { cells: results.len(), ..ScanReport::default() };
        let mut cells = Vec::new();
        for (i, result) in results {
            match result {
                Ok(tris) => {
                    report.surface_cells += 1;
                    cells.push(tris);
                }
                Err(QueryError::DegenerateSample { .. }) => report.degenerate_cells += 1,
                Err(err) => {
                    log::error!("cell {} at {:?}: {}", i, self.cell_center(i), err);
                    report.failed_cells.push((i, err));
                }
            }
        }

        log::debug!(
            "scanned {} cells: {} surface, {} degenerate, {} failed",
            report.cells,
            report.surface_cells,
            report.degenerate_cells,
            report.failed_cells.len()
        );

        self.cells = cells;
        self.report = report;
        &self.report
    }

    /// Triangulated cells from the last scan, in grid order.
    pub fn cells(&self) -> &[OrientedTriangles] {
        &self.cells
    }

    pub fn report(&self) -> &ScanReport {
        &self.report
    }

    pub fn triangles(&self) -> impl Iterator<Item = &OrientedTriangle> {
        self.cells.iter().flat_map(|c| c.triangles.iter())
    }

    pub fn count_triangles(&self) -> usize {
        self.cells.iter().map(|c| c.len()).sum()
    }

    /// Flat vertex buffer of all triangles from the last scan.
    pub fn vertices(&self) -> Vec<f64> {
        self.cells.iter().flat_map(|c| c.vertices()).collect()
    }
}
