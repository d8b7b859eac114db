//! # cubecase
//!
//! `cubecase` is a Rust library for the case lookup at the heart of marching cubes, designed
//! to be used in Rust as well as compiled to WebAssembly (WASM). Given which corners of a
//! grid cell lie inside a field, it finds which of 15 base corner patterns the cell is a
//! rotation of, and places that pattern's triangles in the cell.
//!
//! ## Features
//!
//! - **Rotation-invariant matching**: 15 base cases under the 24 proper rotations of the cube,
//!   with corner sets of more than four corners mirrored to their complement.
//! - **Explicit outcomes**: uniform cells and unmatched corner sets are reported as
//!   [`QueryError`] variants instead of empty output.
//! - **Parallel scans**: [`Polygonizer`] triangulates whole volumes with Rayon.
//! - **Fields**: spheres, tori, planes, cylinders, cones, convex polyhedra, closures and
//!   custom JS objects.
//!
//! ## Main Interface
//!
//! [`Matcher::query`] triangulates a single cell; [`Polygonizer`] scans a grid of cells.

mod bounds;
mod config;
pub mod cube;
mod emit;
mod error;
pub mod field;
mod lookup;
mod matcher;
mod polygonizer;
pub mod rotation;
mod sample;
mod wasm;

pub use bounds::BoundingBox;
pub use config::PolygonizerConfig;
pub use config::MAX_CELLS;
pub use config::MAX_PRECISION;
pub use config::MIN_PRECISION;
pub use emit::OrientedTriangle;
pub use emit::OrientedTriangles;
pub use emit::emit_triangles;
pub use emit::orient_triangles;
pub use error::ConfigError;
pub use error::QueryError;
pub use field::ScalarField;
pub use field::geometries;
pub use lookup::BASE_CASES;
pub use lookup::BASE_CASE_COUNT;
pub use lookup::BaseCase;
pub use lookup::CaseEntry;
pub use lookup::LookupTable;
pub use lookup::create_lookup_table;
pub use matcher::CaseMatch;
pub use matcher::DEFAULT_PRECISION;
pub use matcher::Matcher;
pub use polygonizer::Polygonizer;
pub use polygonizer::ScanReport;
pub use rotation::CANONICAL_ROTATIONS;
pub use rotation::Rotation;
pub use sample::CornerSample;
pub use sample::normalize_mask;
