//! Flat-file JSON persistence for the Atelier backend.
//!
//! Each resource collection (projects, testimonials, inquiries,
//! notifications) lives in one JSON file holding one array, under a data
//! directory. Files are seeded with defaults on first access, written with
//! an atomic rename, and guarded by per-resource locks so read-modify-write
//! cycles cannot lose updates within the process.
//!
//! The repository layer is the seam callers depend on; a real database
//! could replace the files without touching anything above it.

pub mod models;
pub mod repositories;
pub mod seed;
mod store;

pub use store::{Collection, JsonStore, StoreError};
