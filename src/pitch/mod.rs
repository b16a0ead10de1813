// src/pitch/mod.rs
//! Pitch map model: length taxonomies, outcome colors, geometry and the
//! renderer-agnostic scene. Nothing in here draws.

pub mod color;
pub mod geometry;
pub mod outcome;
pub mod scene;
pub mod summary;
pub mod taxonomy;

pub use color::Rgb;
pub use outcome::Outcome;
pub use scene::{build, Panel, PitchScene, Primitive};
pub use summary::LengthSummary;
pub use taxonomy::{LengthBand, Region, Taxonomy, TaxonomyKind, PACE, SPIN};
