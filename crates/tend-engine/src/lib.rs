//! # tend-engine
//!
//! Analysis engine for the Tend habit-observation app.
//! Contains the timeline accessor, pattern detectors, observation catalog,
//! observation selector, and insight generator. Everything here is a pure
//! computation over in-memory data: callers supply `today`/`now`, the engine
//! never touches the clock, the filesystem, or the network.

#![allow(dead_code, unused)]
#![allow(clippy::module_inception)]

pub mod catalog;
pub mod insights;
pub mod patterns;
pub mod selection;
pub mod timeline;

pub use catalog::ObservationCatalog;
pub use insights::InsightGenerator;
pub use patterns::{detect_patterns, DetectorConfig};
pub use selection::{ObservationSelector, SelectedObservation};
