//! Shared traits used across Tend crates.

pub mod picker;
pub mod store;

pub use picker::{FixedPicker, IndexPicker};
pub use store::StateStore;
