//! # tend-core
//!
//! Core types, traits, errors, and collections for the Tend
//! habit-observation engine. Shared by the engine and storage crates.

#![allow(dead_code, unused)]

pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{EngineError, StorageError};
pub use traits::{IndexPicker, StateStore};
