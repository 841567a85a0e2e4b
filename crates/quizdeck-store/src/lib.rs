//! quizdeck-store — `ResultStore` backends.
//!
//! Two implementations of the repository trait defined in
//! `quizdeck_core::traits`: [`JsonFileStore`] persists history to a single
//! JSON file (read wholesale, rewritten wholesale), and [`MemoryStore`]
//! keeps it in memory for tests.

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
