//! quizdeck-core — Core quiz engine: catalog, scoring, and session lifecycle.
//!
//! This crate defines the fundamental data model, the pure scoring engine,
//! the timed quiz session state machine, and the statistics aggregator that
//! the rest of the quizdeck system builds on.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod model;
pub mod results;
pub mod scoring;
pub mod session;
pub mod statistics;
pub mod traits;
