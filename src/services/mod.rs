//! Service layer: the sample pipeline with no CLI concerns.
//!
//! ## Service map
//! - `generator.rs` — `SampleSource` capability + sequence generation.
//! - `stats.rs` — sum/max/min derivation.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Randomness enters only through `SampleSource`.
//! - Keep command handlers thin; delegate to services.

pub mod generator;
pub mod output;
pub mod stats;
