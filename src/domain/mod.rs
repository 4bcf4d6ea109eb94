//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — sample range, sequence, statistics and report structs.
//! - `constants.rs` — defaults that reproduce the reference run.
//! - `error.rs` — domain error taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no randomness and no I/O.
//!
//! ## Compatibility note
//! `Report` and `JsonOut` define the `--json` output schema.
//! Keep schema-impacting changes explicit and covered by `tests/cli.rs`.

pub mod constants;
pub mod error;
pub mod models;
