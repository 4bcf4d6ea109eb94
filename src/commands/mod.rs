//! Command handler layer.
//!
//! `run.rs` turns parsed flags into a sample source and drives
//! generate → summarize → print. Business logic stays in `services/*`.

pub mod run;

pub use run::{handle_run, run_report};
