//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the probe, info, and
//! sub-region copy flows. It wires user-provided options to the library
//! functionality exposed via `agcgrid::api`.
//!
//! If you are embedding the codec into another application, prefer the
//! `agcgrid::api` module over calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
