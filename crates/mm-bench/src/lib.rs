//! `mm-bench` - Timing harness for the `mm-kernel` matrix engine.
//!
//! Allocates three square matrices, fills two of them, then repeatedly
//! multiplies and copies the product back into one of the operands while
//! timing the loop.

pub mod config;
pub mod error;
pub mod report;
pub mod run;

pub use config::{BackendKind, BenchArgs, BenchConfig};
pub use error::{BenchError, Result};
pub use run::{run, BenchOutcome};
