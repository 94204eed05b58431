//! `mm-kernel` - Dense square matrix multiplication with pluggable compute backends.
//!
//! This crate provides:
//! - A `Matrix` type: one contiguous row-major `f32` buffer per matrix
//! - A `ComputeBackend` trait for the multiply and copy kernels
//! - A serial `CpuBackend` and a rayon-driven `ParallelBackend`
//! - `DenseMatrixEngine`, which ties allocation, fill and the kernels together

pub mod backend;
pub mod cpu;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod parallel;

// Re-export primary types at the crate root for convenience.
pub use backend::ComputeBackend;
pub use cpu::CpuBackend;
pub use engine::DenseMatrixEngine;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use parallel::ParallelBackend;
