use rayon::prelude::*;

use crate::backend::{debug_check_operands, ComputeBackend};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Data-parallel CPU backend built on rayon.
///
/// Output rows are handed out to worker threads; inside a row every cell is
/// reduced serially in ascending `k`, exactly like [`crate::CpuBackend`], so
/// both backends produce identical bits. `par_chunks_mut(..).for_each` joins
/// all workers before returning.
#[derive(Debug)]
pub struct ParallelBackend {
    pool: Option<rayon::ThreadPool>,
}

impl ParallelBackend {
    /// Run on rayon's global thread pool.
    pub fn new() -> Self {
        ParallelBackend { pool: None }
    }

    /// Run on a dedicated pool of `threads` workers.
    ///
    /// # Errors
    /// Returns [`MatrixError::ThreadPool`] if rayon cannot spawn the pool.
    pub fn with_threads(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("mm-worker-{i}"))
            .build()
            .map_err(|source| MatrixError::ThreadPool { threads, source })?;
        Ok(ParallelBackend { pool: Some(pool) })
    }

    /// Number of worker threads kernels will be spread across.
    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Default for ParallelBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for ParallelBackend {
    fn name(&self) -> &str {
        "parallel"
    }

    fn multiply<'c>(
        &self,
        size: usize,
        a: &Matrix,
        b: &Matrix,
        c: &'c mut Matrix,
    ) -> &'c mut Matrix {
        debug_check_operands(size, &[a, b, &*c]);

        let a = a.as_slice();
        let b = b.as_slice();
        let out = c.as_mut_slice();
        self.install(|| {
            out.par_chunks_mut(size.max(1))
                .enumerate()
                .for_each(|(i, row)| {
                    let a_row = &a[i * size..(i + 1) * size];
                    for (j, cell) in row.iter_mut().enumerate() {
                        let mut sum = 0.0f32;
                        for k in 0..size {
                            sum += a_row[k] * b[k * size + j];
                        }
                        *cell = sum;
                    }
                });
        });
        c
    }

    fn copy(&self, dest: &mut Matrix, src: &Matrix, size: usize) {
        debug_check_operands(size, &[&*dest, src]);

        let chunk = size.max(1);
        let out = dest.as_mut_slice();
        let src = src.as_slice();
        self.install(|| {
            out.par_chunks_mut(chunk)
                .zip(src.par_chunks(chunk))
                .for_each(|(d, s)| d.copy_from_slice(s));
        });
    }
}
