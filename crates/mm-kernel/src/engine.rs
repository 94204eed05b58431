use tracing::debug;

use crate::backend::ComputeBackend;
use crate::cpu::CpuBackend;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::parallel::ParallelBackend;

/// Front door for the benchmark: allocates, fills, multiplies, copies and
/// releases square matrices, dispatching the two kernels to a
/// [`ComputeBackend`].
///
/// Sizes are passed explicitly on every call and are trusted. Passing
/// matrices of another size is a caller error (debug builds assert).
#[derive(Debug)]
pub struct DenseMatrixEngine {
    backend: Box<dyn ComputeBackend>,
}

impl DenseMatrixEngine {
    pub fn new(backend: Box<dyn ComputeBackend>) -> Self {
        DenseMatrixEngine { backend }
    }

    /// Engine backed by the serial [`CpuBackend`].
    pub fn cpu() -> Self {
        Self::new(Box::new(CpuBackend::new()))
    }

    /// Engine backed by [`ParallelBackend`] on the global rayon pool.
    pub fn parallel() -> Self {
        Self::new(Box::new(ParallelBackend::new()))
    }

    pub fn backend(&self) -> &dyn ComputeBackend {
        self.backend.as_ref()
    }

    /// Reserve a `size x size` matrix in a single allocation.
    pub fn allocate(&self, size: usize) -> Result<Matrix> {
        let matrix = Matrix::allocate(size)?;
        debug!(size, bytes = size * size * std::mem::size_of::<f32>(), "allocated matrix");
        Ok(matrix)
    }

    /// Set every cell of row `i` to `i as f32`.
    pub fn fill(&self, matrix: &mut Matrix, size: usize) {
        for (i, row) in matrix.rows_mut().take(size).enumerate() {
            row[..size].fill(i as f32);
        }
    }

    /// C = A @ B on the configured backend. Returns `c`.
    pub fn multiply<'c>(
        &self,
        size: usize,
        a: &Matrix,
        b: &Matrix,
        c: &'c mut Matrix,
    ) -> &'c mut Matrix {
        self.backend.multiply(size, a, b, c)
    }

    /// dest = src, cell by cell.
    pub fn copy(&self, dest: &mut Matrix, src: &Matrix, size: usize) {
        self.backend.copy(dest, src, size);
    }

    /// Give the matrix's buffer back to the allocator.
    pub fn release(&self, matrix: Matrix) {
        debug!(size = matrix.size(), "released matrix");
        drop(matrix);
    }
}

impl Default for DenseMatrixEngine {
    fn default() -> Self {
        Self::parallel()
    }
}
