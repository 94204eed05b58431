use crate::backend::{debug_check_operands, ComputeBackend};
use crate::matrix::Matrix;

/// Pure-Rust serial CPU backend.
///
/// Straight triple loop on a single thread. This is the baseline the
/// parallel backend is timed against.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
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
        for i in 0..size {
            for j in 0..size {
                let mut sum = 0.0f32;
                for k in 0..size {
                    sum += a[i * size + k] * b[k * size + j];
                }
                out[i * size + j] = sum;
            }
        }
        c
    }

    fn copy(&self, dest: &mut Matrix, src: &Matrix, size: usize) {
        debug_check_operands(size, &[&*dest, src]);
        dest.as_mut_slice().copy_from_slice(src.as_slice());
    }
}
