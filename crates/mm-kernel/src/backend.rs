use std::fmt::Debug;

use crate::matrix::Matrix;

/// Trait for pluggable compute backends (serial CPU, rayon thread pool).
///
/// Both kernels work in place on caller-owned matrices. Every cell is
/// written before the call returns; callers never observe a partially
/// computed result.
///
/// Operands must all be `size x size`. This is a caller contract and is
/// only checked in debug builds.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu", "parallel").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// Each cell is accumulated in a local `f32`, adding `a[i][k] * b[k][j]`
    /// for `k` in ascending order, so results are bit-for-bit reproducible
    /// across backends and runs. Returns `c` for chaining.
    fn multiply<'c>(
        &self,
        size: usize,
        a: &Matrix,
        b: &Matrix,
        c: &'c mut Matrix,
    ) -> &'c mut Matrix;

    /// Element-wise copy: dest[i][j] = src[i][j].
    fn copy(&self, dest: &mut Matrix, src: &Matrix, size: usize);
}

/// Debug-only operand check shared by the backends.
#[inline]
pub(crate) fn debug_check_operands(size: usize, operands: &[&Matrix]) {
    for m in operands {
        debug_assert_eq!(
            m.size(),
            size,
            "operand is {}x{} but the kernel was called with size {}",
            m.size(),
            m.size(),
            size
        );
    }
}
