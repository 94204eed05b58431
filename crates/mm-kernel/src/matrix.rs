use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};

/// A square, row-major `f32` matrix.
///
/// All `size * size` cells live in one contiguous buffer. Row `i` starts at
/// offset `i * size`; rows are never allocated on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    size: usize,
}

impl Matrix {
    /// Reserve the backing buffer for a `size x size` matrix.
    ///
    /// Cell contents are unspecified until the matrix is filled or copied
    /// into (currently they happen to be zero).
    ///
    /// # Errors
    /// Returns [`MatrixError::AllocationFailure`] if `size * size` overflows
    /// or the allocator refuses the request.
    pub fn allocate(size: usize) -> Result<Self> {
        let len = size
            .checked_mul(size)
            .ok_or(MatrixError::AllocationFailure { size })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::AllocationFailure { size })?;
        data.resize(len, 0.0);
        Ok(Matrix { data, size })
    }

    /// Build a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `data.len() != size * size`.
    pub fn from_vec(size: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            size * size,
            "data length {} does not match a {}x{} matrix",
            data.len(),
            size,
            size
        );
        Matrix { data, size }
    }

    /// Zero-filled `size x size` matrix.
    pub fn zeros(size: usize) -> Self {
        Matrix {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Identity matrix: ones on the diagonal, zeros elsewhere.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size);
        for i in 0..size {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole backing buffer, row after row.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Cells of row `i`.
    ///
    /// # Panics
    /// Panics if `i >= size()`.
    pub fn row(&self, i: usize) -> &[f32] {
        let start = i * self.size;
        &self.data[start..start + self.size]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f32] {
        let start = i * self.size;
        &mut self.data[start..start + self.size]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f32]> {
        // chunks_exact(0) panics; an empty buffer yields no rows anyway.
        self.data.chunks_exact(self.size.max(1))
    }

    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [f32]> {
        self.data.chunks_exact_mut(self.size.max(1))
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.size + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self.data[i * self.size + j] = value;
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.data[i * self.size + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        &mut self.data[i * self.size + j]
    }
}
