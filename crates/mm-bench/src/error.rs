use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid nIter ({0})")]
    InvalidIterationCount(i64),
    #[error("Invalid size ({0})")]
    InvalidSize(usize),
    #[error("matrix error: {0}")]
    Matrix(#[from] mm_kernel::MatrixError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
