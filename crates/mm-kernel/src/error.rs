use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("cannot allocate a {size}x{size} f32 matrix")]
    AllocationFailure { size: usize },
    #[error("cannot build a {threads}-thread compute pool: {source}")]
    ThreadPool {
        threads: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
