use std::fmt;

use clap::{Parser, ValueEnum};
use mm_kernel::{DenseMatrixEngine, ParallelBackend};

use crate::error::{BenchError, Result};

/// Which kernel implementation to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Serial triple loop on the calling thread.
    Cpu,
    /// Rows spread over a rayon thread pool.
    Parallel,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Cpu => write!(f, "cpu"),
            BackendKind::Parallel => write!(f, "parallel"),
        }
    }
}

/// Dense matrix multiplication benchmark.
#[derive(Debug, Parser)]
pub struct BenchArgs {
    /// Side length of the square matrices.
    #[arg(default_value_t = 1500)]
    pub size: usize,
    /// Number of multiply/copy-back iterations. Must be positive.
    #[arg(default_value_t = 10, allow_negative_numbers = true)]
    pub iterations: i64,
    /// Kernel implementation to run.
    #[arg(short, long, value_enum, default_value_t = BackendKind::Parallel)]
    pub backend: BackendKind,
    /// Worker threads for the parallel backend (defaults to rayon's choice).
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// Print every cell of the result matrix after the run.
    #[arg(long)]
    pub show: bool,
}

/// Validated-on-demand benchmark settings, independent of the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub size: usize,
    pub iterations: i64,
    pub backend: BackendKind,
    pub threads: Option<usize>,
    pub show: bool,
}

impl BenchConfig {
    pub fn new(size: usize, iterations: i64) -> Self {
        BenchConfig {
            size,
            iterations,
            backend: BackendKind::Parallel,
            threads: None,
            show: false,
        }
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Reject settings the loop cannot run with.
    ///
    /// # Errors
    /// [`BenchError::InvalidIterationCount`] for a non-positive iteration
    /// count, [`BenchError::InvalidSize`] for a zero size.
    pub fn validate(&self) -> Result<()> {
        if self.iterations <= 0 {
            return Err(BenchError::InvalidIterationCount(self.iterations));
        }
        if self.size == 0 {
            return Err(BenchError::InvalidSize(self.size));
        }
        Ok(())
    }

    /// Build the engine for the selected backend.
    ///
    /// `threads` only applies to the parallel backend.
    pub fn engine(&self) -> Result<DenseMatrixEngine> {
        let engine = match (self.backend, self.threads) {
            (BackendKind::Cpu, _) => DenseMatrixEngine::cpu(),
            (BackendKind::Parallel, None) => DenseMatrixEngine::parallel(),
            (BackendKind::Parallel, Some(threads)) => {
                DenseMatrixEngine::new(Box::new(ParallelBackend::with_threads(threads)?))
            }
        };
        Ok(engine)
    }
}

impl From<BenchArgs> for BenchConfig {
    fn from(args: BenchArgs) -> Self {
        BenchConfig {
            size: args.size,
            iterations: args.iterations,
            backend: args.backend,
            threads: args.threads,
            show: args.show,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> BenchConfig {
        BenchArgs::try_parse_from(argv.iter().copied()).unwrap().into()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["matrixmult"]);
        assert_eq!(config.size, 1500);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.backend, BackendKind::Parallel);
        assert_eq!(config.threads, None);
        assert!(!config.show);
    }

    #[test]
    fn test_positional_and_flags() {
        let config = parse(&["matrixmult", "64", "3", "--backend", "cpu", "--show"]);
        let expected = BenchConfig {
            size: 64,
            iterations: 3,
            backend: BackendKind::Cpu,
            threads: None,
            show: true,
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_negative_iterations_parse_then_fail_validation() {
        let config = parse(&["matrixmult", "8", "-2"]);
        assert_eq!(config.iterations, -2);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BenchError::InvalidIterationCount(-2)));
        assert_eq!(err.to_string(), "Invalid nIter (-2)");
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(BenchConfig::new(8, 0).validate().is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = BenchConfig::new(0, 1).validate().unwrap_err();
        assert!(matches!(err, BenchError::InvalidSize(0)));
    }

    #[test]
    fn test_engine_selection() {
        let cpu = BenchConfig::new(4, 1).with_backend(BackendKind::Cpu);
        assert_eq!(cpu.engine().unwrap().backend().name(), "cpu");
        let par = BenchConfig::new(4, 1).with_threads(2);
        assert_eq!(par.engine().unwrap().backend().name(), "parallel");
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(BenchArgs::try_parse_from(["matrixmult", "--backend", "gpu"]).is_err());
    }
}
