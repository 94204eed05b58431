use std::time::{Duration, Instant};

use mm_kernel::{DenseMatrixEngine, Matrix};
use tracing::{debug_span, info};

use crate::config::BenchConfig;
use crate::error::Result;

/// Matrices and timing left behind by a benchmark run.
#[derive(Debug)]
pub struct BenchOutcome {
    pub a: Matrix,
    pub b: Matrix,
    /// Product from the last iteration.
    pub c: Matrix,
    /// Wall-clock time of the multiply/copy loop only.
    pub elapsed: Duration,
}

impl BenchOutcome {
    /// Hand all three matrices back to the engine.
    pub fn release(self, engine: &DenseMatrixEngine) {
        engine.release(self.a);
        engine.release(self.b);
        engine.release(self.c);
    }
}

/// Run the benchmark loop.
///
/// A and B start out filled (row `i` holds `i`). Every iteration computes
/// C = A @ B and then copies C back into an operand: into A when the
/// iteration index is odd, into B when it is even. Each iteration therefore
/// consumes the previous one's product and the loop is strictly sequential.
///
/// # Errors
/// Fails before allocating anything if the configuration is invalid, and
/// with [`crate::BenchError::Matrix`] if a matrix cannot be allocated.
pub fn run(engine: &DenseMatrixEngine, config: &BenchConfig) -> Result<BenchOutcome> {
    config.validate()?;
    let size = config.size;

    let mut a = engine.allocate(size)?;
    engine.fill(&mut a, size);
    let mut b = engine.allocate(size)?;
    engine.fill(&mut b, size);
    let mut c = engine.allocate(size)?;

    let start = Instant::now();
    for i in 0..config.iterations {
        let _span = debug_span!("iteration", i).entered();
        engine.multiply(size, &a, &b, &mut c);
        if i % 2 == 1 {
            engine.copy(&mut a, &c, size);
        } else {
            engine.copy(&mut b, &c, size);
        }
    }
    let elapsed = start.elapsed();

    info!(
        backend = engine.backend().name(),
        size,
        iterations = config.iterations,
        elapsed_secs = elapsed.as_secs_f64(),
        "benchmark finished"
    );
    Ok(BenchOutcome { a, b, c, elapsed })
}
