use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mm_bench::report::{error_line, runtime_line, show_matrix};
use mm_bench::{run, BenchArgs, BenchConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn bench(program: &str, config: &BenchConfig) -> Result<()> {
    config.validate()?;
    let engine = config.engine()?;
    tracing::info!(
        backend = engine.backend().name(),
        size = config.size,
        iterations = config.iterations,
        "starting benchmark"
    );
    let outcome = run(&engine, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", runtime_line(program, outcome.elapsed))?;
    if config.show {
        show_matrix(&mut out, &outcome.c).context("failed to print result matrix")?;
    }
    out.flush()?;

    outcome.release(&engine);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let config = BenchConfig::from(BenchArgs::parse());
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "matrixmult".to_string());

    match bench(&program, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&program, &format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}
