use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use mm_kernel::Matrix;

const RUNTIME_SIGNIFICANT_DIGITS: usize = 5;
const RUNTIME_WIDTH: usize = 8;

/// `<program> total runtime <seconds>`, seconds in `%8.5g` form.
pub fn runtime_line(program: &str, elapsed: Duration) -> String {
    format!(
        "{} total runtime {:>width$}",
        program,
        format_general(elapsed.as_secs_f64(), RUNTIME_SIGNIFICANT_DIGITS),
        width = RUNTIME_WIDTH
    )
}

/// `<program>: <error>`, the line printed to stderr when a run is refused.
pub fn error_line(program: &str, err: &impl Display) -> String {
    format!("{}: {}", program, err)
}

/// Render `value` with `precision` significant digits the way C's `%g` does.
///
/// The exponent is taken after rounding, so 9.99996 at five digits is `10`.
/// Exponents below -4 or at least `precision` switch to `d.ddde+XX` form.
/// Trailing zeros and a dangling decimal point are dropped in both forms.
pub fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);

    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        strip_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Write every cell as `arr[i][j]=<value>`, one per line, row by row.
pub fn show_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    for (i, row) in matrix.rows().enumerate() {
        for (j, value) in row.iter().enumerate() {
            writeln!(out, "arr[{}][{}]={:.6} ", i, j, value)?;
        }
    }
    Ok(())
}
