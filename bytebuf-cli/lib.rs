//! Comparison harness timing `ByteBuffer` against `Vec<u8>`.
//!
//! Each [`Scenario`] runs the same workload on both containers a configurable
//! number of times. The harness reports the mean and standard deviation of
//! the timings and the buffer's mean as a percentage of the vector's.

use std::io::Write;

pub mod config;
pub mod error;
pub mod measure;
pub mod report;
pub mod scenario;


pub use config::{HarnessConfig, DEFAULT_ELEMENTS, DEFAULT_ITERATIONS, DEFAULT_SCALE};
pub use error::{format_error_for_stderr, Error, Result};
pub use measure::{measure, Measurement, Stats};
pub use report::{format_measurement, format_robot, write_report};
pub use scenario::{parse_scenario, Scenario};

/// Runs every selected scenario and writes the report to `out`.
///
/// # Parameters
///
/// * `config` - Harness settings; validated before anything runs
/// * `out` - Destination for the report
///
/// # Errors
///
/// Returns an error for invalid settings, a failed buffer operation or a
/// failed write.
///
/// # Returns
///
/// The measurements in execution order.
pub fn run<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<Vec<Measurement>> {
    config.validate()?;

    let measurements = config
        .selected()
        .into_iter()
        .map(|scenario| measure(scenario, config))
        .collect::<Result<Vec<_>>>()?;

    write_report(out, &measurements, config.robot, config.reverse)?;

    Ok(measurements)
}

/// Parse an element count with optional K/M suffixes.
///
/// # Parameters
///
/// * `s` - Count such as `1000`, `4K` or `1M` (binary multiples, case-insensitive)
///
/// # Errors
///
/// Returns a message describing the problem if the string is empty, has an
/// unknown suffix, is not a whole number, or overflows `usize`.
pub fn parse_count(s: &str) -> std::result::Result<usize, String> {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    let s = s.trim();
    if s.is_empty() {
        return Err("Empty count".to_string());
    }

    let (number_part, multiplier) = if let Some(last_char) = s.chars().last() {
        match last_char.to_ascii_uppercase() {
            'K' => (&s[..s.len() - 1], KB),
            'M' => (&s[..s.len() - 1], MB),
            _ if last_char.is_ascii_digit() => (s, 1),
            _ => return Err(format!("Invalid count suffix: {last_char}")),
        }
    } else {
        (s, 1)
    };

    let number: usize = number_part
        .parse()
        .map_err(|_| format!("Invalid count number: {number_part}"))?;

    number
        .checked_mul(multiplier)
        .ok_or_else(|| "Count too large".to_string())
}
