//! Report formatting for completed measurements.

use std::io::{self, Write};

use crate::measure::Measurement;

/// Header printed before the human-readable report.
pub const REPORT_HEADER: &str = "buffer,\tvec,\tbuffer ± sd,\tvec ± sd,\tratio,\tscenario";

/// Header printed before the machine-readable report.
pub const ROBOT_HEADER: &str = "scenario,buffer_mean_ms,buffer_sd_ms,vec_mean_ms,vec_sd_ms";

/// Formats one human-readable report line.
pub fn format_measurement(m: &Measurement) -> String {
    format!(
        "{:.2},\t{:.2},\t{:.2} ± {:.2},\t{:.2} ± {:.2},\t{:.1}%,\t{}",
        m.buffer.mean_ms,
        m.vec.mean_ms,
        m.buffer.mean_ms,
        m.buffer.std_dev_ms,
        m.vec.mean_ms,
        m.vec.std_dev_ms,
        m.ratio_percent(),
        m.scenario,
    )
}

/// Formats one CSV line for `--robot` output.
pub fn format_robot(m: &Measurement) -> String {
    format!(
        "{},{:.4},{:.4},{:.4},{:.4}",
        m.scenario, m.buffer.mean_ms, m.buffer.std_dev_ms, m.vec.mean_ms, m.vec.std_dev_ms,
    )
}

/// Writes the report for `measurements`.
///
/// With `reverse` set, the lines are written a second time in reverse order
/// under a `Reverse:` heading.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    measurements: &[Measurement],
    robot: bool,
    reverse: bool,
) -> io::Result<()> {
    let format: fn(&Measurement) -> String = if robot {
        format_robot
    } else {
        format_measurement
    };

    writeln!(out, "{}", if robot { ROBOT_HEADER } else { REPORT_HEADER })?;
    for m in measurements {
        writeln!(out, "{}", format(m))?;
    }

    if reverse {
        writeln!(out, "\nReverse:")?;
        for m in measurements.iter().rev() {
            writeln!(out, "{}", format(m))?;
        }
    }

    out.flush()
}
