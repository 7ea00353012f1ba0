//! Timing and summary statistics for scenario runs.

use std::time::Instant;

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::scenario::Scenario;

/// Mean and standard deviation of a set of timings, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Arithmetic mean
    pub mean_ms: f64,
    /// Population standard deviation
    pub std_dev_ms: f64,
}

impl Stats {
    /// Summarizes `samples`.
    ///
    /// # Returns
    ///
    /// Zero mean and deviation for an empty sample set.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                mean_ms: 0.0,
                std_dev_ms: 0.0,
            };
        }

        let count = samples.len() as f64;
        let sum: f64 = samples.iter().sum();
        let sum_sq: f64 = samples.iter().map(|s| s * s).sum();

        let mean_ms = sum / count;
        // Rounding can push the variance slightly below zero
        let variance = (sum_sq / count - mean_ms * mean_ms).max(0.0);

        Self {
            mean_ms,
            std_dev_ms: variance.sqrt(),
        }
    }
}

/// Result of timing one scenario on both containers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Scenario that was timed
    pub scenario: Scenario,
    /// Timings for `ByteBuffer`
    pub buffer: Stats,
    /// Timings for `Vec<u8>`
    pub vec: Stats,
}

impl Measurement {
    /// `ByteBuffer` mean as a percentage of the `Vec<u8>` mean, one decimal.
    ///
    /// # Returns
    ///
    /// `0.0` when the `Vec<u8>` mean is zero.
    pub fn ratio_percent(&self) -> f64 {
        if self.vec.mean_ms == 0.0 {
            return 0.0;
        }
        (self.buffer.mean_ms / self.vec.mean_ms * 1000.0).round() / 10.0
    }
}

/// Times `scenario` on both containers `config.iterations` times.
///
/// Runs alternate between the two containers so that both see similar
/// machine conditions. In verbose mode each pair of timings goes to stderr.
///
/// # Errors
///
/// Returns an error if a buffer operation fails.
pub fn measure(scenario: Scenario, config: &HarnessConfig) -> Result<Measurement> {
    let loops = config.loops_for(scenario);
    let mut buffer_samples = Vec::with_capacity(config.iterations);
    let mut vec_samples = Vec::with_capacity(config.iterations);

    if config.verbose {
        eprintln!("ByteBuffer vs Vec<u8> ({scenario}, {loops} loops)");
    }

    for _ in 0..config.iterations {
        let start = Instant::now();
        scenario.run_buffer(config.elements, loops)?;
        let buffer_ms = start.elapsed().as_secs_f64() * 1000.0;

        let start = Instant::now();
        scenario.run_vec(config.elements, loops);
        let vec_ms = start.elapsed().as_secs_f64() * 1000.0;

        if config.verbose {
            eprintln!("{buffer_ms:.0}\t{vec_ms:.0}");
        }

        buffer_samples.push(buffer_ms);
        vec_samples.push(vec_ms);
    }

    let measurement = Measurement {
        scenario,
        buffer: Stats::from_samples(&buffer_samples),
        vec: Stats::from_samples(&vec_samples),
    };

    if config.verbose {
        eprintln!(
            "Results:\n  ByteBuffer: {:.2} ± {:.2} ms\n  Vec<u8>: {:.2} ± {:.2} ms",
            measurement.buffer.mean_ms,
            measurement.buffer.std_dev_ms,
            measurement.vec.mean_ms,
            measurement.vec.std_dev_ms,
        );
    }

    Ok(measurement)
}
