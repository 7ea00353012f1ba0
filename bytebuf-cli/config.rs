//! Configuration types and constants for the comparison harness.

use crate::error::{Error, Result};
use crate::scenario::Scenario;

/// Number of timed runs per scenario and container
pub const DEFAULT_ITERATIONS: usize = 5;

/// Multiplier applied to every scenario's loop count
pub const DEFAULT_SCALE: usize = 1;

/// Number of bytes each workload operates on
pub const DEFAULT_ELEMENTS: usize = 1000;

/// Configuration for a harness run
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct HarnessConfig {
    /// Timed runs per scenario; mean and deviation are taken over these
    pub iterations: usize,
    /// Multiplier for the per-scenario loop count
    pub scale: usize,
    /// Bytes per workload
    pub elements: usize,
    /// Fixed loop count overriding each scenario's default
    pub loops: Option<usize>,
    /// Scenarios to run, all of them when empty
    pub scenarios: Vec<Scenario>,
    /// Print every timed run to stderr
    pub verbose: bool,
    /// Quiet level (as counted by `-q` occurrences)
    pub quiet: u8,
    /// Machine-readable output
    pub robot: bool,
    /// Repeat the report in reverse order
    pub reverse: bool,
}

impl HarnessConfig {
    /// Checks the numeric settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIterations`] or [`Error::InvalidScale`] when the
    /// corresponding value is zero.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidIterations);
        }
        if self.scale == 0 {
            return Err(Error::InvalidScale);
        }
        Ok(())
    }

    /// Scenarios selected for this run, in execution order.
    pub fn selected(&self) -> Vec<Scenario> {
        if self.scenarios.is_empty() {
            Scenario::ALL.to_vec()
        } else {
            self.scenarios.clone()
        }
    }

    /// Loop count for `scenario` after applying overrides and scale.
    pub fn loops_for(&self, scenario: Scenario) -> usize {
        self.loops
            .unwrap_or_else(|| scenario.base_loops())
            .saturating_mul(self.scale)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            scale: DEFAULT_SCALE,
            elements: DEFAULT_ELEMENTS,
            loops: None,
            scenarios: Vec::new(),
            verbose: false,
            quiet: 0,
            robot: false,
            reverse: false,
        }
    }
}
