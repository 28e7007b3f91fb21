//! Tests for the wealthsim projection engine
//!
//! Tests are organized by topic:
//! - `classify` - Holding classification and parameter resolution
//! - `store` - Reference table defaults and validation
//! - `engine` - Simulation loop mechanics with scripted random streams
//! - `statistics` - Percentile bands and horizon summaries
//! - `scenarios` - End-to-end projections (closed-form and forced-crisis runs)
//! - `properties` - Property-based invariants over random seeds

mod properties;
mod scenarios;

use crate::random::RandomSource;

/// Deterministic stream: a constant uniform draw and a cycling list of
/// standard-normal deviates. Every normal value handed out is recorded.
pub(crate) struct ScriptedSource {
    uniform: f64,
    deviates: Vec<f64>,
    next: usize,
    pub uniforms_drawn: usize,
    pub normals: Vec<f64>,
}

impl ScriptedSource {
    pub(crate) fn new(uniform: f64, deviates: &[f64]) -> Self {
        assert!(!deviates.is_empty());
        Self {
            uniform,
            deviates: deviates.to_vec(),
            next: 0,
            uniforms_drawn: 0,
            normals: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        self.uniforms_drawn += 1;
        self.uniform
    }

    fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z = self.deviates[self.next % self.deviates.len()];
        self.next += 1;
        let value = mean + std_dev * z;
        self.normals.push(value);
        value
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
