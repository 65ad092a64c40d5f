//! Pure breakpoint evaluation — binary search + linear interpolation

use cardflow_core::{CardflowError, Result};
use serde::{Deserialize, Serialize};

/// A declarative piecewise-linear mapping from one scalar domain to another.
///
/// Carries parallel input/output breakpoint sequences so a host can ship
/// the mapping across a boundary and re-evaluate it continuously as its
/// position signal changes, without calling back into this crate.
///
/// Input breakpoints must be monotonically non-decreasing; the sequences
/// must have equal, non-zero length. `new` enforces both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeMapping {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl RangeMapping {
    /// Build a mapping, failing fast on a violated precondition.
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Result<Self> {
        if input.is_empty() || output.is_empty() {
            return Err(CardflowError::EmptyBreakpoints);
        }
        if input.len() != output.len() {
            return Err(CardflowError::BreakpointLengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        for i in 1..input.len() {
            let (prev, next) = (input[i - 1], input[i]);
            // NaN fails this comparison too
            if !(next >= prev) {
                return Err(CardflowError::NonMonotonicBreakpoints {
                    index: i,
                    prev,
                    next,
                });
            }
        }
        Ok(Self { input, output })
    }

    pub fn input_breakpoints(&self) -> &[f64] {
        &self.input
    }

    pub fn output_breakpoints(&self) -> &[f64] {
        &self.output
    }

    /// Evaluate the mapping at `v`, returning the interpolated value.
    ///
    /// Uses binary search to find the surrounding breakpoints, then
    /// interpolates linearly. Queries outside the input domain clamp to
    /// the nearest boundary output; no extrapolation.
    pub fn evaluate(&self, v: f64) -> f64 {
        // Before first breakpoint — clamp to first output
        if v <= self.input[0] {
            return self.output[0];
        }

        // After last breakpoint — clamp to last output
        let last = self.input.len() - 1;
        if v >= self.input[last] {
            return self.output[last];
        }

        // Binary search for the interval containing `v`
        let idx = match self
            .input
            .binary_search_by(|x| x.partial_cmp(&v).unwrap())
        {
            Ok(i) => return self.output[i], // exact match
            Err(i) => i, // insertion point — v is between [i-1] and [i]
        };

        // Tied breakpoints behave as a step; the earlier output wins
        let span = self.input[idx] - self.input[idx - 1];
        if span <= 0.0 {
            return self.output[idx - 1];
        }

        let t = (v - self.input[idx - 1]) / span;
        self.output[idx - 1] + (self.output[idx] - self.output[idx - 1]) * t
    }
}
