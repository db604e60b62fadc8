//! Gutenberg-Richter recurrence law.
//!
//! For a magnitude `m` and truncation bounds `[m_min, m_max]`:
//!
//! - exceedance: `P(m) = 10^(-b (m - m_min))`
//! - density:    `f(m) = b ln(10) 10^(-b (m - m_min)) / (1 - 10^(-b (m_max - m_min)))`
//!
//! The exceedance term is the untruncated law; only the density carries the
//! upper-truncation normalizer. The free functions apply the formula without
//! validating parameters, so degenerate bounds surface as IEEE anomalies
//! (`m_min == m_max` gives an infinite density). [`RecurrenceLaw`] is the
//! validated entry point.

use std::f64::consts::LN_10;

use gr_core::{Error, RecurrenceCurve, Result};
use rayon::prelude::*;

use crate::truncated::TruncatedGutenbergRichter;

/// Reference b-value of the recurrence law.
pub const B_VALUE: f64 = 1.0;

/// Exceedance probability `10^(-b (m - m_min))` at `m`.
///
/// Equals `1.0` exactly at `m == m_min`.
#[inline]
pub fn exceedance(m: f64, m_min: f64, b_value: f64) -> f64 {
    10f64.powf(-b_value * (m - m_min))
}

/// Upper-truncation normalizer `1 - 10^(-b (m_max - m_min))`.
///
/// Zero when `m_min == m_max`, negative when the bounds are inverted.
#[inline]
pub fn normalizer(m_min: f64, m_max: f64, b_value: f64) -> f64 {
    1.0 - 10f64.powf(-b_value * (m_max - m_min))
}

/// Probability density at `m` under the doubly-bounded law.
#[inline]
pub fn density(m: f64, m_min: f64, m_max: f64, b_value: f64) -> f64 {
    scaled_density(exceedance(m, m_min, b_value), b_value, normalizer(m_min, m_max, b_value))
}

#[inline]
fn scaled_density(p: f64, b_value: f64, norm: f64) -> f64 {
    b_value * LN_10 * p / norm
}

/// Evaluate `(probability, pdf)` for every magnitude with [`B_VALUE`].
///
/// Outputs have the same length and order as `magnitudes`. No validation is
/// performed; see the module docs for degenerate bounds.
pub fn evaluate(magnitudes: &[f64], m_min: f64, m_max: f64) -> (Vec<f64>, Vec<f64>) {
    evaluate_with_b_value(magnitudes, m_min, m_max, B_VALUE)
}

/// [`evaluate`] with an explicit b-value.
pub fn evaluate_with_b_value(
    magnitudes: &[f64],
    m_min: f64,
    m_max: f64,
    b_value: f64,
) -> (Vec<f64>, Vec<f64>) {
    let norm = normalizer(m_min, m_max, b_value);
    magnitudes
        .iter()
        .map(|&m| {
            let p = exceedance(m, m_min, b_value);
            (p, scaled_density(p, b_value, norm))
        })
        .unzip()
}

/// Data-parallel [`evaluate_with_b_value`] on the rayon global pool.
///
/// Produces bit-identical output to the sequential version.
pub fn evaluate_par(
    magnitudes: &[f64],
    m_min: f64,
    m_max: f64,
    b_value: f64,
) -> (Vec<f64>, Vec<f64>) {
    let norm = normalizer(m_min, m_max, b_value);
    magnitudes
        .par_iter()
        .map(|&m| {
            let p = exceedance(m, m_min, b_value);
            (p, scaled_density(p, b_value, norm))
        })
        .unzip()
}

/// Validated recurrence-law parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecurrenceLaw {
    m_min: f64,
    m_max: f64,
    b_value: f64,
}

impl RecurrenceLaw {
    /// Law on `[m_min, m_max]` with the reference b-value.
    pub fn new(m_min: f64, m_max: f64) -> Result<Self> {
        Self::with_b_value(m_min, m_max, B_VALUE)
    }

    /// Law on `[m_min, m_max]` with an explicit b-value.
    ///
    /// Requires finite bounds with `m_min < m_max` and a finite `b_value > 0`.
    pub fn with_b_value(m_min: f64, m_max: f64, b_value: f64) -> Result<Self> {
        if !m_min.is_finite() || !m_max.is_finite() {
            return Err(Error::Validation(format!(
                "magnitude bounds must be finite, got m_min={m_min}, m_max={m_max}"
            )));
        }
        if m_max <= m_min {
            return Err(Error::Validation(format!(
                "m_max must be > m_min, got m_min={m_min}, m_max={m_max}"
            )));
        }
        if !b_value.is_finite() || b_value <= 0.0 {
            return Err(Error::Validation(format!(
                "b_value must be finite and > 0, got {b_value}"
            )));
        }
        Ok(Self { m_min, m_max, b_value })
    }

    /// Lower truncation magnitude.
    pub fn m_min(&self) -> f64 {
        self.m_min
    }

    /// Upper truncation magnitude.
    pub fn m_max(&self) -> f64 {
        self.m_max
    }

    /// Gutenberg-Richter b-value.
    pub fn b_value(&self) -> f64 {
        self.b_value
    }

    /// `beta = b ln(10)`, the rate of the equivalent exponential law.
    pub fn beta(&self) -> f64 {
        self.b_value * LN_10
    }

    /// Exceedance probability at `m`.
    pub fn exceedance(&self, m: f64) -> f64 {
        exceedance(m, self.m_min, self.b_value)
    }

    /// Probability density at `m`.
    pub fn pdf(&self, m: f64) -> f64 {
        density(m, self.m_min, self.m_max, self.b_value)
    }

    /// Evaluate the law over `magnitudes`.
    pub fn evaluate(&self, magnitudes: &[f64]) -> RecurrenceCurve {
        let (probability, pdf) =
            evaluate_with_b_value(magnitudes, self.m_min, self.m_max, self.b_value);
        self.curve(magnitudes, probability, pdf)
    }

    /// Parallel [`RecurrenceLaw::evaluate`].
    pub fn evaluate_par(&self, magnitudes: &[f64]) -> RecurrenceCurve {
        let (probability, pdf) = evaluate_par(magnitudes, self.m_min, self.m_max, self.b_value);
        self.curve(magnitudes, probability, pdf)
    }

    /// The normalized doubly-truncated law with the same parameters.
    pub fn truncated(&self) -> TruncatedGutenbergRichter {
        TruncatedGutenbergRichter::new(*self)
    }

    fn curve(&self, magnitudes: &[f64], probability: Vec<f64>, pdf: Vec<f64>) -> RecurrenceCurve {
        RecurrenceCurve {
            magnitudes: magnitudes.to_vec(),
            probability,
            pdf,
            m_min: self.m_min,
            m_max: self.m_max,
            b_value: self.b_value,
        }
    }
}
