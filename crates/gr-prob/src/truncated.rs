//! Doubly-truncated Gutenberg-Richter law.
//!
//! Exponential with rate `beta = b ln(10)` restricted to `[m_min, m_max]`
//! and renormalized, so `cdf(m_max) == 1`. Unlike the literal exceedance of
//! [`crate::recurrence`], [`TruncatedGutenbergRichter::survival`] reaches
//! zero at `m_max`.

use gr_core::{Error, Result};

use crate::recurrence::RecurrenceLaw;

/// Normalized magnitude distribution on `[m_min, m_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedGutenbergRichter {
    law: RecurrenceLaw,
    beta: f64,
    /// `1 - exp(-beta (m_max - m_min))`, strictly in `(0, 1]` for a valid law.
    norm: f64,
}

impl TruncatedGutenbergRichter {
    /// Build from validated parameters.
    pub fn new(law: RecurrenceLaw) -> Self {
        let beta = law.beta();
        let norm = -(-beta * (law.m_max() - law.m_min())).exp_m1();
        Self { law, beta, norm }
    }

    /// Underlying recurrence parameters.
    pub fn law(&self) -> &RecurrenceLaw {
        &self.law
    }

    /// `P(M <= m)`.
    pub fn cdf(&self, m: f64) -> f64 {
        if m <= self.law.m_min() {
            return 0.0;
        }
        if m >= self.law.m_max() {
            return 1.0;
        }
        -(-self.beta * (m - self.law.m_min())).exp_m1() / self.norm
    }

    /// `P(M > m)`, the truncated exceedance probability.
    pub fn survival(&self, m: f64) -> f64 {
        1.0 - self.cdf(m)
    }

    /// Log-density; `-inf` outside the support.
    pub fn logpdf(&self, m: f64) -> f64 {
        if m < self.law.m_min() || m > self.law.m_max() {
            return f64::NEG_INFINITY;
        }
        self.beta.ln() - self.beta * (m - self.law.m_min()) - self.norm.ln()
    }

    /// Density; `0` outside the support.
    pub fn pdf(&self, m: f64) -> f64 {
        self.logpdf(m).exp()
    }

    /// Inverse cdf for `u` in `[0, 1]`.
    pub fn quantile(&self, u: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&u) {
            return Err(Error::Validation(format!("quantile level must be in [0, 1], got {u}")));
        }
        let m = self.law.m_min() - (-u * self.norm).ln_1p() / self.beta;
        Ok(m.clamp(self.law.m_min(), self.law.m_max()))
    }

    /// Mean magnitude.
    pub fn mean(&self) -> f64 {
        let span = self.law.m_max() - self.law.m_min();
        self.law.m_min() + 1.0 / self.beta - span * (1.0 - self.norm) / self.norm
    }
}
