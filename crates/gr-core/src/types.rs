//! Common data types for grlaw

use serde::{Deserialize, Serialize};

/// Recurrence law evaluated over a magnitude sequence.
///
/// `probability[i]` and `pdf[i]` correspond to `magnitudes[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceCurve {
    /// Input magnitudes, in caller order
    pub magnitudes: Vec<f64>,

    /// Exceedance probability `10^(-b (m - m_min))`
    pub probability: Vec<f64>,

    /// Probability density, normalized over `[m_min, m_max]`
    pub pdf: Vec<f64>,

    /// Lower truncation magnitude
    pub m_min: f64,

    /// Upper truncation magnitude
    pub m_max: f64,

    /// Gutenberg-Richter b-value
    pub b_value: f64,
}

impl RecurrenceCurve {
    /// Number of evaluated magnitudes.
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// `true` when no magnitudes were evaluated.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Iterate `(magnitude, probability, pdf)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.magnitudes
            .iter()
            .zip(&self.probability)
            .zip(&self.pdf)
            .map(|((&m, &p), &d)| (m, p, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecurrenceCurve {
        RecurrenceCurve {
            magnitudes: vec![4.0, 5.0],
            probability: vec![1.0, 0.1],
            pdf: vec![2.3, 0.23],
            m_min: 4.0,
            m_max: 7.0,
            b_value: 1.0,
        }
    }

    #[test]
    fn test_iter_alignment() {
        let c = sample();
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        let triples: Vec<_> = c.iter().collect();
        assert_eq!(triples, vec![(4.0, 1.0, 2.3), (5.0, 0.1, 0.23)]);
    }

    #[test]
    fn test_json_field_names() {
        let v = serde_json::to_value(sample()).unwrap();
        for key in ["magnitudes", "probability", "pdf", "m_min", "m_max", "b_value"] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
    }
}
