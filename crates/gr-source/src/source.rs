//! Seismic source records.

use gr_core::Result;
use gr_prob::RecurrenceLaw;
use serde::{Deserialize, Serialize};

/// Focal mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mechanism {
    /// Strike-slip
    #[serde(rename = "SS")]
    StrikeSlip,
    /// Normal
    #[serde(rename = "NS")]
    Normal,
    /// Reverse
    #[serde(rename = "RS")]
    Reverse,
}

impl Mechanism {
    /// All mechanisms, in sampling order.
    pub const ALL: [Mechanism; 3] = [Mechanism::StrikeSlip, Mechanism::Normal, Mechanism::Reverse];
}

/// Tectonic setting of the rupture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Subduction interface
    Interface,
    /// Intraslab
    Intraslab,
}

impl EventType {
    /// All event types, in sampling order.
    pub const ALL: [EventType; 2] = [EventType::Interface, EventType::Intraslab];
}

/// A single fault source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeismicSource {
    /// Minimum magnitude of this source
    #[serde(rename = "M_min")]
    pub m_min: f64,

    /// Maximum magnitude of this source
    #[serde(rename = "M_max")]
    pub m_max: f64,

    /// Annual activity rate (events/year with magnitude >= `m_min`)
    pub nu: f64,

    /// Latitude (degrees)
    pub lat: f64,

    /// Longitude (degrees)
    pub lon: f64,

    /// Depth (km)
    pub depth: f64,

    /// Dip (degrees)
    pub dip: f64,

    /// Strike (degrees)
    pub strike: f64,

    /// Focal mechanism
    pub mechanism: Mechanism,

    /// Tectonic setting
    pub event_type: EventType,
}

impl SeismicSource {
    /// Recurrence law bounded by this source's magnitudes, reference b-value.
    pub fn recurrence_law(&self) -> Result<RecurrenceLaw> {
        RecurrenceLaw::new(self.m_min, self.m_max)
    }

    /// Annual rate of events with magnitude above `m`.
    ///
    /// `nu` times the truncated survival, so the rate is `nu` at `m_min`
    /// and zero at or above `m_max`.
    pub fn exceedance_rate(&self, m: f64) -> Result<f64> {
        Ok(self.nu * self.recurrence_law()?.truncated().survival(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn source() -> SeismicSource {
        SeismicSource {
            m_min: 4.5,
            m_max: 7.5,
            nu: 0.001,
            lat: 35.1,
            lon: -90.0,
            depth: 10.0,
            dip: 60.0,
            strike: 120.0,
            mechanism: Mechanism::Reverse,
            event_type: EventType::Intraslab,
        }
    }

    #[test]
    fn test_json_names() {
        let v = serde_json::to_value(source()).unwrap();
        assert_eq!(v["M_min"].as_f64().unwrap(), 4.5);
        assert_eq!(v["M_max"].as_f64().unwrap(), 7.5);
        assert_eq!(v["mechanism"].as_str().unwrap(), "RS");
        assert_eq!(v["event_type"].as_str().unwrap(), "intraslab");

        let back: SeismicSource = serde_json::from_value(v).unwrap();
        assert_eq!(back, source());
    }

    #[test]
    fn test_exceedance_rate_limits() {
        let s = source();
        assert_relative_eq!(s.exceedance_rate(4.5).unwrap(), 0.001, epsilon = 1e-15);
        assert_eq!(s.exceedance_rate(7.5).unwrap(), 0.0);
        let mid = s.exceedance_rate(5.5).unwrap();
        assert!(mid > 0.0 && mid < 0.001);
    }

    #[test]
    fn test_degenerate_source_is_rejected() {
        let mut s = source();
        s.m_max = s.m_min;
        assert!(s.recurrence_law().is_err());
        assert!(s.exceedance_rate(5.0).is_err());
    }
}
