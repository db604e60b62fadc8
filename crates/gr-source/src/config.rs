//! Generator configuration, read from JSON.

use gr_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default annual activity rate assigned to every generated source.
pub const DEFAULT_NU: f64 = 0.001;

fn default_nu() -> f64 {
    DEFAULT_NU
}

/// Parameters of a synthetic source catalog.
///
/// Ranges are `[low, high]` pairs and are sampled uniformly. Each source
/// draws its own lower bound from `[m_min, m_min + 1]` and upper bound from
/// `[m_max - 1, m_max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Number of faults to generate
    pub num_faults: usize,

    /// Regional minimum magnitude
    pub m_min: f64,

    /// Regional maximum magnitude
    pub m_max: f64,

    /// Latitude range (degrees)
    pub lat_range: (f64, f64),

    /// Longitude range (degrees)
    pub lon_range: (f64, f64),

    /// Hypocentral depth range (km)
    pub depth_range: (f64, f64),

    /// Fault dip range (degrees)
    pub dip_range: (f64, f64),

    /// Fault strike range (degrees)
    pub strike_range: (f64, f64),

    /// Annual activity rate per source
    #[serde(default = "default_nu")]
    pub nu: f64,

    /// RNG seed; a fresh OS seed is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SourceConfig {
    /// Parse a configuration from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and magnitude bounds.
    pub fn validate(&self) -> Result<()> {
        if self.num_faults == 0 {
            return Err(Error::Validation("num_faults must be > 0".into()));
        }
        if !self.m_min.is_finite() || !self.m_max.is_finite() {
            return Err(Error::Validation(format!(
                "magnitude bounds must be finite, got m_min={}, m_max={}",
                self.m_min, self.m_max
            )));
        }
        if !(self.m_max - self.m_min).is_finite() {
            return Err(Error::Validation(format!(
                "m_max - m_min must be finite, got m_min={}, m_max={}",
                self.m_min, self.m_max
            )));
        }
        // Sampled bounds live in [m_min, m_min+1] and [m_max-1, m_max].
        if self.m_max - self.m_min <= 2.0 {
            return Err(Error::Validation(format!(
                "m_max - m_min must be > 2 so source bounds cannot cross, got m_min={}, m_max={}",
                self.m_min, self.m_max
            )));
        }
        if !self.nu.is_finite() || self.nu <= 0.0 {
            return Err(Error::Validation(format!("nu must be finite and > 0, got {}", self.nu)));
        }
        for (name, range) in [
            ("lat_range", self.lat_range),
            ("lon_range", self.lon_range),
            ("depth_range", self.depth_range),
            ("dip_range", self.dip_range),
            ("strike_range", self.strike_range),
        ] {
            check_range(name, range)?;
        }
        Ok(())
    }
}

fn check_range(name: &str, (lo, hi): (f64, f64)) -> Result<()> {
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(Error::Validation(format!(
            "{name} must be finite with low <= high, got [{lo}, {hi}]"
        )));
    }
    // Uniform sampling needs a representable width.
    if !(hi - lo).is_finite() {
        return Err(Error::Validation(format!(
            "{name} width must be finite, got [{lo}, {hi}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_config() -> SourceConfig {
        SourceConfig {
            num_faults: 12,
            m_min: 4.0,
            m_max: 8.0,
            lat_range: (35.0, 36.5),
            lon_range: (-90.5, -89.0),
            depth_range: (5.0, 20.0),
            dip_range: (30.0, 90.0),
            strike_range: (0.0, 360.0),
            nu: DEFAULT_NU,
            seed: Some(42),
        }
    }

    #[test]
    fn test_sample_config_is_valid() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_defaults_from_json() {
        let json = r#"{
            "num_faults": 3,
            "m_min": 4.0,
            "m_max": 7.5,
            "lat_range": [35.0, 36.0],
            "lon_range": [-90.0, -89.0],
            "depth_range": [5.0, 15.0],
            "dip_range": [45.0, 90.0],
            "strike_range": [0.0, 180.0]
        }"#;
        let c: SourceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c.nu, DEFAULT_NU);
        assert_eq!(c.seed, None);
        assert_eq!(c.lat_range, (35.0, 36.0));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_configs() {
        let mut c = sample_config();
        c.num_faults = 0;
        assert!(c.validate().is_err());

        let mut c = sample_config();
        c.m_max = 6.0;
        assert!(c.validate().is_err());

        let mut c = sample_config();
        c.depth_range = (20.0, 5.0);
        assert!(c.validate().is_err());

        let mut c = sample_config();
        c.lat_range = (f64::NAN, 1.0);
        assert!(c.validate().is_err());

        let mut c = sample_config();
        c.nu = 0.0;
        assert!(c.validate().is_err());

        let mut c = sample_config();
        c.m_min = -1e308;
        c.m_max = 1e308;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_range_with_overflowing_width() {
        let mut c = sample_config();
        c.strike_range = (-1e308, 1e308);
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("strike_range width must be finite"), "{err}");
        assert!(crate::generator::SourceGenerator::new(c).is_err());
    }
}
