//! Seeded generator of synthetic fault sources.

use gr_core::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::config::SourceConfig;
use crate::source::{EventType, Mechanism, SeismicSource};

/// Draws [`SeismicSource`]s from a validated [`SourceConfig`].
#[derive(Debug)]
pub struct SourceGenerator {
    config: SourceConfig,
    rng: StdRng,
}

impl SourceGenerator {
    /// Validate `config` and seed from `config.seed` (OS entropy if absent).
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    /// Validate `config` and seed explicitly, ignoring `config.seed`.
    pub fn with_seed(config: SourceConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng: StdRng::seed_from_u64(seed) })
    }

    /// Configuration in use.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Draw one source.
    pub fn generate_source(&mut self) -> SeismicSource {
        let c = &self.config;
        let rng = &mut self.rng;
        SeismicSource {
            m_min: rng.random_range(c.m_min..=c.m_min + 1.0),
            m_max: rng.random_range(c.m_max - 1.0..=c.m_max),
            nu: c.nu,
            lat: uniform(rng, c.lat_range),
            lon: uniform(rng, c.lon_range),
            depth: uniform(rng, c.depth_range),
            dip: uniform(rng, c.dip_range),
            strike: uniform(rng, c.strike_range),
            mechanism: Mechanism::ALL[rng.random_range(0..Mechanism::ALL.len())],
            event_type: EventType::ALL[rng.random_range(0..EventType::ALL.len())],
        }
    }

    /// Draw `num_faults` sources named `"Fault 1"`..`"Fault N"`.
    pub fn generate_all(&mut self) -> Catalog {
        let mut catalog = Catalog::new();
        for i in 1..=self.config.num_faults {
            let source = self.generate_source();
            tracing::debug!(
                fault = i,
                m_min = source.m_min,
                m_max = source.m_max,
                mechanism = ?source.mechanism,
                "generated source"
            );
            catalog.push(format!("Fault {i}"), source);
        }
        catalog
    }
}

fn uniform(rng: &mut StdRng, (lo, hi): (f64, f64)) -> f64 {
    rng.random_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample_config;

    #[test]
    fn test_sources_respect_ranges() {
        let config = sample_config();
        let mut generator = SourceGenerator::new(config.clone()).unwrap();
        let catalog = generator.generate_all();
        assert_eq!(catalog.len(), config.num_faults);

        for (_, s) in catalog.iter() {
            assert!(s.m_min >= config.m_min && s.m_min <= config.m_min + 1.0);
            assert!(s.m_max >= config.m_max - 1.0 && s.m_max <= config.m_max);
            assert!(s.m_min < s.m_max);
            assert!(s.lat >= config.lat_range.0 && s.lat <= config.lat_range.1);
            assert!(s.lon >= config.lon_range.0 && s.lon <= config.lon_range.1);
            assert!(s.depth >= config.depth_range.0 && s.depth <= config.depth_range.1);
            assert!(s.dip >= config.dip_range.0 && s.dip <= config.dip_range.1);
            assert!(s.strike >= config.strike_range.0 && s.strike <= config.strike_range.1);
            assert_eq!(s.nu, config.nu);
            assert!(s.recurrence_law().is_ok());
        }
    }

    #[test]
    fn test_names_are_sequential() {
        let mut generator = SourceGenerator::new(sample_config()).unwrap();
        let catalog = generator.generate_all();
        let names: Vec<&str> = catalog.iter().map(|(n, _)| n).collect();
        assert_eq!(names[0], "Fault 1");
        assert_eq!(names[9], "Fault 10");
        assert_eq!(names[11], "Fault 12");
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = SourceGenerator::with_seed(sample_config(), 7).unwrap().generate_all();
        let b = SourceGenerator::with_seed(sample_config(), 7).unwrap().generate_all();
        let c = SourceGenerator::with_seed(sample_config(), 8).unwrap().generate_all();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = sample_config();
        config.m_max = config.m_min + 1.5;
        assert!(SourceGenerator::new(config).is_err());
    }

    #[test]
    fn test_degenerate_ranges_are_allowed() {
        let mut config = sample_config();
        config.dip_range = (90.0, 90.0);
        let mut generator = SourceGenerator::new(config).unwrap();
        assert_eq!(generator.generate_source().dip, 90.0);
    }
}
