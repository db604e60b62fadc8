//! Ordered collections of named sources.
//!
//! Serialized as a JSON object `{"Fault 1": {...}, "Fault 2": {...}}` whose
//! key order is the insertion order (so `"Fault 10"` follows `"Fault 9"`).

use std::fmt;
use std::path::Path;

use gr_core::Result;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::source::SeismicSource;

/// Named seismic sources in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sources: Vec<(String, SeismicSource)>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source. Names are not deduplicated.
    pub fn push(&mut self, name: impl Into<String>, source: SeismicSource) {
        self.sources.push((name.into(), source));
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// `true` when the catalog has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// First source with `name`.
    pub fn get(&self, name: &str) -> Option<&SeismicSource> {
        self.sources.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Iterate `(name, source)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeismicSource)> + '_ {
        self.sources.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Total annual rate of events above `m` summed over all sources.
    pub fn exceedance_rate(&self, m: f64) -> Result<f64> {
        self.sources.iter().map(|(_, s)| s.exceedance_rate(m)).sum()
    }

    /// Write the catalog as pretty JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::info!(path = %path.display(), sources = self.len(), "catalog written");
        Ok(())
    }

    /// Read a catalog written by [`Catalog::save_json`].
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.sources.iter().map(|(n, s)| (n, s)))
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of source name to seismic source")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Catalog, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, source)) = map.next_entry::<String, SeismicSource>()? {
                    catalog.push(name, source);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
