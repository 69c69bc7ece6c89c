use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::AdapterError;

/// Configuration for the adapter system as a whole, not one adapter.
///
/// Maps each configured adapter name to its option map (insertion order
/// preserved) and records which adapter is the default. The default must be
/// one of the configured adapters; this is checked at construction so later
/// lookups cannot dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    adapters: IndexMap<String, IndexMap<String, String>>,
    default_adapter: String,
}

impl AdapterConfig {
    pub fn new(
        adapters: IndexMap<String, IndexMap<String, String>>,
        default_adapter: &str,
    ) -> Result<Self, AdapterError> {
        if !adapters.contains_key(default_adapter) {
            return Err(AdapterError::UnknownAdapter(default_adapter.to_string()));
        }
        Ok(Self {
            adapters,
            default_adapter: default_adapter.to_string(),
        })
    }

    pub fn is_adapter_configured(&self, adapter: &str) -> bool {
        self.adapters.contains_key(adapter)
    }

    pub fn adapter_options(&self, adapter: &str) -> Result<&IndexMap<String, String>, AdapterError> {
        self.adapters
            .get(adapter)
            .ok_or_else(|| AdapterError::UnknownAdapter(adapter.to_string()))
    }

    pub fn default_adapter(&self) -> &str {
        &self.default_adapter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_adapters() -> IndexMap<String, IndexMap<String, String>> {
        let mut options = IndexMap::new();
        options.insert("quorum".to_string(), "node1,node2".to_string());

        let mut adapters = IndexMap::new();
        adapters.insert("columnar".to_string(), options);
        adapters.insert("memory".to_string(), IndexMap::new());
        adapters
    }

    #[test]
    fn default_adapter_must_be_configured() {
        let config = AdapterConfig::new(sample_adapters(), "columnar").unwrap();
        assert_eq!(config.default_adapter(), "columnar");

        let err = AdapterConfig::new(sample_adapters(), "missing").unwrap_err();
        assert_eq!(err, AdapterError::UnknownAdapter("missing".to_string()));
    }

    #[test]
    fn options_lookup_reports_unknown_adapters() {
        let config = AdapterConfig::new(sample_adapters(), "memory").unwrap();

        assert!(config.is_adapter_configured("columnar"));
        assert!(!config.is_adapter_configured("tape"));

        let options = config.adapter_options("columnar").unwrap();
        assert_eq!(options.get("quorum").map(String::as_str), Some("node1,node2"));

        let err = config.adapter_options("tape").unwrap_err();
        assert_eq!(err.to_string(), "adapter 'tape' is not configured");
    }
}
