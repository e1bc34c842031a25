use serde::{Deserialize, Serialize};

/// Storage ceiling used when nothing else is configured
pub const DEFAULT_STORAGE_CAPACITY: usize = 256;

/// Environment override for [`ProcessorConfig::storage_capacity`]
pub const STORAGE_CAPACITY_ENV: &str = "BOUQUET_STORAGE_CAPACITY";

/// What to do with a line that does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Log a warning and continue with the next line
    #[default]
    Skip,

    /// Stop the run with an error
    Abort,
}

/// Configuration for a stream run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Maximum number of arrival records a run may accept
    pub storage_capacity: usize,

    /// Policy for unparseable specification lines
    pub on_malformed_spec: MalformedPolicy,

    /// Policy for unparseable arrival lines
    pub on_malformed_arrival: MalformedPolicy,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            storage_capacity: DEFAULT_STORAGE_CAPACITY,
            on_malformed_spec: MalformedPolicy::Skip,
            on_malformed_arrival: MalformedPolicy::Skip,
        }
    }
}

impl ProcessorConfig {
    /// Reject every malformed line
    #[must_use]
    pub fn strict() -> Self {
        Self {
            on_malformed_spec: MalformedPolicy::Abort,
            on_malformed_arrival: MalformedPolicy::Abort,
            ..Default::default()
        }
    }

    /// Apply `BOUQUET_STORAGE_CAPACITY` when it holds a usable value
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        let raw = std::env::var(STORAGE_CAPACITY_ENV).ok();
        self.storage_capacity = parse_storage_capacity(raw.as_deref(), self.storage_capacity);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage_capacity == 0 {
            return Err("storage_capacity must be > 0".to_string());
        }
        Ok(())
    }
}

fn parse_storage_capacity(raw: Option<&str>, default_value: usize) -> usize {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = ProcessorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_capacity, 256);
        assert_eq!(config.on_malformed_arrival, MalformedPolicy::Skip);
    }

    #[test]
    fn test_strict_preset() {
        let config = ProcessorConfig::strict();
        assert!(config.validate().is_ok());
        assert_eq!(config.on_malformed_spec, MalformedPolicy::Abort);
        assert_eq!(config.on_malformed_arrival, MalformedPolicy::Abort);
        assert_eq!(config.storage_capacity, DEFAULT_STORAGE_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_invalid() {
        let config = ProcessorConfig {
            storage_capacity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_storage_capacity() {
        assert_eq!(parse_storage_capacity(None, 256), 256);
        assert_eq!(parse_storage_capacity(Some(""), 256), 256);
        assert_eq!(parse_storage_capacity(Some("  12 "), 256), 12);
        assert_eq!(parse_storage_capacity(Some("0"), 256), 256);
        assert_eq!(parse_storage_capacity(Some("lots"), 256), 256);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ProcessorConfig = toml::from_str("on_malformed_spec = \"abort\"").unwrap();
        assert_eq!(config.on_malformed_spec, MalformedPolicy::Abort);
        assert_eq!(config.storage_capacity, DEFAULT_STORAGE_CAPACITY);
    }
}
