use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub mining: MiningConfig,
    pub binding: BindingConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Bullet lines with less content than this are dropped as noise.
    pub min_content_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Suffixes appended to a document stem when matching a source binding,
    /// so a rule bound to "uk.xml" also matches a document named "uk".
    pub accepted_suffixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub name: String,
    pub url: String,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_content_length: 15,
        }
    }
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            accepted_suffixes: vec![".xml".to_string()],
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: "xmltv-merge".to_string(),
            url: "https://github.com/alvarocandela/xmltv-merge".to_string(),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            mining: MiningConfig::default(),
            binding: BindingConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl MergeConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MergeConfig::default();
        assert_eq!(config.mining.min_content_length, 15);
        assert_eq!(config.binding.accepted_suffixes, vec![".xml".to_string()]);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: MergeConfig = toml::from_str(
            r#"
            [mining]
            min_content_length = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.mining.min_content_length, 20);
        assert_eq!(config.binding.accepted_suffixes, vec![".xml".to_string()]);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = MergeConfig::load("/nonexistent/xmltv-merge.toml").unwrap();
        assert_eq!(config.mining.min_content_length, 15);
    }
}
