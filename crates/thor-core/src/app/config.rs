//! Dispatch configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Knobs for usage rendering and failure classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Namespace prefixes stripped when rendering usage, first match wins.
    pub reserved_prefixes: Vec<String>,

    /// Frames under this directory are the framework's own and are ignored
    /// when deciding where a failure came from.
    pub framework_dir: String,
}

impl DispatchConfig {
    /// Source directory of this crate, in the same form `Location::file()`
    /// reports it.
    pub fn default_framework_dir() -> String {
        Path::new(file!())
            .parent()
            .and_then(Path::parent)
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            reserved_prefixes: vec!["default".to_string(), "thor:runner:".to_string()],
            framework_dir: Self::default_framework_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_dir_is_crate_src() {
        let dir = DispatchConfig::default_framework_dir();
        assert!(dir.ends_with("src"), "unexpected framework dir: {dir}");
        assert!(file!().starts_with(&dir));
    }

    #[test]
    fn config_without_fields_then_get_defaults() {
        let json = r#"{ "reserved_prefixes": ["default"] }"#;
        let config: DispatchConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.reserved_prefixes, vec!["default".to_string()]);
        assert_eq!(config.framework_dir, DispatchConfig::default_framework_dir());
    }
}
