use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ModelError, Result};

const DEFAULT_CAPACITY_HINT: usize = 256;
const MAX_CAPACITY_HINT: usize = 65_536;

/// Tuning for [`ProcessModel`](crate::ProcessModel)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    /// Rows reserved up front and after every clear
    pub capacity_hint: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }
}

/// File-based configuration (TOML)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    model: ModelSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ModelSection {
    capacity_hint: usize,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }
}

impl ModelConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file_config: FileConfig = toml::from_str(content)?;
        Ok(Self {
            capacity_hint: normalize_capacity_hint(file_config.model.capacity_hint),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ModelError::config_not_found(path.to_path_buf()),
            _ => ModelError::Io(err),
        })?;
        Self::from_toml_str(&content).map_err(|err| match err {
            ModelError::Config { message } => ModelError::config_invalid(path.to_path_buf(), message),
            other => other,
        })
    }

    /// Loads the per-user file, falling back to defaults when it is absent.
    pub fn load_default() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        match Self::load(&path) {
            Err(ModelError::ConfigNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("process-model").join("config.toml"))
    }
}

fn normalize_capacity_hint(value: usize) -> usize {
    value.min(MAX_CAPACITY_HINT)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn normalize_capacity_hint_clamps_to_max() {
        assert_eq!(normalize_capacity_hint(0), 0);
        assert_eq!(normalize_capacity_hint(MAX_CAPACITY_HINT), MAX_CAPACITY_HINT);
        assert_eq!(normalize_capacity_hint(usize::MAX), MAX_CAPACITY_HINT);
    }

    #[test]
    fn file_config_defaults() {
        let config = ModelConfig::from_toml_str("").unwrap();
        assert_eq!(config, ModelConfig::default());
        assert_eq!(config.capacity_hint, DEFAULT_CAPACITY_HINT);
    }

    #[test]
    fn file_config_partial() {
        let config = ModelConfig::from_toml_str(
            r#"
            [model]
            capacity_hint = 1024
            "#,
        )
        .unwrap();
        assert_eq!(config.capacity_hint, 1024);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[model]\ncapacity_hint = 32").unwrap();
        let config = ModelConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity_hint, 32);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ModelConfig::load(&path).unwrap_err();
        assert!(matches!(err, ModelError::ConfigNotFound { path: ref p } if p == &path));
    }

    #[test]
    fn load_reports_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[model]\ncapacity_hint = \"lots\"").unwrap();
        let err = ModelConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::ConfigInvalid { .. }));
    }
}
