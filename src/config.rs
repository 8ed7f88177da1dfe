//! Project configuration loading.
//!
//! Configuration lives at `.anvil/config.yml` under the project root.
//! Commands consult it for business-logic settings only (migration path,
//! default environment); it plays no part in argument parsing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// Migration-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Directory holding migration files, relative to the project root.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub default_env: Option<String>,

    #[serde(default)]
    pub migration: MigrationConfig,

    /// Keys the schema does not model; looked up via [`Config::get_str`].
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Config {
    /// Path of the config file for a project root.
    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(".anvil").join("config.yml")
    }

    /// Load the project config, failing when the file is absent.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path_for(project_root);
        if !path.exists() {
            return Err(ConsoleError::ConfigNotFound { path });
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| ConsoleError::ConfigParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Load the project config, defaulting when the file is absent.
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        match Self::load(project_root) {
            Ok(config) => Ok(config),
            Err(ConsoleError::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Key/default lookup over schema fields and extra keys.
    pub fn get_str(&self, key: &str, default: &str) -> String {
        match key {
            "app_name" => self.app_name.clone(),
            "default_env" => self.default_env.clone(),
            _ => self.extra.get(key).and_then(|v| match v {
                serde_yaml::Value::String(s) => Some(s.clone()),
                serde_yaml::Value::Bool(b) => Some(b.to_string()),
                serde_yaml::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        }
        .unwrap_or_else(|| default.to_string())
    }

    /// Migration directory resolved against the project root.
    pub fn migration_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.migration.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                project_root.join(p)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".anvil");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), content).unwrap();
        temp
    }

    #[test]
    fn load_parses_schema_fields() {
        let temp = write_config("app_name: demo\nmigration:\n  path: migrations\n");
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.app_name.as_deref(), Some("demo"));
        assert_eq!(
            config.migration_path(temp.path()),
            Some(temp.path().join("migrations"))
        );
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(temp.path()).unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(temp.path()).unwrap();
        assert!(config.app_name.is_none());
        assert!(config.migration_path(temp.path()).is_none());
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = write_config("app_name: [unclosed\n");
        let err = Config::load(temp.path()).unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigParseError { .. }));
    }

    #[test]
    fn get_str_falls_back_to_default() {
        let temp = write_config("app_name: demo\nnamespace: app\n");
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.get_str("app_name", "x"), "demo");
        assert_eq!(config.get_str("namespace", "x"), "app");
        assert_eq!(config.get_str("missing", "fallback"), "fallback");
    }

    #[test]
    fn absolute_migration_path_is_kept() {
        let temp = write_config("migration:\n  path: /var/lib/migrations\n");
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(
            config.migration_path(temp.path()),
            Some(PathBuf::from("/var/lib/migrations"))
        );
    }
}
