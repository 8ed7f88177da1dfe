//! Migration ledger persistence.
//!
//! The ledger records which migration files have been applied, in order,
//! at `.anvil/state.json` under the project root. The migrate command
//! appends entries; rollback removes the most recent one.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// A single applied migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedMigration {
    /// File name of the migration.
    pub migration: String,

    /// When it was applied.
    pub applied_at: DateTime<Utc>,
}

/// Persistent record of applied migrations (most recent last).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Schema version for future migration of the ledger itself.
    pub version: u32,

    #[serde(default)]
    pub applied: Vec<AppliedMigration>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            version: Self::VERSION,
            applied: Vec::new(),
        }
    }
}

impl Ledger {
    pub const VERSION: u32 = 1;

    /// Path of the ledger file for a project root.
    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(".anvil").join("state.json")
    }

    /// Load the ledger, starting empty when the file is absent.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path_for(project_root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| ConsoleError::ConfigParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Persist the ledger, creating `.anvil/` as needed.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path_for(project_root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConsoleError::execution_failed(format!("failed to encode ledger: {e}")))?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Whether a migration file name has been applied.
    pub fn is_applied(&self, migration: &str) -> bool {
        self.applied.iter().any(|m| m.migration == migration)
    }

    /// Record a migration as applied now.
    pub fn record(&mut self, migration: impl Into<String>) {
        self.applied.push(AppliedMigration {
            migration: migration.into(),
            applied_at: Utc::now(),
        });
    }

    /// Remove and return the most recently applied migration.
    pub fn rollback(&mut self) -> Option<AppliedMigration> {
        self.applied.pop()
    }

    /// The most recently applied migration, if any.
    pub fn last(&self) -> Option<&AppliedMigration> {
        self.applied.last()
    }
}
