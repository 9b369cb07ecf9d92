//! Configuration for the Expense MCP server

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "EXPENSE_CONFIG_PATH";

/// Expense MCP configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseConfig {
    /// Database connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Static resources served by the server
    #[serde(default)]
    pub resources: ResourceConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (`~/` is expanded, `:memory:` is allowed)
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    /// How long a statement waits on a locked database, in seconds
    /// Default: 30
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_secs: u64,
}

/// Resource file locations
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    /// JSON document served as `expense://categories`
    #[serde(default = "default_categories_path")]
    pub categories_path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("~/.binks/expenses.db")
}

fn default_busy_timeout() -> u64 {
    30
}

fn default_categories_path() -> PathBuf {
    PathBuf::from("category.json")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_secs: default_busy_timeout(),
        }
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            categories_path: default_categories_path(),
        }
    }
}

impl ExpenseConfig {
    /// Load configuration from file
    ///
    /// Looks for config in:
    /// 1. `EXPENSE_CONFIG_PATH` environment variable
    /// 2. `~/.binks/expense.toml`
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            PathBuf::from(path)
        } else {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".binks")
                .join("expense.toml")
        };

        if !config_path.exists() {
            tracing::warn!(
                "No config found at {:?}. Using defaults.",
                config_path
            );
            return Ok(Self::default());
        }

        Self::from_file(&config_path)
    }

    /// Parse configuration from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Config pointing at a specific database and category document
    pub fn with_paths(db_path: PathBuf, categories_path: PathBuf) -> Self {
        Self {
            database: DatabaseConfig {
                path: db_path,
                busy_timeout_secs: default_busy_timeout(),
            },
            resources: ResourceConfig { categories_path },
        }
    }

    /// Database path with a leading `~/` expanded to the home directory
    pub fn database_path(&self) -> PathBuf {
        expand_home(&self.database.path)
    }

    /// Category document path with a leading `~/` expanded
    pub fn categories_path(&self) -> PathBuf {
        expand_home(&self.resources.categories_path)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
