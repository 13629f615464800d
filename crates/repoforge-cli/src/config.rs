//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values derived from
//! it (namespace roots, paths, stub selection).
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` — must exist and parse, otherwise startup fails
//! 2. The default config file location, when present
//! 3. Built-in defaults (always present)
//!
//! `.env` files are loaded by `main` before anything else, so environment
//! variables like `RUST_LOG` and `NO_COLOR` take effect regardless of the
//! config file.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use repoforge_core::domain::NamespaceRoots;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Filesystem layout of the host application.
    pub paths: PathsConfig,
    /// Root namespaces per artifact kind.
    pub namespaces: NamespaceRoots,
    /// Generated-artifact settings.
    pub artifacts: ArtifactsConfig,
    /// External model-generation tool.
    pub model_tool: ModelToolConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root under which artifact namespace directories are created.
    pub app_root: PathBuf,
    /// Directory holding the persisted binding table.
    pub config_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("app"),
            config_root: PathBuf::from("config"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Extension of generated source files, without the dot.
    pub extension: String,
    /// File name of the binding table inside `config_root`.
    pub bindings_file: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            extension: "php".into(),
            bindings_file: "repositories.php".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelToolConfig {
    /// Program to run when the user opts into model creation.
    pub program: String,
    /// Arguments placed before the resource name.
    pub args: Vec<String>,
}

impl Default for ModelToolConfig {
    fn default() -> Self {
        Self {
            program: "php".into(),
            args: vec!["artisan".into(), "make:model".into()],
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` path must be readable; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::config_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.repoforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "repoforge", "repoforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".repoforge.toml"))
    }

    /// Full path of the persisted binding table.
    pub fn bindings_path(&self) -> PathBuf {
        self.paths.config_root.join(&self.artifacts.bindings_file)
    }
}
