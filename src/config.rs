use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Category;
use crate::ui::theme::{Theme, ThemeOverrides};

#[derive(Embed)]
#[folder = "assets/"]
struct CatalogAssets;

const DEFAULT_CATALOG_FILE: &str = "default_shortcuts.yaml";
const APP_DIR: &str = "shortcuts-tui";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("group '{group}' is defined more than once in category '{category}'")]
    DuplicateGroup { category: String, group: String },
}

/// Where the running config came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Builtin => f.write_str("built-in catalog"),
        }
    }
}

/// Config file as written on disk; absent sections fall back to the built-in values.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    theme: Option<ThemeOverrides>,
    #[serde(default)]
    categories: Option<Vec<Category>>,
}

impl RawConfig {
    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Option<RawConfig> =
            serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(raw.unwrap_or_default())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub categories: Vec<Category>,
}

impl Config {
    /// Raw YAML of the embedded default catalog.
    pub fn builtin_yaml() -> Option<String> {
        let file = CatalogAssets::get(DEFAULT_CATALOG_FILE)?;
        std::str::from_utf8(file.data.as_ref())
            .ok()
            .map(str::to_string)
    }

    pub fn builtin() -> Self {
        let parsed = Self::builtin_yaml()
            .map(|text| RawConfig::parse(&text, Path::new(DEFAULT_CATALOG_FILE)));
        let categories = match parsed {
            Some(Ok(raw)) => raw.categories.unwrap_or_default(),
            Some(Err(err)) => {
                tracing::error!(error = %err, "built-in catalog is malformed");
                Vec::new()
            }
            None => {
                tracing::error!("built-in catalog asset is missing");
                Vec::new()
            }
        };
        Self {
            theme: Theme::default(),
            categories,
        }
    }

    /// Parse a user config and merge it over the built-in catalog.
    ///
    /// The theme is resolved slot by slot; `categories`, when present, replace the
    /// built-in ones wholesale.
    pub fn from_yaml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw = RawConfig::parse(text, path)?;
        let theme = raw
            .theme
            .unwrap_or_default()
            .resolve(&Theme::default());
        let categories = match raw.categories {
            Some(categories) => categories,
            None => Self::builtin().categories,
        };
        validate(&categories)?;
        Ok(Self { theme, categories })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text, path)
    }

    /// Load the first existing file among `candidates`.
    ///
    /// A missing file list, an unreadable file, or an invalid file all yield the
    /// built-in catalog; errors are logged and never returned.
    pub fn load(candidates: &[PathBuf]) -> (Self, ConfigSource) {
        let Some(path) = candidates.iter().find(|p| p.is_file()) else {
            tracing::info!("no config file found, using built-in catalog");
            return (Self::builtin(), ConfigSource::Builtin);
        };

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    categories = config.categories.len(),
                    "loaded config"
                );
                (config, ConfigSource::File(path.clone()))
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to load config, using built-in catalog");
                (Self::builtin(), ConfigSource::Builtin)
            }
        }
    }

    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Default lookup order for the user config file.
pub fn candidate_paths() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };
    let config_dir = home.join(".config").join(APP_DIR);
    vec![
        config_dir.join("shortcuts.yaml"),
        config_dir.join("shortcuts.yml"),
        home.join(format!(".{APP_DIR}.yaml")),
        home.join(format!(".{APP_DIR}.yml")),
    ]
}

pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
}

fn validate(categories: &[Category]) -> Result<(), ConfigError> {
    let mut category_names = HashSet::new();
    for category in categories {
        if !category_names.insert(category.name.as_str()) {
            return Err(ConfigError::DuplicateCategory(category.name.clone()));
        }
        let mut group_names = HashSet::new();
        for group in &category.groups {
            if !group_names.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateGroup {
                    category: category.name.clone(),
                    group: group.name.clone(),
                });
            }
        }
    }
    Ok(())
}
