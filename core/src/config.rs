//! Runtime configuration: defaults, `config.toml` under the folio home, and
//! command-line overrides, applied in that order.

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::projects::DEFAULT_LISTING_BASE_URL;

/// Environment variable overriding the folio home directory.
pub const FOLIO_HOME_ENV: &str = "FOLIO_HOME";

/// GitHub account shown when neither config nor CLI names one.
const DEFAULT_GITHUB_USER: &str = "salarsalarsalar";

/// Fraction of a section that must be visible before it reveals.
const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

/// Gallery slots when the config does not size the gallery.
const DEFAULT_GALLERY_COUNT: u32 = 12;

/// Fully resolved configuration handed to the frontend.
#[derive(Debug, Clone)]
pub struct Config {
    pub folio_home: PathBuf,
    pub github_user: String,
    pub listing_base_url: String,
    pub reveal_threshold: f32,
    pub gallery_dir: PathBuf,
    pub gallery_count: u32,
}

/// On-disk schema of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigToml {
    pub github_user: Option<String>,
    pub listing_base_url: Option<String>,
    pub reveal_threshold: Option<f32>,
    #[serde(default)]
    pub gallery: GalleryToml,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryToml {
    pub dir: Option<PathBuf>,
    pub count: Option<u32>,
}

/// Values carried in from the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub github_user: Option<String>,
    pub reveal_threshold: Option<f32>,
    pub gallery_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Resolve the effective configuration for `folio_home`.
    ///
    /// A missing `config.toml` is not an error; an unreadable or malformed
    /// one is.
    pub fn load(folio_home: PathBuf, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let file = read_config_toml(&folio_home)?;
        Ok(Self::assemble(folio_home, file, overrides))
    }

    fn assemble(folio_home: PathBuf, file: ConfigToml, overrides: ConfigOverrides) -> Self {
        let github_user = overrides
            .github_user
            .or(file.github_user)
            .unwrap_or_else(|| DEFAULT_GITHUB_USER.to_string());
        let listing_base_url = file
            .listing_base_url
            .unwrap_or_else(|| DEFAULT_LISTING_BASE_URL.to_string());
        let reveal_threshold = overrides
            .reveal_threshold
            .or(file.reveal_threshold)
            .unwrap_or(DEFAULT_REVEAL_THRESHOLD)
            .clamp(0.0, 1.0);
        let gallery_dir = overrides
            .gallery_dir
            .or(file.gallery.dir)
            .unwrap_or_else(|| folio_home.join("gallery"));
        let gallery_count = file.gallery.count.unwrap_or(DEFAULT_GALLERY_COUNT);

        Self {
            folio_home,
            github_user,
            listing_base_url,
            reveal_threshold,
            gallery_dir,
            gallery_count,
        }
    }
}

fn read_config_toml(folio_home: &Path) -> Result<ConfigToml, ConfigError> {
    let path = folio_home.join("config.toml");
    if !path.exists() {
        return Ok(ConfigToml::default());
    }
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

/// Locate the folio home: `$FOLIO_HOME` if set, else `~/.folio`, else the
/// current directory.
pub fn find_folio_home() -> PathBuf {
    if let Some(home) = std::env::var_os(FOLIO_HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .map(|home| home.join(".folio"))
        .unwrap_or_else(|| PathBuf::from("."))
}
