use chrono::Local;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::DigestError;

pub static CONFIG: Lazy<Config> = Lazy::new(|| Config::load(None));

/// Keyword accepted in `target_date` that resolves to the local calendar date.
pub const TODAY_KEYWORD: &str = "today";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HostAlias {
    pub from: String,
    pub to: String,
}

impl HostAlias {
    pub fn new(from: &str, to: &str) -> Self {
        HostAlias {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_target_date")]
    pub target_date: String,

    #[serde(default = "default_top_urls")]
    pub top_urls: usize,

    #[serde(default = "default_top_types")]
    pub top_types: usize,

    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    #[serde(default = "default_host_aliases")]
    pub host_aliases: Vec<HostAlias>,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("logs.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("today_recent.json")
}

fn default_target_date() -> String {
    "2026-02-23".to_string()
}

fn default_top_urls() -> usize {
    20
}

fn default_top_types() -> usize {
    15
}

fn default_recent_limit() -> usize {
    200
}

fn default_host_aliases() -> Vec<HostAlias> {
    vec![
        HostAlias::new("secure.helpscout.net", "HelpScout"),
        HostAlias::new("maestro.smyleteam.com", "Maestro CRM"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: default_input_path(),
            output_path: default_output_path(),
            target_date: default_target_date(),
            top_urls: default_top_urls(),
            top_types: default_top_types(),
            recent_limit: default_recent_limit(),
            host_aliases: default_host_aliases(),
        }
    }
}

impl Config {
    pub fn parse(content: &str, origin: &Path) -> Result<Self, DigestError> {
        toml::from_str(content).map_err(|source| DigestError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DigestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DigestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Tries `config_path` first, then the default locations. A missing file is
    /// skipped silently; a broken one is logged and skipped.
    pub fn load(config_path: Option<&str>) -> Self {
        let default_paths = vec!["activity_digest.toml", "/etc/activity_digest/config.toml"];

        let paths: Vec<&str> = config_path.into_iter().chain(default_paths).collect();

        for path in paths {
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("config loaded from {}", path);
                    return config;
                }
                Err(DigestError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    continue;
                }
                Err(err) => {
                    tracing::warn!("{} failed to load: {}", path, err);
                }
            }
        }

        tracing::debug!("falling back to default config");
        Config::default()
    }

    /// The date prefix entries are matched against, with `today` resolved.
    pub fn resolved_target_date(&self) -> String {
        if self.target_date.eq_ignore_ascii_case(TODAY_KEYWORD) {
            Local::now().format("%Y-%m-%d").to_string()
        } else {
            self.target_date.clone()
        }
    }
}
