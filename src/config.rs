//! Configuration for the vidrecap client.
//!
//! Settings come from the command line (`arrrg`), an optional YAML file, the
//! `VIDRECAP_BASE_URL` environment variable and built-in defaults, in that
//! order of precedence.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use arrrg_derive::CommandLine;
use serde::Deserialize;

use crate::client::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, Vidrecap};
use crate::error::{Error, Result};

/// Command-line arguments for the vidrecap-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ClientArgs {
    /// Base URL of the summarization service.
    #[arrrg(optional, "Service base URL (default: http://localhost:8000/)", "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 60)", "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Path to a YAML configuration file.
    #[arrrg(optional, "YAML configuration file", "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// The keys accepted in a configuration file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the summarization service.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Disable ANSI colors and styles.
    #[serde(default)]
    pub no_color: Option<bool>,
}

impl ConfigFile {
    /// Parses a configuration file from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("cannot read config file {}", path.display()), e)
        })?;
        Self::from_yaml(&yaml)
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the summarization service.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ClientConfig {
    /// Creates a new ClientConfig with default values.
    ///
    /// Defaults:
    /// - Base URL: http://localhost:8000/
    /// - Timeout: 60 seconds
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            use_color: true,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Resolves the configuration for `args`, reading the config file it
    /// names and the environment.
    pub fn load(args: &ClientArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => Some(ConfigFile::read(path)?),
            None => None,
        };
        Ok(Self::resolve(args, file, env::var(BASE_URL_ENV).ok()))
    }

    /// Merges the sources, highest precedence first: `args`, `file`,
    /// `env_base_url`, then the defaults.
    pub fn resolve(
        args: &ClientArgs,
        file: Option<ConfigFile>,
        env_base_url: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::new();
        let base_url = args
            .base_url
            .clone()
            .or(file.base_url)
            .or(env_base_url)
            .unwrap_or(defaults.base_url);
        let timeout = args
            .timeout_secs
            .or(file.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let no_color = args.no_color || file.no_color.unwrap_or(false);
        Self {
            base_url,
            timeout,
            use_color: !no_color,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Vidrecap {
    /// Create a client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_options(Some(config.base_url.clone()), Some(config.timeout))
    }
}
