//! Resolver inputs (`gevent-build.toml` format).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Interpreter used when no helper executable is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Environment variable naming the `python-config` style helper.
///
/// The library never reads it; front ends map it onto
/// [`ResolverConfig::python_config`].
pub const PYTHON_CONFIG_ENV: &str = "UWSGICONFIG_PYTHONCONFIG";

/// Inputs to [`crate::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Python settings.
    #[serde(default)]
    pub python: PythonConfig,
}

/// Where include flags come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonConfig {
    /// Helper executable invoked as `<config> --includes`.
    #[serde(default)]
    pub config: Option<PathBuf>,

    /// Interpreter queried for its include directories when `config` is unset.
    #[serde(default = "default_interpreter")]
    pub interpreter: PathBuf,
}

fn default_interpreter() -> PathBuf {
    PathBuf::from(DEFAULT_PYTHON)
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            config: None,
            interpreter: default_interpreter(),
        }
    }
}

impl ResolverConfig {
    /// Create a config that queries the default interpreter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: ResolverConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Use a helper executable for include flags.
    pub fn with_python_config(mut self, helper: impl Into<PathBuf>) -> Self {
        self.python.config = Some(helper.into());
        self
    }

    /// Query a different interpreter.
    pub fn with_interpreter(mut self, python: impl Into<PathBuf>) -> Self {
        self.python.interpreter = python.into();
        self
    }

    /// The helper executable, if one is configured.
    ///
    /// An empty path counts as unset, matching how an empty environment
    /// variable is treated.
    pub fn python_config(&self) -> Option<&Path> {
        self.python
            .config
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// The interpreter to query.
    pub fn interpreter(&self) -> &Path {
        &self.python.interpreter
    }
}
