//! Build configuration for the uWSGI gevent plugin.
//!
//! This crate provides:
//! - Include-flag discovery, either from a `python-config` style helper
//!   or from the local interpreter's sysconfig paths
//! - The resolved plugin configuration (name, flags, source modules)
//! - Rendering that configuration for a build driver
//!
//! # Example
//!
//! ```toml
//! # gevent-build.toml
//! [python]
//! config = "/usr/bin/python3-config"
//! interpreter = "python3"
//! ```

mod command;
mod config;
mod error;
mod plugin;
mod resolve;
mod sysconfig;

pub use command::split_output_of;
pub use config::{PythonConfig, ResolverConfig, DEFAULT_PYTHON, PYTHON_CONFIG_ENV};
pub use error::{BuildError, Result};
pub use plugin::{
    OutputFormat, PluginBuildConfig, INCLUDE_FLAG_PREFIX, PLUGIN_NAME, SOURCE_MODULES,
};
pub use resolve::{resolve, INCLUDES_ARG};
pub use sysconfig::{query_python_includes, PythonIncludes};
