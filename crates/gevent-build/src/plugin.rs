//! The resolved plugin build configuration handed to the build driver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Plugin name.
pub const PLUGIN_NAME: &str = "gevent";

/// Source modules compiled into the plugin, in build order.
pub const SOURCE_MODULES: [&str; 2] = ["gevent", "hooks"];

/// Prefix of an include-path compiler flag.
pub const INCLUDE_FLAG_PREFIX: &str = "-I";

/// Build configuration for the gevent plugin.
///
/// Built once by [`crate::resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginBuildConfig {
    name: String,
    compile_flags: Vec<String>,
    link_flags: Vec<String>,
    libraries: Vec<String>,
    source_modules: Vec<String>,
}

impl PluginBuildConfig {
    /// Create the gevent configuration with the given compiler flags.
    pub(crate) fn with_compile_flags(compile_flags: Vec<String>) -> Self {
        Self {
            name: PLUGIN_NAME.to_string(),
            compile_flags,
            link_flags: Vec::new(),
            libraries: Vec::new(),
            source_modules: SOURCE_MODULES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compile_flags(&self) -> &[String] {
        &self.compile_flags
    }

    pub fn link_flags(&self) -> &[String] {
        &self.link_flags
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn source_modules(&self) -> &[String] {
        &self.source_modules
    }

    /// Directories named by `-I` and `-isystem` flags, without duplicates.
    pub fn include_dirs(&self) -> Vec<PathBuf> {
        let args = &self.compile_flags;
        let mut includes: Vec<PathBuf> = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let dir = if (args[i] == INCLUDE_FLAG_PREFIX || args[i] == "-isystem")
                && i + 1 < args.len()
            {
                i += 1;
                Some(PathBuf::from(&args[i]))
            } else {
                args[i]
                    .strip_prefix(INCLUDE_FLAG_PREFIX)
                    .filter(|rest| !rest.is_empty())
                    .map(PathBuf::from)
            };

            if let Some(dir) = dir {
                if !includes.contains(&dir) {
                    includes.push(dir);
                }
            }
            i += 1;
        }

        includes
    }

    /// C source file of each module under `plugin_dir`.
    pub fn source_files(&self, plugin_dir: &Path) -> Vec<PathBuf> {
        self.source_modules
            .iter()
            .map(|m| plugin_dir.join(format!("{}.c", m)))
            .collect()
    }

    /// Object file of each module under `out_dir`.
    pub fn object_files(&self, out_dir: &Path) -> Vec<PathBuf> {
        self.source_modules
            .iter()
            .map(|m| out_dir.join(format!("{}.o", m)))
            .collect()
    }

    /// Render the configuration for a build driver.
    pub fn emit(&self, format: OutputFormat) -> crate::Result<String> {
        match format {
            OutputFormat::Toml => Ok(toml::to_string(self)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Make => Ok(self.to_make_vars()),
        }
    }

    /// uWSGI plugin-variable lines (`NAME`, `CFLAGS`, `LDFLAGS`, `LIBS`, `GCC_LIST`).
    fn to_make_vars(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("NAME={}\n", self.name));
        out.push_str(&format!("CFLAGS={}\n", self.compile_flags.join(" ")));
        out.push_str(&format!("LDFLAGS={}\n", self.link_flags.join(" ")));
        out.push_str(&format!("LIBS={}\n", self.libraries.join(" ")));
        out.push_str(&format!("GCC_LIST={}\n", self.source_modules.join(" ")));
        out
    }
}

/// Output format of [`PluginBuildConfig::emit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Toml,
    Json,
    #[default]
    Make,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Toml => "toml",
            OutputFormat::Json => "json",
            OutputFormat::Make => "make",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(OutputFormat::Toml),
            "json" => Ok(OutputFormat::Json),
            "make" => Ok(OutputFormat::Make),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}
