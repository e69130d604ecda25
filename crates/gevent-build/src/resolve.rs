//! Computing the plugin build configuration.

use crate::command::split_output_of;
use crate::config::ResolverConfig;
use crate::plugin::{PluginBuildConfig, INCLUDE_FLAG_PREFIX};
use crate::sysconfig::query_python_includes;
use crate::Result;

/// Argument asking a `python-config` style helper for include flags.
pub const INCLUDES_ARG: &str = "--includes";

/// Resolve the gevent plugin build configuration.
///
/// With a helper configured, its `--includes` output becomes the compiler
/// flags verbatim. Otherwise the interpreter's generic and platform include
/// directories are turned into `-I` flags. Spawns at most one process.
pub fn resolve(config: &ResolverConfig) -> Result<PluginBuildConfig> {
    let compile_flags = match config.python_config() {
        Some(helper) => {
            log::info!("Reading include flags from {}", helper.display());
            split_output_of(helper, &[INCLUDES_ARG])?
        }
        None => {
            let python = config.interpreter();
            log::info!("Querying include directories of {}", python.display());
            let includes = query_python_includes(python)?;
            includes
                .dirs()
                .iter()
                .map(|dir| format!("{}{}", INCLUDE_FLAG_PREFIX, dir.display()))
                .collect()
        }
    };

    log::debug!("Compile flags: {:?}", compile_flags);
    Ok(PluginBuildConfig::with_compile_flags(compile_flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuildError;

    #[test]
    fn test_missing_helper_fails() {
        let config = ResolverConfig::new().with_python_config("/nonexistent/python3-config");

        match resolve(&config) {
            Err(BuildError::CommandFailed { command }) => {
                assert_eq!(command, "/nonexistent/python3-config --includes");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_helper_takes_precedence_over_interpreter() {
        // A broken interpreter is never consulted when a helper is set.
        let config = ResolverConfig::new()
            .with_interpreter("/nonexistent/python3")
            .with_python_config("/nonexistent/python3-config");

        let err = resolve(&config).unwrap_err();
        assert!(err.to_string().contains("python3-config --includes"));
    }
}
