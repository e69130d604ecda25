//! Include directories reported by a local Python installation.

use crate::command::{command_line, output_as};
use crate::{BuildError, Result};
use std::path::{Path, PathBuf};

/// Prints the generic and the platform-specific include directory,
/// one per line.
const INCLUDES_SCRIPT: &str = "import sysconfig\n\
print(sysconfig.get_path('include'))\n\
print(sysconfig.get_path('platinclude'))";

/// Include directories of a Python installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonIncludes {
    /// Headers shared by every platform (`Python.h`).
    pub generic: PathBuf,
    /// Platform-specific headers (`pyconfig.h`).
    pub platform: PathBuf,
}

impl PythonIncludes {
    /// Both directories, generic first.
    pub fn dirs(&self) -> [&Path; 2] {
        [self.generic.as_path(), self.platform.as_path()]
    }

    /// Parse the two-line output of the sysconfig script.
    ///
    /// Lines are taken verbatim apart from trimming, since install prefixes
    /// may contain spaces.
    pub fn parse(stdout: &str) -> Option<Self> {
        let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
        let generic = lines.next()?;
        let platform = lines.next()?;
        Some(Self {
            generic: PathBuf::from(generic),
            platform: PathBuf::from(platform),
        })
    }
}

/// Ask `python` for its include directories.
pub fn query_python_includes(python: &Path) -> Result<PythonIncludes> {
    let command = command_line(python, &["-c", "<sysconfig query>"]);
    let stdout = output_as(python, &["-c", INCLUDES_SCRIPT], command.clone())?;

    PythonIncludes::parse(&stdout).ok_or_else(|| BuildError::InvalidOutput {
        command,
        reason: format!("expected two include directories, got {:?}", stdout.trim()),
    })
}
