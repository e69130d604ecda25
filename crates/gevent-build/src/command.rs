//! Running helper executables and collecting their output.

use crate::{BuildError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Render a program and its arguments as a single command line.
pub fn command_line<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}

/// Run `program` with `args` and return its standard output as text.
///
/// Spawn failures and non-zero exits both surface as
/// [`BuildError::CommandFailed`]. `Command::output` waits for the child and
/// drains stdout, so nothing is left open on the error path either. The
/// child's stderr goes straight to ours.
pub fn output_of<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> Result<String> {
    output_as(program, args, command_line(program, args))
}

/// Like [`output_of`], but reports the command as `command` in logs and
/// errors.
pub(crate) fn output_as<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    command: String,
) -> Result<String> {
    log::debug!("Running {}", command);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| {
            log::debug!("Failed to spawn {}: {}", command, e);
            BuildError::CommandFailed {
                command: command.clone(),
            }
        })?;

    check_status(&command, &output)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run `program` with `args` and split its standard output on whitespace.
pub fn split_output_of<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> Result<Vec<String>> {
    let stdout = output_of(program, args)?;
    Ok(stdout.split_whitespace().map(|s| s.to_string()).collect())
}

fn check_status(command: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }

    log::debug!("{} exited with {}", command, output.status);
    Err(BuildError::CommandFailed {
        command: command.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let line = command_line(Path::new("/usr/bin/python3-config"), &["--includes"]);
        assert_eq!(line, "/usr/bin/python3-config --includes");

        let bare = command_line::<&str>(Path::new("helper"), &[]);
        assert_eq!(bare, "helper");
    }

    #[test]
    fn test_missing_program_is_command_failure() {
        let err = output_of(
            Path::new("/nonexistent/gevent-build/helper"),
            &["--includes"],
        )
        .unwrap_err();

        match err {
            BuildError::CommandFailed { command } => {
                assert_eq!(command, "/nonexistent/gevent-build/helper --includes");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_split_output_of_echo() {
        let tokens = split_output_of(Path::new("echo"), &["  -I/a \t -I/b  "]).unwrap();
        assert_eq!(tokens, vec!["-I/a", "-I/b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let err = split_output_of::<&str>(Path::new("false"), &[]).unwrap_err();
        assert!(err.is_command_failure());
        assert_eq!(err.to_string(), "Command false returned non-zero");
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_does_not_leak_into_flags() {
        let tokens = split_output_of(
            Path::new("sh"),
            &["-c", "echo -I/a; echo 'warning: noisy helper' >&2"],
        )
        .unwrap();
        assert_eq!(tokens, vec!["-I/a"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_output_as_reports_label() {
        let err = output_as(
            Path::new("sh"),
            &["-c", "exit 3"],
            "sh -c <script>".to_string(),
        )
        .unwrap_err();

        match err {
            BuildError::CommandFailed { command } => assert_eq!(command, "sh -c <script>"),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }
}
