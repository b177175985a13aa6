// src/system/executor.rs

use crate::constants::{FAILED_COMMAND_MESSAGE, NO_ERROR_MESSAGE};
use crate::core::text::trim_trailing_newlines;
use crate::system::resolver;
use dunce;
use std::collections::HashMap;
use std::io::Read;
use std::path::{MAIN_SEPARATOR, Path};
use std::process::{Command as StdCommand, Stdio};
use std::thread;
use thiserror::Error;

/// The failure produced when a command cannot be run to a successful exit.
///
/// Every failure mode (lookup failure, spawn failure, non-zero exit) surfaces
/// through this one shape; they differ only in the message text. `code` is the
/// child's raw exit code, or `-1` when it never produced one.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ExecutionError {
    pub message: String,
    pub code: i32,
}

/// Destination for the child's standard output, resolved to a concrete OS
/// handle only at spawn time.
#[derive(Clone, Copy, Debug)]
enum OutputSink {
    Discard,
    Inherit,
    Capture,
}

/// Destination for the child's standard error. When captured, the pipe is
/// owned and drained by the executor itself.
#[derive(Clone, Copy, Debug)]
enum ErrorSink {
    Capture,
    Inherit,
}

/// Executes a command to completion, discarding its standard output.
///
/// Standard error is captured internally so that a failing command can report
/// what it printed. This function will not return until the command has
/// finished.
pub fn execute_command(
    command: &str,
    args: &[&str],
    cwd: Option<&Path>,
    env_vars: Option<&HashMap<String, String>>,
) -> Result<(), ExecutionError> {
    execute(
        command,
        args,
        OutputSink::Discard,
        ErrorSink::Capture,
        cwd,
        env_vars,
    )
    .map(|_| ())
}

/// Executes a command with the caller's own standard output and error.
///
/// Because the error stream has already gone to the caller's terminal, a
/// failure carries only a generic message alongside the exit code.
pub fn execute_passthrough(
    command: &str,
    args: &[&str],
    cwd: Option<&Path>,
    env_vars: Option<&HashMap<String, String>>,
) -> Result<(), ExecutionError> {
    execute(
        command,
        args,
        OutputSink::Inherit,
        ErrorSink::Inherit,
        cwd,
        env_vars,
    )
    .map(|_| ())
}

/// Executes a command and captures its standard output.
///
/// Trailing line terminators are stripped from the captured text. Standard
/// error is captured internally, as in [`execute_command`].
pub fn execute_and_capture_output(
    command: &str,
    args: &[&str],
    cwd: Option<&Path>,
    env_vars: Option<&HashMap<String, String>>,
) -> Result<String, ExecutionError> {
    execute(
        command,
        args,
        OutputSink::Capture,
        ErrorSink::Capture,
        cwd,
        env_vars,
    )
    .map(Option::unwrap_or_default)
}

/// Runs one child process to completion under the requested sinks.
///
/// Returns the captured standard output when `output_sink` is `Capture`,
/// `None` otherwise.
fn execute(
    command: &str,
    args: &[&str],
    output_sink: OutputSink,
    error_sink: ErrorSink,
    cwd: Option<&Path>,
    env_vars: Option<&HashMap<String, String>>,
) -> Result<Option<String>, ExecutionError> {
    let program = if command.starts_with(MAIN_SEPARATOR) {
        command.to_string()
    } else {
        resolver::resolve(command)?
    };

    let mut child_cmd = StdCommand::new(&program);
    child_cmd.args(args);

    match output_sink {
        OutputSink::Discard => {
            child_cmd.stdout(Stdio::null());
        }
        OutputSink::Inherit => {
            child_cmd.stdout(Stdio::inherit());
        }
        OutputSink::Capture => {
            child_cmd.stdin(Stdio::null());
            child_cmd.stdout(Stdio::piped());
        }
    }
    match error_sink {
        ErrorSink::Capture => {
            child_cmd.stderr(Stdio::piped());
        }
        ErrorSink::Inherit => {
            child_cmd.stderr(Stdio::inherit());
        }
    }

    if let Some(dir) = cwd {
        child_cmd.current_dir(dunce::simplified(dir));
    }
    if let Some(vars) = env_vars {
        // Full replacement: the child sees exactly `vars`, nothing inherited.
        child_cmd.env_clear();
        child_cmd.envs(vars);
    }

    log::debug!("Spawning '{}' with {} argument(s).", program, args.len());

    let mut child = child_cmd.spawn().map_err(|e| ExecutionError {
        message: format!("Command '{}' could not be executed: {}", program, e),
        code: -1,
    })?;

    // Drain stderr on a background thread, started before the wait, so the
    // child can never block writing to a full, undrained pipe buffer.
    let stderr_drain = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = pipe.read_to_end(&mut buffer);
            buffer
        })
    });

    let captured_output = match child.stdout.take() {
        Some(mut pipe) => {
            let mut buffer = Vec::new();
            pipe.read_to_end(&mut buffer).map_err(|e| ExecutionError {
                message: format!("Failed to read output of '{}': {}", program, e),
                code: -1,
            })?;
            Some(buffer)
        }
        None => None,
    };

    let status = child.wait().map_err(|e| ExecutionError {
        message: format!("Failed to wait on '{}': {}", program, e),
        code: -1,
    })?;
    let stderr_bytes = stderr_drain.map(|handle| handle.join().unwrap_or_default());
    let code = status.code().unwrap_or(-1);

    if status.success() {
        let text = captured_output
            .map(|bytes| trim_trailing_newlines(String::from_utf8_lossy(&bytes).into_owned()));
        return Ok(text);
    }

    let message = match stderr_bytes {
        // The error stream went straight to the caller's terminal; there is
        // nothing left to inspect, so only the exit code is reported.
        None => {
            log::warn!("Command '{}' exited with code {}.", program, code);
            FAILED_COMMAND_MESSAGE.to_string()
        }
        Some(bytes) => {
            let text = match String::from_utf8(bytes) {
                Ok(text) if !text.is_empty() => text,
                _ => NO_ERROR_MESSAGE.to_string(),
            };
            format!("status {}: {}", code, trim_trailing_newlines(text))
        }
    };

    Err(ExecutionError { message, code })
}
