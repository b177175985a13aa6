// src/system/resolver.rs

use crate::constants::WHICH_PATH;
use crate::system::executor::{self, ExecutionError};

/// Resolves a bare command name to an absolute executable path.
///
/// The lookup is delegated to the utility at [`WHICH_PATH`], invoked with the
/// name as its sole argument; its trimmed standard output is the result. The
/// lookup runs through the executor's capture path, so a failed lookup
/// surfaces as the same [`ExecutionError`] as any other failing command.
/// Results are not cached; every call performs a fresh lookup.
pub fn resolve(command: &str) -> Result<String, ExecutionError> {
    log::debug!("Resolving '{}' via {}.", command, WHICH_PATH);
    executor::execute_and_capture_output(WHICH_PATH, &[command], None, None)
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_command_to_absolute_path() {
        let path = resolve("sh").unwrap();
        assert!(path.starts_with('/'));
        assert!(path.ends_with("sh"));
    }

    #[test]
    fn test_unknown_command_propagates_lookup_failure() {
        let err = resolve("runcmd-test-no-such-binary").unwrap_err();
        assert_ne!(err.code, 0);
        assert!(err.message.starts_with("status "));
    }

    #[test]
    fn test_bare_name_executes_after_resolution() {
        // End to end: a bare name goes through the resolver and then runs.
        let output =
            executor::execute_and_capture_output("echo", &["resolved"], None, None).unwrap();
        assert_eq!(output, "resolved");
    }
}
