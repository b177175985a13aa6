// src/constants.rs

/// Absolute path of the lookup utility used to resolve bare command names.
pub const WHICH_PATH: &str = "/usr/bin/which";

/// Message used when a failing process cannot have its error stream inspected.
pub const FAILED_COMMAND_MESSAGE: &str = "Failed command";

/// Substituted when a failing process wrote nothing usable to its error stream.
pub const NO_ERROR_MESSAGE: &str = "No error returned from the process.";
