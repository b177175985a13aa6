//! # System Interaction Layer
//!
//! This module provides abstractions for interacting with the underlying operating system.
//! It serves as the boundary between the crate's pure logic and the specifics of process
//! spawning, pipe handling, and executable lookup.
//!
//! ## Modules
//!
//! - **`executor`**: The engine for spawning external processes. It configures the
//!   child's output destinations, drains the error pipe without deadlocking, and turns
//!   non-zero exit codes into structured errors.
//! - **`resolver`**: Translates bare command names into absolute executable paths by
//!   delegating to the system's `which` utility.

pub mod executor;
pub mod resolver;
