/// Handles argument parsing and orchestration.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// The project being generated.
pub mod project;

/// Template rendering functionality.
pub mod renderer;

/// Project directory layout and generated files.
pub mod skeleton;
