/// Session state and the statement boundary.
///
/// Contains the `Context` that owns the bindings and the storage collaborator,
/// and the entry point that evaluates one line at a time.
pub mod core;

/// Utility functions for the evaluator.
///
/// Provides number recognition and the reserved-word checks shared by the
/// parsing functions.
pub mod utils;
