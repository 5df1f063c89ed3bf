//! # matix
//!
//! matix is an interactive calculator for matrix algebra. It reads one
//! statement per line, evaluates it right away and prints the result together
//! with the most specific kind of matrix it turned out to be: a number, a zero,
//! square, triangular, diagonal or identity matrix, or a general one.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, value::core::Matrix},
    storage::DirectoryStore,
};

/// Startup configuration.
///
/// Resolves the working directory from the first line of a configuration file
/// and falls back to a default when the file is unusable.
pub mod config;
/// Error types.
///
/// Every failure a statement can run into, grouped by where it happens, plus
/// the configuration failure reported at startup.
pub mod error;
/// The calculator itself.
///
/// Tokenizes a line, parses it by recursive descent and evaluates every
/// operator against the matrix value model as soon as it is read.
pub mod interpreter;
/// The read-evaluate-print loop.
///
/// Feeds lines to an evaluator context and renders values and error messages.
pub mod session;
/// Persistence of named matrices.
///
/// Defines the contract used by `load` and `save` statements and a
/// directory-backed implementation of it.
pub mod storage;
/// Numeric helpers shared by the value model.
pub mod util;

/// Evaluates a multi-line script and returns the value of its last
/// expression.
///
/// Blank lines are skipped and an `exit` statement ends the script early.
/// Files are loaded and saved relative to the current directory. The first
/// failing statement aborts the script.
///
/// # Example
/// ```
/// use matix::get_result;
///
/// let value = get_result("a = [2 0 & 0 3]\nb = a * a\nb\n").unwrap().unwrap();
/// assert_eq!(value.label(), "Diagonal Matrix");
/// assert_eq!(value.to_string(), "4 0 \n0 9 \n");
///
/// assert!(get_result("b").is_err());
/// ```
pub fn get_result(script: &str) -> Result<Option<Matrix>, Error> {
    let mut context = Context::new(DirectoryStore::new("."));
    let mut last = None;

    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(value) = context.eval_line(line)? {
            last = Some(value);
        }
        if !context.is_running() {
            break;
        }
    }
    Ok(last)
}
