//! Line-by-line driving of a [`Context`].

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::interpreter::evaluator::core::Context;

/// Evaluates one line and writes what the user should see.
///
/// A value is written as its label on one line followed by its rows. An error
/// is written as its message on one line. Assignments, `load`, `save`, `exit`
/// and blank lines write nothing.
///
/// # Example
/// ```
/// use matix::{interpreter::evaluator::core::Context, session::execute_line, storage::DirectoryStore};
///
/// let mut context = Context::new(DirectoryStore::new("."));
/// let mut output = Vec::new();
/// execute_line(&mut context, "[1 2 & 3 4]", &mut output).unwrap();
/// execute_line(&mut context, "[1 2] / 0", &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "Square Matrix\n1 2 \n3 4 \nDivision by zero\n");
/// ```
pub fn execute_line<W: Write>(context: &mut Context, line: &str, output: &mut W) -> io::Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    match context.eval_line(line) {
        Ok(Some(value)) => write!(output, "{}\n{value}", value.label()),
        Ok(None) => Ok(()),
        Err(error) => {
            debug!("statement failed: {error:?}");
            writeln!(output, "{error}")
        },
    }
}

/// A read-evaluate-print loop over any line source.
///
/// The loop ends at the end of input or after an `exit` statement.
pub struct Session<R, W> {
    context: Context,
    input:   R,
    output:  W,
    prompt:  Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that prints no prompt.
    pub fn new(context: Context, input: R, output: W) -> Self {
        Self { context,
               input,
               output,
               prompt: None }
    }

    /// Prints `prompt` before every line is read.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Runs until the input is exhausted or the user exits.
    ///
    /// # Errors
    /// Fails only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        while self.context.is_running() {
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{prompt}")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("end of input");
                break;
            }
            execute_line(&mut self.context, line.trim_end_matches(['\n', '\r']), &mut self.output)?;
        }
        self.output.flush()
    }

    /// Gives back the context, with every binding made during the session.
    pub fn into_context(self) -> Context {
        self.context
    }
}

/// Runs every line of `script` in a fresh session without prompts.
///
/// # Example
/// ```
/// use matix::{interpreter::evaluator::core::Context, session::run_script, storage::DirectoryStore};
///
/// let context = Context::new(DirectoryStore::new("."));
/// let mut output = Vec::new();
/// run_script(context, "a = 2\na * a\nexit\na", &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "Number\n4 \n");
/// ```
///
/// # Errors
/// Fails only if writing output fails.
pub fn run_script<W: Write>(context: Context, script: &str, output: W) -> io::Result<Context> {
    let mut session = Session::new(context, script.as_bytes(), output);
    session.run()?;
    Ok(session.into_context())
}
