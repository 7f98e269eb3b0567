//! Interactive prompt.

use std::io::{self, BufRead, Write};

use flame_eval::{Error, Interpreter, TypedValue};
use tracing::debug;

use super::render_error;
use crate::natives;

/// An interactive session: definitions persist between submissions.
pub struct Session {
    interp: Interpreter,
}

impl Session {
    pub fn new(interp: Interpreter) -> Self {
        Session { interp }
    }

    /// Run one submission.
    ///
    /// A failed run may leave scopes open; they are discarded so the next
    /// submission starts from the global scope again.
    pub fn submit(&mut self, source: &str) -> Result<Option<TypedValue>, Error> {
        let result = self.interp.run(source);
        if result.is_err() {
            self.interp.environment_mut().unwind_to_global();
        }
        result
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }
}

/// Read lines from stdin and run each one until `exit` or end of input.
pub fn run_prompt() {
    let session = match Interpreter::with_natives(natives::builtins()) {
        Ok(interp) => Session::new(interp),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let result = prompt_loop(session, stdin.lock(), std::io::stdout(), std::io::stderr());
    if let Err(e) = result {
        eprintln!("error: cannot write output: {e}");
    }
}

/// Drive `session` from `input`, writing results to `out` and errors to `err`.
///
/// Stops at `exit`, at end of input, or when a line cannot be read; a read
/// failure is reported on `err` before stopping.
pub fn prompt_loop(
    mut session: Session,
    input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                writeln!(err, "error: cannot read input: {e}")?;
                break;
            }
            None => break,
        };
        let line = line.trim();
        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match session.submit(line) {
            Ok(Some(result)) => writeln!(out, "{} ({})", result.value, result.tag)?,
            Ok(None) => {}
            Err(e) => writeln!(err, "{}", render_error(&e, line, "<prompt>"))?,
        }
    }
    debug!("prompt closed");
    Ok(())
}
