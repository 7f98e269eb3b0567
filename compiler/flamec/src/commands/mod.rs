//! Command handlers for the `flame` CLI.
//!
//! Shared utilities like `read_file` and `render_error` live here in the
//! module root.

mod debug;
mod prompt;
mod run;

pub use debug::{format_program, format_tokens, lex_file, parse_file};
pub use prompt::{prompt_loop, run_prompt, Session};
pub use run::{run_file, run_source};

use flame_eval::Error;

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// Render an error for the terminal.
///
/// Parse errors carry a span and get a `--> origin:line:col` location line;
/// runtime errors have no source position.
pub fn render_error(error: &Error, source: &str, origin: &str) -> String {
    let mut out = format!("error: {error}");
    if let Error::Parse(parse) = error {
        if let Some(span) = parse.span() {
            let (line, col) = span.line_col(source);
            out.push_str(&format!("\n  --> {origin}:{line}:{col}"));
        }
    }
    out
}

#[cfg(test)]
mod tests;
