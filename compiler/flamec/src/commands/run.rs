//! The `run` command: execute a Flame source file.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use flame_eval::{Error, Interpreter, TypedValue};

use super::{read_file, render_error};
use crate::natives;

/// Run `source` in a fresh session whose `print` writes to `output`.
pub fn run_source<W: Write + 'static>(
    source: &str,
    output: Rc<RefCell<W>>,
) -> Result<Option<TypedValue>, Error> {
    let mut interp = Interpreter::with_natives([natives::print(output)])?;
    interp.run(source)
}

/// Run a source file, printing output to stdout and errors to stderr.
///
/// A top-level `return` value is echoed after the program's own output.
pub fn run_file(path: &str) {
    let content = read_file(path);
    let stdout = Rc::new(RefCell::new(std::io::stdout()));

    match run_source(&content, stdout) {
        Ok(Some(result)) => println!("{} ({})", result.value, result.tag),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{}", render_error(&e, &content, path));
            std::process::exit(1);
        }
    }
}
