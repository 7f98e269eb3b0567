//! Built-in externs registered by the driver.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use flame_eval::{NativeFunction, Value};

/// `print(args...)`: write the arguments separated by spaces, then a newline.
///
/// Returns void. Write failures are reported as extern errors.
pub fn print<W: Write + 'static>(output: Rc<RefCell<W>>) -> NativeFunction {
    NativeFunction::new("print", move |args| {
        let line = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(output.borrow_mut(), "{line}").map_err(|err| err.to_string())?;
        Ok(Value::Void)
    })
}

/// Every extern the driver provides, writing to stdout.
pub fn builtins() -> Vec<NativeFunction> {
    vec![print(Rc::new(RefCell::new(std::io::stdout())))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn captured(output: &Rc<RefCell<Vec<u8>>>) -> String {
        String::from_utf8_lossy(&output.borrow()).into_owned()
    }

    #[test]
    fn test_print_joins_arguments() {
        let output = Rc::new(RefCell::new(Vec::new()));
        let native = print(Rc::clone(&output));
        assert_eq!(native.name(), "print");
        assert_eq!(
            native.call(&[Value::Int(1), Value::Bool(true), Value::Void]),
            Ok(Value::Void)
        );
        assert_eq!(native.call(&[]), Ok(Value::Void));
        assert_eq!(captured(&output), "1 true void\n\n");
    }
}
