use std::cell::RefCell;
use std::rc::Rc;

use flame_eval::{Error, EvalError, Interpreter, Value};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_render_parse_error_with_location() {
    let source = "let x = 1;\nlet = 2;";
    let Err(err) = Interpreter::new().run(source) else {
        panic!("expected a parse error");
    };
    assert_eq!(
        render_error(&err, source, "demo.fl"),
        "error: expected identifier but found `=`\n  --> demo.fl:2:5"
    );
}

#[test]
fn test_render_runtime_error() {
    let err = Error::Eval(EvalError::UndefinedIdentifier {
        name: "foo".to_string(),
    });
    assert_eq!(
        render_error(&err, "foo();", "<prompt>"),
        "error: undefined identifier 'foo'"
    );
}

#[test]
fn test_run_source_prints() {
    let output = Rc::new(RefCell::new(Vec::new()));
    let result = run_source(
        "func add(int a, int b) { return a+b; } print(add(3, 4)); return 1;",
        Rc::clone(&output),
    );
    assert_eq!(result.map(|r| r.map(|r| r.value)), Ok(Some(Value::Int(1))));
    assert_eq!(String::from_utf8_lossy(&output.borrow()), "7\n");
}

#[test]
fn test_format_program_shows_grouping() {
    let outline = format_program("func f(int a) { if a { return 1+2*3; } } f(10-3-2);");
    assert_eq!(
        outline.as_deref(),
        Ok("func f (int a)\n  if a\n    return (1 + (2 * 3))\nf(((10 - 3) - 2))\n")
    );
}

#[test]
fn test_format_program_long_chain() {
    let terms = 100_000;
    let source = format!("return 0{};", "+1".repeat(terms));
    let Ok(outline) = format_program(&source) else {
        panic!("long chain should parse");
    };
    assert!(outline.starts_with(&format!("return {}0 + 1)", "(".repeat(terms))));
    assert!(outline.ends_with(" + 1)\n"));
}

#[test]
fn test_format_tokens() {
    let dump = format_tokens("1+2;");
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Number (Literal) @ 0..1 \"1\"");
    assert_eq!(lines[1], "Plus (Operator) @ 1..2 \"+\"");
    assert!(lines[4].starts_with("Eof (Util)"));
}

#[test]
fn test_session_recovers_after_error() {
    let mut session = Session::new(Interpreter::new());
    assert!(session.submit("func f(int a) { return a / 0; }").is_ok());
    assert_eq!(
        session.submit("f(1);"),
        Err(Error::Eval(EvalError::DivisionByZero))
    );
    assert_eq!(session.interpreter().environment().depth(), 1);

    // `a` was bound by the aborted call and must be free again
    let result = session.submit("let a = 3; return a;");
    assert_eq!(result.map(|r| r.map(|r| r.value)), Ok(Some(Value::Int(3))));
}

#[test]
fn test_prompt_reports_unreadable_line() {
    let input: &[u8] = b"let a = 2;\nreturn a;\n\xff\xfe\nreturn 1;\n";
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = prompt_loop(Session::new(Interpreter::new()), input, &mut out, &mut err);
    assert!(result.is_ok());

    // the line after the unreadable one never runs
    assert_eq!(String::from_utf8_lossy(&out), "> > 2 (int)\n> ");
    let err = String::from_utf8_lossy(&err);
    assert!(err.starts_with("error: cannot read input: "), "got {err:?}");
}

#[test]
fn test_prompt_stops_at_exit() {
    let input: &[u8] = b"\nlet x = 1\nexit\nreturn x;\n";
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(prompt_loop(Session::new(Interpreter::new()), input, &mut out, &mut err).is_ok());
    assert_eq!(String::from_utf8_lossy(&out), "> > > ");
    assert!(err.is_empty());
}
