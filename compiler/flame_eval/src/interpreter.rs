//! Host-facing entry point.

use flame_ir::{Program, TokenList};
use tracing::debug;

use crate::{Environment, Error, EvalError, Evaluator, NativeFunction, TypedValue};

/// A long-lived interpreter session.
///
/// Every submission runs against the same global scope, so functions and
/// variables defined by one `run` are visible to the next.
///
/// # Example
///
/// ```
/// use flame_eval::{Interpreter, NativeFunction, Value};
///
/// let double = NativeFunction::new("double", |args| match args {
///     [Value::Int(n)] => Ok(Value::Int(n * 2)),
///     _ => Err("double takes one int".to_string()),
/// });
/// let mut interp = Interpreter::with_natives([double]).unwrap();
///
/// interp.run("func inc(int a) { return a + 1; }").unwrap();
/// let result = interp.run("return double(inc(20));").unwrap();
/// assert_eq!(result.map(|r| r.value), Some(Value::Int(42)));
/// ```
#[derive(Default)]
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::default()
    }

    /// Create a session with `natives` bound in the global scope.
    pub fn with_natives(natives: impl IntoIterator<Item = NativeFunction>) -> Result<Self, EvalError> {
        let mut interp = Interpreter::new();
        for native in natives {
            interp.register_native(native)?;
        }
        Ok(interp)
    }

    /// Bind a host callable in the global scope.
    pub fn register_native(&mut self, native: NativeFunction) -> Result<(), EvalError> {
        self.env.register_native(native)
    }

    /// Tokenize, parse and execute one source unit.
    ///
    /// Nothing runs if the unit fails to parse. Returns the value of a
    /// top-level `return`, if one executed.
    pub fn run(&mut self, source: &str) -> Result<Option<TypedValue>, Error> {
        let tokens = flame_lexer::tokenize(source);
        self.run_tokens(&tokens)
    }

    /// Parse and execute an already tokenized source unit.
    pub fn run_tokens(&mut self, tokens: &TokenList) -> Result<Option<TypedValue>, Error> {
        let program = flame_parse::parse(tokens)?;
        debug!(statements = program.body.len(), "parsed source unit");
        Ok(self.execute(&program)?)
    }

    /// Execute a parsed program in the global scope.
    pub fn execute(&mut self, program: &Program) -> Result<Option<TypedValue>, EvalError> {
        Evaluator::new(&mut self.env).exec_program(program)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}
