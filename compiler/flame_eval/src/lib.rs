//! Runtime for the Flame scripting language.
//!
//! [`Interpreter`] is the host entry point: it owns an [`Environment`] and
//! feeds each submitted source unit through the lexer, the parser and the
//! [`Evaluator`]. Hosts expose their own functions with [`NativeFunction`].

mod environment;
mod errors;
mod exec;
mod interpreter;
mod operators;
mod value;

pub use environment::{Environment, Scope, Variable};
pub use errors::{Error, EvalError};
pub use exec::{BlockResult, Evaluator};
pub use interpreter::Interpreter;
pub use value::{NativeFunction, NativeResult, TypedValue, Value};
