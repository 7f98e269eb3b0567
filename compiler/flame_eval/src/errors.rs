//! Evaluation errors.
//!
//! Every error is fatal to the run that raised it: nothing is retried or
//! rolled back, and the environment keeps whatever state it had reached.

use flame_ir::TypeTag;
use flame_parse::ParseError;

/// A runtime failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A value did not carry the tag (or payload) an operation requires.
    #[error("cannot convert from '{found}' to {expected}")]
    TypeMismatch { expected: TypeTag, found: TypeTag },
    /// The name is already bound somewhere on the active scope stack.
    #[error("'{name}' is already defined")]
    DuplicateDefinition { name: String },
    #[error("undefined identifier '{name}'")]
    UndefinedIdentifier { name: String },
    /// The call target is neither a function nor an extern.
    #[error("cannot call non-function variable '{name}' of type {tag}")]
    NotCallable { name: String, tag: TypeTag },
    /// Attempt to pop the global scope.
    #[error("cannot pop the base scope")]
    BaseScopeUnderflow,
    #[error("division by zero")]
    DivisionByZero,
    /// A function was called with fewer arguments than it declares.
    #[error("'{name}' expects {expected} argument(s) but got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    /// A host callable reported failure.
    #[error("extern '{name}' failed: {message}")]
    Native { name: String, message: String },
}

/// Outcome of submitting source text: a syntax error or a runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
