//! Scope stack for the interpreter.
//!
//! The bottom scope is the global scope; it is created with the environment
//! and can never be popped. Blocks and calls push a scope on entry and pop it
//! on exit.
//!
//! # Name uniqueness
//!
//! A name may be bound at most once across the *whole* active stack, not just
//! within one scope. Registering a name that is live in any enclosing scope
//! fails with [`EvalError::DuplicateDefinition`]; there is no shadowing.

use std::rc::Rc;

use flame_ir::{FunctionDef, TypeTag};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{EvalError, NativeFunction, Value};

/// A named, typed binding owned by one scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
    pub tag: TypeTag,
    pub value: Value,
}

/// A single scope containing variable bindings, unique by name.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Variable>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn insert(&mut self, variable: Variable) {
        self.bindings.insert(variable.name.clone(), variable);
    }
}

/// Environment for the interpreter using a scope stack.
pub struct Environment {
    /// Scopes above the global one, innermost last.
    scopes: Vec<Scope>,
    /// Global scope (always at the bottom).
    global: Scope,
}

impl Environment {
    /// Create a new environment holding only the global scope.
    pub fn new() -> Self {
        Environment {
            scopes: Vec::new(),
            global: Scope::new(),
        }
    }

    /// Number of active scopes, global included.
    pub fn depth(&self) -> usize {
        self.scopes.len() + 1
    }

    /// Push a new empty scope.
    pub fn begin_scope(&mut self) {
        self.scopes.push(Scope::new());
        trace!(depth = self.depth(), "begin scope");
    }

    /// Pop the innermost scope, dropping its bindings.
    pub fn end_scope(&mut self) -> Result<(), EvalError> {
        self.scopes.pop().ok_or(EvalError::BaseScopeUnderflow)?;
        trace!(depth = self.depth(), "end scope");
        Ok(())
    }

    /// Pop every scope above the global one.
    ///
    /// Runs abort on the first error without closing the scopes they opened;
    /// hosts that keep a session alive after a failure call this to get back
    /// to a clean global state.
    pub fn unwind_to_global(&mut self) {
        if !self.scopes.is_empty() {
            debug!(discarded = self.scopes.len(), "unwinding to global scope");
            self.scopes.clear();
        }
    }

    /// Bind `name` in the innermost scope.
    pub fn register_variable(
        &mut self,
        tag: TypeTag,
        name: impl Into<String>,
        value: Value,
    ) -> Result<(), EvalError> {
        let name = name.into();
        if self.is_defined(&name) {
            return Err(EvalError::DuplicateDefinition { name });
        }
        self.current_scope_mut().insert(Variable { name, tag, value });
        Ok(())
    }

    /// Bind a user-defined function under its own name, tagged `function`.
    pub fn register_function(&mut self, def: Rc<FunctionDef>) -> Result<(), EvalError> {
        debug!(name = %def.name, signature = %def.signature(), "new function defined");
        self.register_variable(TypeTag::FUNCTION, def.name.clone(), Value::Function(def))
    }

    /// Bind a host callable under its own name, tagged `extern`.
    pub fn register_native(&mut self, native: NativeFunction) -> Result<(), EvalError> {
        debug!(name = native.name(), "new extern defined");
        self.register_variable(TypeTag::EXTERN, native.name().to_string(), Value::Native(native))
    }

    /// Find `name`, searching from the innermost scope outwards.
    pub fn lookup(&self, name: &str) -> Result<&Variable, EvalError> {
        self.scopes
            .iter()
            .rev()
            .chain(std::iter::once(&self.global))
            .find_map(|scope| scope.get(name))
            .ok_or_else(|| EvalError::UndefinedIdentifier {
                name: name.to_string(),
            })
    }

    /// Whether `name` is bound in any active scope.
    pub fn is_defined(&self, name: &str) -> bool {
        self.global.contains(name) || self.scopes.iter().any(|scope| scope.contains(name))
    }

    /// The global scope.
    pub fn global(&self) -> &Scope {
        &self.global
    }

    fn current_scope_mut(&mut self) -> &mut Scope {
        self.scopes.last_mut().unwrap_or(&mut self.global)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
