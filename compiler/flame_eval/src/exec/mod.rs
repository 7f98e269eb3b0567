//! Tree-walking execution.
//!
//! - `mod.rs`: statements and blocks
//! - `expr`: expression evaluation
//! - `call`: function and extern calls
//!
//! Evaluation is driven by [`Evaluator`], which borrows the environment for
//! the duration of one run. A block yields `Some(value)` when a `return` was
//! executed inside it, and the enclosing blocks stop as soon as they see it.

mod call;
mod expr;

use flame_ir::{Expr, Program, Stmt, TypeTag};
use flame_stack::ensure_sufficient_stack;
use tracing::{trace, warn};

use crate::{Environment, EvalError, TypedValue};

/// Result of running a block: the returned value, if a `return` ran.
pub type BlockResult = Result<Option<TypedValue>, EvalError>;

/// Executes syntax trees against a borrowed [`Environment`].
///
/// # Tagging quirk
///
/// Variable references and arithmetic results are always reported with the
/// `int` tag, whatever their payload. A `let` bound to a function reference
/// therefore carries tag `int` and payload `function`. Extern call results
/// are tagged from their payload instead.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Evaluator { env }
    }

    /// Run a whole source unit in the current scope.
    pub fn exec_program(&mut self, program: &Program) -> BlockResult {
        self.exec_block(&program.body)
    }

    /// Run statements in order, stopping at the first `return`.
    pub fn exec_block(&mut self, body: &[Stmt]) -> BlockResult {
        ensure_sufficient_stack(|| {
            for stmt in body {
                if let Some(returned) = self.exec_stmt(stmt)? {
                    return Ok(Some(returned));
                }
            }
            Ok(None)
        })
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> BlockResult {
        match stmt {
            Stmt::Function(def) => {
                self.env.register_function(def.clone())?;
                Ok(None)
            }
            Stmt::Return(expr) => self.eval_expr(expr).map(Some),
            Stmt::If { condition, body } => self.exec_if(condition, body),
            Stmt::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(None)
            }
            Stmt::Let { name, init } => {
                let TypedValue { tag, value } = self.eval_expr(init)?;
                trace!(%name, %tag, "let");
                self.env.register_variable(tag, name.as_str(), value)?;
                Ok(None)
            }
            Stmt::Empty { span } => {
                warn!(%span, "pointless semicolon");
                Ok(None)
            }
        }
    }

    /// Run `body` in a fresh scope when `condition` is a positive `int`.
    fn exec_if(&mut self, condition: &Expr, body: &[Stmt]) -> BlockResult {
        let cond = self.eval_expr(condition)?;
        if cond.tag != TypeTag::INT {
            return Err(EvalError::TypeMismatch {
                expected: TypeTag::INT,
                found: cond.tag,
            });
        }
        let n = cond.value.as_int().ok_or_else(|| EvalError::TypeMismatch {
            expected: TypeTag::INT,
            found: cond.value.type_tag(),
        })?;
        if n <= 0 {
            return Ok(None);
        }

        self.env.begin_scope();
        let result = self.exec_block(body)?;
        self.env.end_scope()?;
        Ok(result)
    }
}
