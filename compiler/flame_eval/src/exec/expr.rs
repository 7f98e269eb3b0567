//! Expression evaluation.

use flame_ir::{Expr, TypeTag};
use flame_stack::ensure_sufficient_stack;

use super::Evaluator;
use crate::operators::evaluate_binary;
use crate::{EvalError, TypedValue, Value};

impl Evaluator<'_> {
    /// Evaluate an expression to a tagged value.
    pub fn eval_expr(&mut self, expr: &Expr) -> Result<TypedValue, EvalError> {
        ensure_sufficient_stack(|| match expr {
            Expr::Int(n) => Ok(TypedValue::inferred(Value::Int(*n))),
            Expr::Void => Ok(TypedValue::void()),
            Expr::Var(name) => {
                let var = self.env.lookup(name)?;
                Ok(TypedValue::with_tag(TypeTag::INT, var.value.clone()))
            }
            Expr::Call { callee, args } => self.eval_call(callee, args),
            Expr::Binary { op, left, right } => {
                let l = self.eval_expr(left)?;
                let r = self.eval_expr(right)?;
                let n = evaluate_binary(*op, &l, &r)?;
                Ok(TypedValue::with_tag(TypeTag::INT, Value::Int(n)))
            }
        })
    }
}
