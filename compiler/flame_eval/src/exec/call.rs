//! Function and extern calls.

use std::rc::Rc;

use flame_ir::{Expr, FunctionDef, TypeTag};
use tracing::debug;

use super::Evaluator;
use crate::{EvalError, TypedValue, Value};

impl Evaluator<'_> {
    /// Evaluate `callee(args...)`.
    ///
    /// Arguments are evaluated left to right before the callee is resolved.
    #[tracing::instrument(level = "debug", skip(self, args))]
    pub(super) fn eval_call(&mut self, callee: &str, args: &[Expr]) -> Result<TypedValue, EvalError> {
        let args = args
            .iter()
            .map(|arg| self.eval_expr(arg).map(|arg| arg.value))
            .collect::<Result<Vec<_>, _>>()?;

        let var = self.env.lookup(callee)?.clone();
        match var.value {
            Value::Native(native) => {
                let value = native.call(&args).map_err(|message| EvalError::Native {
                    name: native.name().to_string(),
                    message,
                })?;
                Ok(TypedValue::inferred(value))
            }
            Value::Function(def) => self.call_function(&def, args),
            _ => Err(EvalError::NotCallable {
                name: var.name,
                tag: var.tag,
            }),
        }
    }

    /// Bind parameters in a new scope and run the body.
    ///
    /// Every argument is coerced to `int`, whatever the parameter declares.
    fn call_function(&mut self, def: &Rc<FunctionDef>, args: Vec<Value>) -> Result<TypedValue, EvalError> {
        if args.len() < def.params.len() {
            return Err(EvalError::ArityMismatch {
                name: def.name.clone(),
                expected: def.params.len(),
                found: args.len(),
            });
        }
        if args.len() > def.params.len() {
            debug!(
                name = %def.name,
                ignored = args.len() - def.params.len(),
                "surplus arguments ignored"
            );
        }

        self.env.begin_scope();
        for (param, arg) in def.params.iter().zip(args) {
            let n = arg.as_int().ok_or_else(|| EvalError::TypeMismatch {
                expected: TypeTag::INT,
                found: arg.type_tag(),
            })?;
            self.env
                .register_variable(param.tag.clone(), param.name.as_str(), Value::Int(n))?;
        }
        let result = self.exec_block(&def.body)?;
        self.env.end_scope()?;

        Ok(result.unwrap_or_else(TypedValue::void))
    }
}
