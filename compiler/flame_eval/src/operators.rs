//! Binary operator implementations for the evaluator.
//!
//! Arithmetic is defined on `int` operands only. Overflow wraps; division
//! truncates toward zero.

use flame_ir::{BinaryOp, TypeTag};

use crate::{EvalError, TypedValue};

/// Integer payload of an operand, which must be tagged `int` and carry an
/// integer.
fn int_operand(operand: &TypedValue) -> Result<i64, EvalError> {
    if operand.tag != TypeTag::INT {
        return Err(EvalError::TypeMismatch {
            expected: TypeTag::INT,
            found: operand.tag.clone(),
        });
    }
    operand.value.as_int().ok_or_else(|| EvalError::TypeMismatch {
        expected: TypeTag::INT,
        found: operand.value.type_tag(),
    })
}

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &TypedValue, right: &TypedValue) -> Result<i64, EvalError> {
    let l = int_operand(left)?;
    let r = int_operand(right)?;
    match op {
        BinaryOp::Add => Ok(l.wrapping_add(r)),
        BinaryOp::Sub => Ok(l.wrapping_sub(r)),
        BinaryOp::Mul => Ok(l.wrapping_mul(r)),
        BinaryOp::Div => {
            if r == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(l.wrapping_div(r))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use pretty_assertions::assert_eq;

    fn int(n: i64) -> TypedValue {
        TypedValue::inferred(Value::Int(n))
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(evaluate_binary(BinaryOp::Add, &int(2), &int(3)), Ok(5));
        assert_eq!(evaluate_binary(BinaryOp::Sub, &int(2), &int(3)), Ok(-1));
        assert_eq!(evaluate_binary(BinaryOp::Mul, &int(4), &int(-3)), Ok(-12));
        assert_eq!(evaluate_binary(BinaryOp::Div, &int(7), &int(2)), Ok(3));
        assert_eq!(evaluate_binary(BinaryOp::Div, &int(-7), &int(2)), Ok(-3));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(evaluate_binary(BinaryOp::Add, &int(i64::MAX), &int(1)), Ok(i64::MIN));
        assert_eq!(evaluate_binary(BinaryOp::Div, &int(i64::MIN), &int(-1)), Ok(i64::MIN));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate_binary(BinaryOp::Div, &int(1), &int(0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_non_int_operand() {
        assert_eq!(
            evaluate_binary(BinaryOp::Add, &TypedValue::void(), &int(1)),
            Err(EvalError::TypeMismatch {
                expected: TypeTag::INT,
                found: TypeTag::VOID,
            })
        );
        // tagged int but carrying something else
        let forged = TypedValue::with_tag(TypeTag::INT, Value::Bool(true));
        assert_eq!(
            evaluate_binary(BinaryOp::Mul, &int(1), &forged),
            Err(EvalError::TypeMismatch {
                expected: TypeTag::INT,
                found: TypeTag::BOOL,
            })
        );
    }
}
