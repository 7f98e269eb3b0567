//! Runtime values.
//!
//! [`Value`] is a closed sum type: its type tag always follows from the
//! variant. [`TypedValue`] pairs a value with the tag the evaluator reports
//! for it, which need not agree with the payload (see
//! [`Evaluator`](crate::Evaluator) for where they diverge).

use std::fmt;
use std::rc::Rc;

use flame_ir::{FunctionDef, TypeTag};

/// Result returned by a host callable. The error is a human-readable message.
pub type NativeResult = Result<Value, String>;

/// A host-supplied function exposed into the language's namespace.
///
/// Natives are invoked positionally with already-evaluated arguments; arity
/// and argument types are theirs to check.
#[derive(Clone)]
pub struct NativeFunction {
    name: Rc<str>,
    func: Rc<dyn Fn(&[Value]) -> NativeResult>,
}

impl NativeFunction {
    pub fn new(name: &str, func: impl Fn(&[Value]) -> NativeResult + 'static) -> Self {
        NativeFunction {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> NativeResult {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<extern {}>", self.name)
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

/// A scalar runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Void,
    Bool(bool),
    Int(i64),
    Function(Rc<FunctionDef>),
    Native(NativeFunction),
}

impl Value {
    /// Tag derived from the payload's variant.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Void => TypeTag::VOID,
            Value::Bool(_) => TypeTag::BOOL,
            Value::Int(_) => TypeTag::INT,
            Value::Function(_) => TypeTag::FUNCTION,
            Value::Native(_) => TypeTag::EXTERN,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => f.write_str("void"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Function(def) => write!(f, "<func {}>", def.name),
            Value::Native(native) => write!(f, "<extern {}>", native.name()),
        }
    }
}

/// A value together with the type tag the evaluator reports for it.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedValue {
    pub tag: TypeTag,
    pub value: Value,
}

impl TypedValue {
    /// Pair `value` with the tag its payload implies.
    pub fn inferred(value: Value) -> Self {
        TypedValue {
            tag: value.type_tag(),
            value,
        }
    }

    /// Pair `value` with an explicit tag, independent of its payload.
    pub fn with_tag(tag: TypeTag, value: Value) -> Self {
        TypedValue { tag, value }
    }

    pub fn void() -> Self {
        TypedValue::inferred(Value::Void)
    }
}

#[cfg(test)]
mod tests;
