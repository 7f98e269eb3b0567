//! Syntax tree for Flame programs.
//!
//! The parser builds one [`Program`] per submitted source unit. Function
//! bodies are kept as statement lists and re-evaluated on every call.

use std::fmt;
use std::rc::Rc;

use crate::{BinaryOp, Span, TypeTag};

/// A parsed source unit: its top-level statement block.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Statements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    /// `func name(type name, ...) { ... }`
    Function(Rc<FunctionDef>),
    /// `return expr;`
    Return(Expr),
    /// `if expr { ... }`
    If { condition: Expr, body: Vec<Stmt> },
    /// `expr;`
    Expr(Expr),
    /// `let name = expr` with an optional trailing `;`.
    Let { name: String, init: Expr },
    /// A bare `;`.
    Empty { span: Span },
}

/// Expressions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// The void value, written as `()` or a lone `)`.
    Void,
    /// Variable reference.
    Var(String),
    /// `callee(arg, ...)`
    Call { callee: String, args: Vec<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Build a binary node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Frees operands iteratively: a long flat chain such as `0+1+1+...` nests
/// one `Box` per operator, and the default recursive drop would overflow the
/// stack on it.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_operands(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_operands(&mut expr, &mut pending);
        }
    }
}

/// Move `expr`'s sub-expressions onto `pending`, leaving leaves behind.
fn take_operands(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Binary { left, right, .. } => {
            pending.push(std::mem::replace(&mut **left, Expr::Void));
            pending.push(std::mem::replace(&mut **right, Expr::Void));
        }
        Expr::Call { args, .. } => pending.append(args),
        Expr::Int(_) | Expr::Void | Expr::Var(_) => {}
    }
}

/// A user-defined function.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

impl FunctionDef {
    /// Parameter list as written, e.g. `int a int b`.
    pub fn signature(&self) -> String {
        self.params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A declared parameter. Parameters have no default values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Param {
    pub name: String,
    pub tag: TypeTag,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tag, self.name)
    }
}
