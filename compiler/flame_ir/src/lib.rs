//! Flame IR - shared data types
//!
//! This crate contains the core data structures for the Flame interpreter:
//! - Spans for source locations
//! - Tokens and the sentinel-terminated `TokenList` produced by the lexer
//! - Operator precedence tiers and binary operators
//! - Type tags naming runtime value kinds
//! - The syntax tree (`Stmt`, `Expr`, `FunctionDef`) built once per source unit
//!
//! # Design Philosophy
//!
//! - **Immutable after construction**: a `TokenList` or `Program` is never
//!   mutated once built; evaluation only reads it.
//! - **Shared function bodies**: function definitions live behind `Rc` so the
//!   runtime can bind them as values without copying their bodies.

mod ast;
mod ops;
mod span;
mod token;
mod type_tag;

pub use ast::{Expr, FunctionDef, Param, Program, Stmt};
pub use ops::{BinaryOp, Precedence};
pub use span::Span;
pub use token::{Token, TokenCategory, TokenKind, TokenList};
pub use type_tag::TypeTag;
