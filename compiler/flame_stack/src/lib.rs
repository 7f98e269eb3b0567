//! Stack safety for deep recursion.
//!
//! Flame parses nested expressions and evaluates user function calls by
//! recursing on the host stack. A program that recurses deeply (or a source
//! unit with very deep parenthesis nesting) would otherwise overflow it long
//! before exhausting memory, so recursive entry points wrap themselves in
//! [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// # Example
///
/// ```text
/// fn eval_expr(&mut self, expr: &Expr) -> Result<TypedValue, EvalError> {
///     ensure_sufficient_stack(|| {
///         // ... recursive evaluation ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
