//! Debug commands: `lex` and `parse` for inspecting interpreter internals.

use std::fmt::Write;

use flame_eval::Error;
use flame_ir::{Expr, Stmt};
use flame_parse::ParseError;
use flame_stack::ensure_sufficient_stack;

use super::read_file;

/// One line per token: kind, category, span and lexeme.
pub fn format_tokens(source: &str) -> String {
    let tokens = flame_lexer::tokenize(source);
    let mut out = String::new();
    for tok in &tokens {
        let _ = writeln!(
            out,
            "{:?} ({:?}) @ {} {:?}",
            tok.kind, tok.category, tok.span, tok.lexeme
        );
    }
    out
}

/// Indented outline of the syntax tree.
pub fn format_program(source: &str) -> Result<String, ParseError> {
    let tokens = flame_lexer::tokenize(source);
    let program = flame_parse::parse(&tokens)?;
    let mut out = String::new();
    write_block(&mut out, &program.body, 0);
    Ok(out)
}

fn write_block(out: &mut String, body: &[Stmt], depth: usize) {
    ensure_sufficient_stack(|| write_statements(out, body, depth));
}

fn write_statements(out: &mut String, body: &[Stmt], depth: usize) {
    for stmt in body {
        let pad = "  ".repeat(depth);
        match stmt {
            Stmt::Function(def) => {
                let _ = writeln!(out, "{pad}func {} ({})", def.name, def.signature());
                write_block(out, &def.body, depth + 1);
            }
            Stmt::Return(expr) => {
                let _ = writeln!(out, "{pad}return {}", render_expr(expr));
            }
            Stmt::If { condition, body } => {
                let _ = writeln!(out, "{pad}if {}", render_expr(condition));
                write_block(out, body, depth + 1);
            }
            Stmt::Expr(expr) => {
                let _ = writeln!(out, "{pad}{}", render_expr(expr));
            }
            Stmt::Let { name, init } => {
                let _ = writeln!(out, "{pad}let {name} = {}", render_expr(init));
            }
            Stmt::Empty { span } => {
                let _ = writeln!(out, "{pad}; @ {span}");
            }
        }
    }
}

/// Fully parenthesised rendering, so grouping is visible.
fn render_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    ensure_sufficient_stack(|| match expr {
        Expr::Int(n) => {
            let _ = write!(out, "{n}");
        }
        Expr::Void => out.push_str("()"),
        Expr::Var(name) => out.push_str(name),
        Expr::Call { callee, args } => {
            out.push_str(callee);
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, arg);
            }
            out.push(')');
        }
        Expr::Binary { op, left, right } => {
            out.push('(');
            write_expr(out, left);
            let _ = write!(out, " {op} ");
            write_expr(out, right);
            out.push(')');
        }
    });
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    print!("{}", format_tokens(&content));
}

/// Parse a file and display the syntax tree.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match format_program(&content) {
        Ok(outline) => {
            println!("Parse result for '{path}':");
            print!("{outline}");
        }
        Err(e) => {
            eprintln!("{}", super::render_error(&Error::from(e), &content, path));
            std::process::exit(1);
        }
    }
}
