//! Flame CLI
//!
//! Tree-walking interpreter for the Flame scripting language.

use flamec::commands::{lex_file, parse_file, run_file, run_prompt};

fn main() {
    flamec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        run_prompt();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: flame run <file.fl>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: flame lex <file.fl>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: flame parse <file.fl>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "repl" => run_prompt(),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Flame {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("fl"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Flame interpreter");
    println!();
    println!("Usage: flame [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file.fl>        Run a Flame program");
    println!("  lex <file.fl>        Tokenize and display tokens");
    println!("  parse <file.fl>      Parse and display the syntax tree");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for interpreter tracing on stderr.");
}
