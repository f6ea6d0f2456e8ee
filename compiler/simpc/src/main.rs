//! SIMP CLI

use simpc::commands::{highlight_file, lex_file, parse_file, run_file, run_repl};

fn main() {
    simpc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let Some(path) = file_arg(&args, "run") else {
                std::process::exit(1);
            };
            run_file(path);
        }
        "repl" => run_repl(),
        "lex" => {
            let Some(path) = file_arg(&args, "lex") else {
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = file_arg(&args, "parse") else {
                std::process::exit(1);
            };
            parse_file(path);
        }
        "highlight" => {
            let Some(path) = file_arg(&args, "highlight") else {
                std::process::exit(1);
            };
            highlight_file(path);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("SIMP {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("simp"))
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

fn file_arg<'a>(args: &'a [String], command: &str) -> Option<&'a str> {
    let path = args.get(2).map(String::as_str);
    if path.is_none() {
        eprintln!("Usage: simp {command} <file.simp>");
    }
    path
}

fn print_usage() {
    println!("SIMP interpreter");
    println!();
    println!("Usage: simp <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.simp>        Run a SIMP program");
    println!("  repl                   Start an interactive session");
    println!("  lex <file.simp>        Tokenize and display tokens");
    println!("  parse <file.simp>      Parse and display a statement summary");
    println!("  highlight <file.simp>  Display the per-character classification");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=simp_eval=debug) to enable tracing.");
    println!();
    println!("Examples:");
    println!("  simp run main.simp");
    println!("  simp main.simp");
    println!("  simp highlight main.simp");
}
