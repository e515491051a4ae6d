//! Weft lexer CLI.

use weft::commands::{lex_file, list_languages, parse_lex_options};

fn main() {
    weft::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match parse_lex_options(&args[2..]) {
            Ok(options) => lex_file(&options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: weft lex <file> [--lang <mime>] [--nested]");
                std::process::exit(1);
            }
        },
        "languages" => {
            list_languages();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Weft {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Weft incremental embedding lexer");
    println!();
    println!("Usage: weft <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  languages            List built-in languages");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --lang <mime>       Language to use (default: guessed from file name)");
    println!("  --nested            Re-lex embedded regions with their inner language");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>   Enable tracing output (e.g. RUST_LOG=weft_lexer=trace)");
    println!();
    println!("Examples:");
    println!("  weft lex Makefile");
    println!("  weft lex Makefile --nested");
    println!("  weft lex script.txt --lang text/sh");
    println!("  weft languages");
}
