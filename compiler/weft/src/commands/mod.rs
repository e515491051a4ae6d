//! Command handlers for the Weft CLI.
//!
//! Each submodule implements one command. Shared helpers live here.

mod languages;
mod lex;

pub use languages::list_languages;
pub use lex::{lex_file, parse_lex_options, render_tokens, LexOptions};

/// Read a file to a string, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
