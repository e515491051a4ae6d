//! `weft lex`: tokenize a file and print the token stream.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::debug;
use weft_lexer::{LanguageDescriptor, LanguageRegistry, Lexer, SegmentRole, SourceBuffer};

use super::read_file;
use crate::languages::{builtin_source, language_for_path};

/// Deepest chain of languages `--nested` will mount.
const MAX_NESTING: usize = 8;

/// Options for `weft lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub path: String,
    /// Mime type; guessed from the file name when absent.
    pub language: Option<String>,
    /// Re-lex embedded regions with their inner language.
    pub nested: bool,
}

/// Parse the arguments after `lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    let mut path = None;
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--lang" {
            let Some(language) = args.get(i + 1) else {
                return Err("--lang needs a mime type".to_string());
            };
            options.language = Some(language.clone());
            i += 2;
            continue;
        }
        if let Some(language) = arg.strip_prefix("--lang=") {
            options.language = Some(language.to_string());
        } else if arg == "--nested" {
            options.nested = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
        i += 1;
    }
    options.path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(options)
}

/// Lex a file with a built-in language and print its tokens.
pub fn lex_file(options: &LexOptions) {
    let content = read_file(&options.path);
    let Some(mime_type) = options
        .language
        .as_deref()
        .or_else(|| language_for_path(&options.path))
    else {
        eprintln!(
            "error: cannot tell the language of '{}'; pass --lang <mime>",
            options.path
        );
        std::process::exit(1);
    };

    let registry = LanguageRegistry::new(builtin_source());
    let Some(descriptor) = registry.descriptor(mime_type) else {
        eprintln!("error: unknown language '{mime_type}'");
        eprintln!("Run `weft languages` to see the built-in languages.");
        std::process::exit(1);
    };

    debug!(path = %options.path, language = mime_type, nested = options.nested, "lexing file");
    let buf = SourceBuffer::new(&content);
    let count = Lexer::new(Arc::clone(&descriptor), &buf).count();
    println!("Tokens for '{}' ({mime_type}, {count} tokens):", options.path);
    print!("{}", render_tokens(&registry, &descriptor, &content, options.nested));
}

/// One line per token, indented one level. With `nested`, embedded regions
/// are followed by their inner tokens, indented a further two levels.
///
/// Offsets are character indices into `text`.
pub fn render_tokens(
    registry: &LanguageRegistry,
    descriptor: &Arc<LanguageDescriptor>,
    text: &str,
    nested: bool,
) -> String {
    let mut renderer = Renderer {
        registry,
        nested,
        out: String::new(),
    };
    renderer.render(descriptor, text, 0, &[descriptor.mime_type()], 1);
    renderer.out
}

struct Renderer<'r> {
    registry: &'r LanguageRegistry,
    nested: bool,
    out: String,
}

impl Renderer<'_> {
    fn render(
        &mut self,
        descriptor: &Arc<LanguageDescriptor>,
        text: &str,
        base: u32,
        path: &[&str],
        depth: usize,
    ) {
        let indent = "  ".repeat(depth);
        let buf = SourceBuffer::new(text);
        for token in Lexer::new(Arc::clone(descriptor), &buf) {
            let name = descriptor.type_name(token.ty).unwrap_or("?");
            let role = match token.role() {
                None => "",
                Some(SegmentRole::ContinuousStart) => " (continuation start)",
                Some(SegmentRole::Continuous) => " (continuation)",
                Some(SegmentRole::Injected) => " (injected)",
            };
            let _ = writeln!(
                self.out,
                "{indent}{name} {}..{} {:?}{role}",
                base + token.start,
                base + token.end,
                buf.slice(token.start, token.end),
            );

            if !self.nested || path.len() >= MAX_NESTING {
                continue;
            }
            let Some(embedding) = self.registry.find_embedding(&token, path) else {
                continue;
            };
            let (start, end) = embedding.range(&token);
            let inner = embedding.language.mime_type();
            let _ = writeln!(
                self.out,
                "{indent}  {inner} {}..{}:",
                base + start,
                base + end
            );
            let mut inner_path = path.to_vec();
            inner_path.push(inner);
            self.render(
                &embedding.language,
                &buf.slice(start, end),
                base + start,
                &inner_path,
                depth + 2,
            );
        }
    }
}
