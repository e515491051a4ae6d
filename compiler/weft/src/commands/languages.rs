use weft_lexer::LanguageRegistry;

use crate::languages::builtin_source;

/// Print every built-in language with its token types and imports.
pub fn list_languages() {
    let source = builtin_source();
    let registry = LanguageRegistry::new(source.clone());

    for mime_type in source.mime_types() {
        let Some(descriptor) = registry.descriptor(&mime_type) else {
            eprintln!("{mime_type}: failed to load");
            continue;
        };
        println!("{mime_type}");

        let names: Vec<&str> = descriptor.token_types().names().collect();
        println!("  token types: {}", names.join(", "));

        if let Some(import) = descriptor.preprocessor_import() {
            let ty = descriptor.type_name(import.rule.ty).unwrap_or("?");
            println!("  preprocessor import: {ty} -> {}", import.inner_mime_type);
        }
        let mut imports: Vec<_> = descriptor.token_imports().collect();
        imports.sort_unstable();
        for (ty, inner) in imports {
            let name = descriptor.type_name(ty).unwrap_or("?");
            println!("  token import: {name} -> {inner}");
        }
        if let Some(recovery) = descriptor.literal_recovery() {
            let quotes: String = recovery.quotes.iter().collect();
            let ty = descriptor.type_name(recovery.ty).unwrap_or("?");
            println!("  literal recovery: {ty} on {quotes}");
        }
    }
}
