//! Shared input handling for the source-consuming commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use stoppoint_core::TabWidth;
use stoppoint_langs::Lang;

use super::lang_resolver::{resolve_lang_required, suggest_language};

/// Load source bytes from file, stdin, or inline text.
///
/// Bytes are kept as-is: invalid UTF-8 is the mapper's problem, not ours.
pub fn load_source(source_text: Option<&str>, source_path: Option<&Path>) -> Vec<u8> {
    if let Some(text) = source_text {
        return text.as_bytes().to_vec();
    }
    if let Some(path) = source_path {
        if path.as_os_str() == "-" {
            let mut buf = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buf) {
                eprintln!("error: failed to read stdin: {}", e);
                std::process::exit(1);
            }
            return buf;
        }
        return fs::read(path).unwrap_or_else(|e| {
            eprintln!("error: failed to read '{}': {}", path.display(), e);
            std::process::exit(1);
        });
    }
    unreachable!("validation ensures source input exists")
}

/// Resolve source language from --lang flag or file extension.
pub fn resolve_lang(lang_name: Option<&str>, source_path: Option<&Path>) -> Lang {
    if let Some(name) = lang_name {
        return resolve_lang_required(name).unwrap_or_else(|msg| {
            eprintln!("error: {}", msg);
            if let Some(suggestion) = suggest_language(name) {
                eprintln!();
                eprintln!("Did you mean '{}'?", suggestion);
            }
            eprintln!();
            eprintln!("Run 'stoppoint langs' for the full list.");
            std::process::exit(1);
        });
    }

    if let Some(path) = source_path
        && path.as_os_str() != "-"
        && let Some(ext) = path.extension().and_then(|e| e.to_str())
    {
        if let Some(lang) = stoppoint_langs::from_ext(ext) {
            return lang;
        }
        eprintln!(
            "error: cannot infer language from extension '.{}', use --lang",
            ext
        );
        std::process::exit(1);
    }

    eprintln!("error: --lang is required (cannot infer from input)");
    std::process::exit(1)
}

/// Tab width from a CLI value; clap already rejects zero.
pub fn tab_width(raw: u32) -> TabWidth {
    TabWidth::new(raw).unwrap_or_else(|| {
        eprintln!("error: --tab-width must be at least 1");
        std::process::exit(1);
    })
}

/// Validate source arguments.
pub fn validate(
    has_source: bool,
    source_is_inline: bool,
    needs_lang: bool,
    has_lang: bool,
) -> Result<(), &'static str> {
    if !has_source {
        return Err("source is required: use positional argument, - for stdin, or -s/--source");
    }
    if needs_lang && source_is_inline && !has_lang {
        return Err("--lang is required when using --source");
    }
    Ok(())
}
