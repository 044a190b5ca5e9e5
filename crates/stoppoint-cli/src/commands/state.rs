use std::path::PathBuf;

use stoppoint_lib::{PhysicalStateService, Resolution, ResolveOptions};

use super::run_common::{load_source, resolve_lang, tab_width, validate};

pub struct StateArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub row: u32,
    pub col: u32,
    pub tab_width: u32,
    pub verbose: bool,
}

pub fn run(args: StateArgs) {
    if let Err(msg) = validate(
        args.source_path.is_some() || args.source_text.is_some(),
        args.source_text.is_some(),
        true,
        args.lang.is_some(),
    ) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref());
    let lang = resolve_lang(args.lang.as_deref(), args.source_path.as_deref());
    let options = ResolveOptions::new().tab_width(tab_width(args.tab_width));

    tracing::debug!(lang = lang.name(), row = args.row, col = args.col, "state query");

    let service = PhysicalStateService::tree_sitter(lang).with_options(options);
    let resolution = service
        .resolve(&source, args.row, args.col)
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    print!("{}", render(&resolution, args.verbose));
}

/// The state id, plus diagnostics when `verbose`.
pub fn render(resolution: &Resolution, verbose: bool) -> String {
    let mut out = format!("{}\n", resolution.state);
    if verbose {
        out.push_str(&format!("parsed: {} bytes\n", resolution.effective_len));
        out.push_str(&format!("recovery: {}\n", resolution.log));
    }
    out
}
