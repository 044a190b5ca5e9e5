use std::path::PathBuf;

use stoppoint_core::{Point, byte_offset_for_position};

use super::run_common::{load_source, tab_width, validate};

pub struct OffsetArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub row: u32,
    pub col: u32,
    pub tab_width: u32,
}

pub fn run(args: OffsetArgs) {
    if let Err(msg) = validate(
        args.source_path.is_some() || args.source_text.is_some(),
        args.source_text.is_some(),
        false,
        false,
    ) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref());
    let offset = byte_offset_for_position(
        &source,
        Point::new(args.row, args.col),
        tab_width(args.tab_width),
    );
    println!("{}", offset);
}
