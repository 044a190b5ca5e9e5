use stoppoint_langs::Lang;

pub fn run() {
    print!("{}", render(&stoppoint_langs::all()));
}

pub fn render(langs: &[Lang]) -> String {
    let mut out = format!("Supported languages ({}):\n", langs.len());
    for lang in langs {
        out.push_str(&format!("  {} ({} states)\n", lang.name(), lang.state_count()));
    }
    out
}
