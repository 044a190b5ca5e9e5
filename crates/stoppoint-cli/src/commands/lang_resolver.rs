use stoppoint_langs::Lang;

/// Resolve language, returning an error message if unknown.
pub fn resolve_lang_required(lang_name: &str) -> Result<Lang, String> {
    stoppoint_langs::from_name(lang_name)
        .ok_or_else(|| format!("unknown language: '{}'", lang_name))
}

/// Closest built-in language name within two edits of `input`.
pub fn suggest_language(input: &str) -> Option<String> {
    let input = input.to_lowercase();
    stoppoint_langs::all()
        .iter()
        .map(|lang| (edit_distance(lang.name(), &input), lang.name()))
        .filter(|&(distance, _)| distance <= 2)
        .min()
        .map(|(_, name)| name.to_owned())
}

/// Levenshtein distance over chars, one DP row at a time.
pub(crate) fn edit_distance(from: &str, to: &str) -> usize {
    let to: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=to.len()).collect();

    for (i, a) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &b) in to.iter().enumerate() {
            let substitute = diagonal + usize::from(a != b);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[to.len()]
}
