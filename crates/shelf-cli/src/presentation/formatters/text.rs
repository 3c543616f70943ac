/// Cut `text` to at most `max_width` characters, ending in `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let truncated: String = text.chars().take(max_width - 1).collect();
    format!("{}…", truncated)
}

/// Lay out tag labels into lines no wider than `width`.
///
/// Each tag becomes a padded cell (`" name "`); cells on one line are
/// separated by a single space. A tag wider than a whole line is truncated.
pub fn wrap_tags<S: AsRef<str>>(tags: &[S], width: usize) -> Vec<Vec<String>> {
    let mut lines: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut used = 0;

    for tag in tags {
        let cell = truncate_with_ellipsis(&format!(" {} ", tag.as_ref()), width);
        let cell_width = cell.chars().count();
        if !current.is_empty() && used + 1 + cell_width > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }

        let gap = if current.is_empty() { 0 } else { 1 };
        used += gap + cell_width;
        current.push(cell);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
