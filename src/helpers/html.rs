//! HTML and text helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Keep at most `length` characters of `s`. Plain prefix cut.
pub fn truncate_chars(s: &str, length: usize) -> String {
    match s.char_indices().nth(length) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Collapse whitespace and cut at a word boundary, appending `…` when
/// anything was dropped.
pub fn prune(s: &str, length: usize) -> String {
    let text = s.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.chars().count() <= length {
        return text;
    }

    let cut = truncate_chars(&text, length);
    let pruned = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", pruned.trim_end_matches(|c: char| c.is_ascii_punctuation()))
}
