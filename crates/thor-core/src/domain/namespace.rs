//! Namespace rendering for usage lines.

/// Renders the `<ns>:` prefix of a usage line.
///
/// The first matching entry of `reserved` is stripped from the front of the
/// namespace, along with a `:` separator left behind. An absent or emptied
/// namespace renders as nothing.
pub fn render_prefix(namespace: Option<&str>, reserved: &[String]) -> String {
    let Some(namespace) = namespace else {
        return String::new();
    };

    let stripped = reserved
        .iter()
        .find_map(|prefix| namespace.strip_prefix(prefix.as_str()))
        .unwrap_or(namespace);
    let stripped = stripped.strip_prefix(':').unwrap_or(stripped);

    if stripped.is_empty() {
        String::new()
    } else {
        format!("{stripped}:")
    }
}
