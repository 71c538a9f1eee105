//! vCard value helpers: text unescaping and structured-value decomposition.

/// Unescapes a vCard text value.
///
/// vCard escapes: `\n`, `\N` (newline), `\,` (comma), `\;` (semicolon),
/// `\\` (backslash). Any other sequence is kept literally.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on every semicolon.
///
/// Returns all parts, without padding or truncation.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    s.split(';').collect()
}

/// Decomposes a structured value into exactly `arity` components.
///
/// Missing trailing components are empty strings. Surplus components are
/// dropped with a warning; they never fail the parse.
#[must_use]
pub fn decompose(value: &str, arity: usize) -> Vec<String> {
    let parts = split_structured(value);

    if parts.len() > arity {
        tracing::warn!(
            expected = arity,
            found = parts.len(),
            "Dropping surplus structured value components"
        );
    }

    let mut components: Vec<String> = parts.into_iter().take(arity).map(String::from).collect();
    components.resize(arity, String::new());
    components
}
