//! vCard text and parameter escaping.

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, newline, comma, and semicolon. Carriage returns are
/// dropped.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {}
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a single parameter value for vCard serialization.
///
/// Uses RFC 6868 caret encoding for `^`, newline and `"`. Returns
/// `(value, needs_quotes)`; quoting is needed when the value holds a
/// separator (`:` `;` `,`) or whitespace.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            ':' | ';' | ',' | ' ' | '\t' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_ascii_control() => {}
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}

/// Renders a parameter value list, quoting each value as needed and joining
/// with commas.
#[must_use]
pub fn format_param_values(values: &[String]) -> String {
    values
        .iter()
        .map(|value| {
            let (escaped, needs_quotes) = escape_param_value(value);
            if needs_quotes {
                format!("\"{escaped}\"")
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::unescape_text;

    #[test]
    fn escape_text_basic() {
        assert_eq!(escape_text("hello"), "hello");
    }

    #[test]
    fn escape_text_newline() {
        assert_eq!(escape_text("line1\nline2"), r"line1\nline2");
        assert_eq!(escape_text("line1\r\nline2"), r"line1\nline2");
    }

    #[test]
    fn escape_text_special() {
        assert_eq!(escape_text(r"a,b;c\d"), r"a\,b\;c\\d");
    }

    #[test]
    fn escape_backslash_before_others() {
        assert_eq!(escape_text(r"\n"), r"\\n");
        assert_eq!(unescape_text(&escape_text(r"\n")), r"\n");
    }

    #[test]
    fn escape_is_inverted_by_unescape() {
        for value in [
            "plain",
            "a,b;c",
            "multi\nline",
            r"back\slash",
            r"\;\,\n",
            "ünïcödé, 日本語; ok",
            "",
        ] {
            assert_eq!(unescape_text(&escape_text(value)), value);
        }
    }

    #[test]
    fn escape_param_no_quotes() {
        let (val, needs_quotes) = escape_param_value("simple");
        assert_eq!(val, "simple");
        assert!(!needs_quotes);
    }

    #[test]
    fn escape_param_with_colon() {
        let (val, needs_quotes) = escape_param_value("value:with:colons");
        assert_eq!(val, "value:with:colons");
        assert!(needs_quotes);
    }

    #[test]
    fn escape_param_with_space() {
        let (_, needs_quotes) = escape_param_value("two words");
        assert!(needs_quotes);
    }

    #[test]
    fn escape_param_with_newline() {
        let (val, _) = escape_param_value("line1\nline2");
        assert_eq!(val, "line1^nline2");
    }

    #[test]
    fn escape_param_with_quote() {
        let (val, needs_quotes) = escape_param_value("say\"hello\"");
        assert_eq!(val, "say^'hello^'");
        assert!(!needs_quotes);
    }

    #[test]
    fn escape_param_with_caret() {
        let (val, _) = escape_param_value("a^b");
        assert_eq!(val, "a^^b");
    }

    #[test]
    fn format_param_values_joins_and_quotes() {
        let values = vec!["work".to_string(), "a,b".to_string(), String::new()];
        assert_eq!(format_param_values(&values), "work,\"a,b\",");
    }
}
