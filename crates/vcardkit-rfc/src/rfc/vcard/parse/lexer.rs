//! vCard lexer for line unfolding and content line tokenizing.
//!
//! vCard uses the same folding rules as iCalendar (RFC 5545 §3.1): a
//! physical line starting with one space or tab continues the previous one.

use super::error::{ParseError, ParseResult};
use super::values::unescape_text;
use crate::rfc::vcard::core::{VCardParameter, VCardProperty, append_param_value};

/// A logical line after unfolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Physical line number the logical line starts on (1-based).
    pub number: usize,
    /// Unfolded text, without line terminator.
    pub text: String,
}

/// Splits input into logical lines, merging folded continuations.
///
/// Accepts CRLF and bare LF. A continuation loses exactly its first
/// whitespace character, so a whitespace-only physical line extends the
/// previous logical line. Empty physical lines are skipped. A continuation
/// with nothing before it is discarded, as are logical lines that end up
/// blank.
#[must_use]
pub fn split_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some(prev) = lines.last_mut() {
                prev.text.push_str(continuation);
            }
        } else {
            lines.push(LogicalLine {
                number: idx + 1,
                text: line.to_string(),
            });
        }
    }

    lines.retain(|l| !l.text.trim().is_empty());
    lines
}

/// Unfolds input into the text of its logical lines.
#[must_use]
pub fn unfold(input: &str) -> Vec<String> {
    split_lines(input).into_iter().map(|l| l.text).collect()
}

/// Parses a single content line into a property.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// The value is unescaped before it is stored.
///
/// ## Errors
/// Returns a syntax error if the colon separator is missing, the name or
/// group is malformed, or a parameter is malformed.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<VCardProperty> {
    let colon_pos = find_unquoted(line, ':')
        .ok_or_else(|| ParseError::syntax(line_num, format!("missing colon separator: {line}")))?;

    let (head, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (name_part, params_str) = match find_unquoted(head, ';') {
        Some(semi_pos) => (&head[..semi_pos], Some(&head[semi_pos + 1..])),
        None => (head, None),
    };

    let (group, name) = parse_group(name_part, line_num, line)?;

    let params = match params_str {
        Some(s) => parse_parameters(s, line_num)?,
        None => Vec::new(),
    };

    Ok(VCardProperty {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: unescape_text(value),
    })
}

/// Parses a parameter substring (everything between the name and the colon).
///
/// Repeated names accumulate into one entry, so `TYPE=work;TYPE=voice`
/// yields `TYPE=[work, voice]`.
///
/// ## Errors
/// Returns a syntax error for empty segments, segments without `=`,
/// malformed names, unterminated quoted values, or values holding ASCII
/// control characters other than tab (RFC 6350 §3.3 `QSAFE-CHAR`).
pub fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();

    for segment in split_unquoted(s, ';') {
        let eq_pos = segment.find('=').ok_or_else(|| {
            ParseError::syntax(line_num, format!("parameter without '=': {segment}"))
        })?;

        let name = &segment[..eq_pos];
        if !is_valid_name(name) {
            return Err(ParseError::syntax(
                line_num,
                format!("invalid parameter name: {segment}"),
            ));
        }

        for raw in split_unquoted(&segment[eq_pos + 1..], ',') {
            let unquoted = strip_quotes(raw).ok_or_else(|| {
                ParseError::syntax(
                    line_num,
                    format!("unterminated quoted parameter value: {segment}"),
                )
            })?;
            if unquoted.chars().any(|c| c.is_ascii_control() && c != '\t') {
                return Err(ParseError::syntax(
                    line_num,
                    format!("control character in parameter value: {segment}"),
                ));
            }
            append_param_value(&mut params, name, decode_caret(unquoted));
        }
    }

    Ok(params)
}

/// Returns the byte offset of the first `needle` outside double quotes.
fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == needle && !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Splits on every `sep` outside double quotes.
fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;

    while let Some(pos) = find_unquoted(rest, sep) {
        parts.push(&rest[..pos]);
        rest = &rest[pos + sep.len_utf8()..];
    }

    parts.push(rest);
    parts
}

/// Removes one pair of surrounding double quotes.
///
/// Returns `None` for a value that opens a quote without closing it.
fn strip_quotes(s: &str) -> Option<&str> {
    match s.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"'),
        None => Some(s),
    }
}

/// Decodes RFC 6868 caret escapes: `^n` newline, `^'` double quote, `^^` caret.
fn decode_caret(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '^' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some('\'') => {
                chars.next();
                result.push('"');
            }
            Some('^') => {
                chars.next();
                result.push('^');
            }
            _ => result.push('^'),
        }
    }

    result
}

/// Splits an optional `group.` prefix off the name.
fn parse_group<'a>(
    s: &'a str,
    line_num: usize,
    line: &str,
) -> ParseResult<(Option<&'a str>, &'a str)> {
    let mut parts = s.split('.');
    let (group, name) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, None) => (None, name),
        (Some(group), Some(name), None) => (Some(group), name),
        _ => {
            return Err(ParseError::syntax(
                line_num,
                format!("invalid property group: {line}"),
            ));
        }
    };

    if group.is_some_and(|g| !is_valid_name(g)) {
        return Err(ParseError::syntax(
            line_num,
            format!("invalid property group: {line}"),
        ));
    }

    if !is_valid_name(name) {
        return Err(ParseError::syntax(
            line_num,
            format!("invalid property name: {line}"),
        ));
    }

    Ok((group, name))
}

/// RFC 6350 §3.3: names and groups are `1*(ALPHA / DIGIT / "-")`.
fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
