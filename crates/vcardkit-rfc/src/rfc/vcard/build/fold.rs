//! vCard line folding.

use vcardkit_core::constants::{CRLF, MAX_LINE_OCTETS};

/// Folds a logical line into CRLF-terminated physical lines.
///
/// Each physical line holds at most 75 octets, continuation lines included
/// (one space plus up to 74 octets). Folds at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}{CRLF}");
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str(CRLF);
            result.push(' ');
            current_len = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result.push_str(CRLF);
    result
}
