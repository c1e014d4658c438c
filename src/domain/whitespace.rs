//! Whitespace as browsers define it for `String.prototype.trim` and `\s`.
//!
//! This differs from Rust's `char::is_whitespace`: U+FEFF (byte order mark)
//! counts as whitespace here, U+0085 (next line) does not.

/// Regex character class matching exactly the characters of [`is_form_whitespace`].
pub const WHITESPACE_CLASS: &str = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing form whitespace.
pub fn trim_form(raw: &str) -> &str {
    raw.trim_matches(is_form_whitespace)
}
