//! Line classification and section assembly.
//!
//! Each input line is classified into one of a fixed set of shapes, checked
//! in order of precedence: comment, section header, key/value, unrecognized.
//! The parser then walks the classified lines keeping a "current section"
//! cursor.

use std::collections::HashMap;

use tracing::debug;

use super::types::Section;

/// The shape of a single line of INI text.
///
/// # Example
///
/// ```
/// use remaining_time::ini::{Line, classify_line};
///
/// assert_eq!(classify_line("  ; note"), Line::Comment);
/// assert_eq!(classify_line("[main]"), Line::SectionHeader("main"));
/// assert_eq!(
///     classify_line(" color = 'red' "),
///     Line::KeyValue { key: "color", value: "red" }
/// );
/// assert_eq!(classify_line("just words"), Line::Unrecognized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Optional leading blanks followed by `;`.
    Comment,
    /// `[name]` filling the whole line; carries the bracketed text.
    SectionHeader(&'a str),
    /// `key = value`, split at the first `=`; both sides trimmed and one
    /// layer of matching quotes removed from the value.
    KeyValue {
        /// The trimmed key.
        key: &'a str,
        /// The trimmed, unquoted value.
        value: &'a str,
    },
    /// Anything else.
    Unrecognized,
}

/// Classifies one line (without its line terminator).
pub fn classify_line(line: &str) -> Line<'_> {
    if line.trim_start_matches([' ', '\t']).starts_with(';') {
        return Line::Comment;
    }

    if let Some(name) = section_name(line) {
        return Line::SectionHeader(name);
    }

    match split_key_value(line) {
        Some((key, value)) => Line::KeyValue {
            key: key.trim(),
            value: unquote(value.trim()),
        },
        None => Line::Unrecognized,
    }
}

/// Parses INI text into a map of section name to [`Section`].
///
/// Lines before the first header are discarded. Re-declaring a section
/// replaces it with an empty one. Within a section the last value written
/// for a key wins.
///
/// # Example
///
/// ```
/// use remaining_time::ini::parse_sections;
///
/// let sections = parse_sections("[s]\na=1\n[s]\nb=2\n");
/// let s = &sections["s"];
/// assert_eq!(s.get("a"), None);
/// assert_eq!(s.get("b"), Some("2"));
/// ```
pub fn parse_sections(source: &str) -> HashMap<String, Section> {
    let mut sections: HashMap<String, Section> = HashMap::new();
    let mut current: Option<String> = None;

    for line in source.lines() {
        match classify_line(line) {
            Line::Comment | Line::Unrecognized => {}
            Line::SectionHeader(name) => {
                sections.insert(name.to_string(), Section::new());
                current = Some(name.to_string());
            }
            Line::KeyValue { key, value } => {
                let Some(section) = current.as_ref().and_then(|name| sections.get_mut(name))
                else {
                    continue;
                };
                section.insert(key, value);
            }
        }
    }

    debug!(sections = sections.len(), "parsed INI source");
    sections
}

/// Returns the bracketed text when the whole line is `[` + text + `]`.
fn section_name(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() { None } else { Some(inner) }
}

/// Splits at the first `=` that has at least one character before it and
/// at least one character after it.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let first_len = line.chars().next()?.len_utf8();
    let split_at = first_len + line[first_len..].find('=')?;
    let value = &line[split_at + 1..];
    if value.is_empty() {
        return None;
    }
    Some((&line[..split_at], value))
}

/// Strips exactly one layer of matching double or single quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
