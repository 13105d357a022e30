//! Text layout helpers: underlining and delimiter alignment.
//!
//! Widths are counted in `char`s, not bytes or display columns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AlignError;

/// Character used by callers that have no preference for [`underline`].
pub const DEFAULT_UNDERLINE_CHARACTER: char = '=';

/// Underline a string with one `underline_character` per character of it.
pub fn underline(string: &str, underline_character: char) -> String {
    let len = string.chars().count();
    let mut result = String::with_capacity(string.len() + 1 + len * underline_character.len_utf8());
    result.push_str(string);
    result.push('\n');
    result.extend(std::iter::repeat(underline_character).take(len));
    result
}

/// Options for [`text_align_delimiter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignOptions {
    /// Text to align the lines around.
    pub delimiter: String,
    /// Indent lines without the delimiter so they start where the text
    /// after the delimiter starts.
    pub put_non_match_after_delimiter: bool,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            delimiter: ": ".to_string(),
            put_non_match_after_delimiter: true,
        }
    }
}

impl AlignOptions {
    /// Set the text to align the lines around.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set whether lines without the delimiter are indented past it.
    pub fn with_put_non_match_after_delimiter(mut self, put_after: bool) -> Self {
        self.put_non_match_after_delimiter = put_after;
        self
    }
}

/// Whether `c` ends a line. Covers `\n`, `\r`, vertical tab, form feed,
/// the file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines on every line boundary, treating `\r\n` as one.
/// A trailing boundary does not produce an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }

        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Align multi-line text around a delimiter.
///
/// The part before the first delimiter of each line is right-justified so
/// that every delimiter starts at the same column. Non-empty lines without
/// the delimiter are either indented past the delimiter or left alone,
/// depending on `put_non_match_after_delimiter`. Empty lines stay empty.
///
/// Fails with [`AlignError::NoDelimiter`] when no line contains the
/// delimiter (including empty text), since there is no column to align to.
pub fn text_align_delimiter(text: &str, options: &AlignOptions) -> Result<String, AlignError> {
    let delimiter = options.delimiter.as_str();

    let lines = split_lines(text);

    // First delimiter per line as (byte offset, char offset)
    let positions: Vec<Option<(usize, usize)>> = lines
        .iter()
        .map(|line| {
            line.find(delimiter)
                .map(|byte_pos| (byte_pos, line[..byte_pos].chars().count()))
        })
        .collect();

    let Some(column) = positions.iter().flatten().map(|&(_, char_pos)| char_pos).max() else {
        debug!(delimiter = %delimiter, "No line contains the delimiter");
        return Err(AlignError::NoDelimiter(delimiter.to_string()));
    };

    debug!(
        delimiter = %delimiter,
        column,
        lines = positions.len(),
        "Aligning text around delimiter"
    );

    let non_match_indent = " ".repeat(column + delimiter.chars().count());

    let aligned: Vec<String> = lines
        .iter()
        .zip(&positions)
        .map(|(line, position)| match position {
            Some((byte_pos, _)) => {
                let (head, tail) = line.split_at(*byte_pos);
                format!("{:>width$}{}", head, tail, width = column)
            }
            None if !line.is_empty() && options.put_non_match_after_delimiter => {
                format!("{}{}", non_match_indent, line)
            }
            None => line.to_string(),
        })
        .collect();

    Ok(aligned.join("\n"))
}
