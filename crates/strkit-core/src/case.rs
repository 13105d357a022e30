//! Identifier case conversion.
//!
//! Casing rules are ASCII-oriented: only `A-Z`/`a-z` take part in word
//! boundary detection, while the final lowercasing/uppercasing uses the
//! standard `char` mappings.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A `-` or `_` delimiter followed by the letter that starts the next word.
static DELIMITED_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]([A-Za-z])").expect("Invalid regex pattern"));

/// Uppercase the first character of a string, leaving the rest untouched.
pub fn uppercase_first_character(string: &str) -> String {
    map_first_character(string, char::to_uppercase)
}

/// Lowercase the first character of a string, leaving the rest untouched.
pub fn lowercase_first_character(string: &str) -> String {
    map_first_character(string, char::to_lowercase)
}

/// Apply a case mapping to the first character only.
/// A leading newline is not considered a character to map.
fn map_first_character<F, I>(string: &str, mapping: F) -> String
where
    F: FnOnce(char) -> I,
    I: Iterator<Item = char>,
{
    let mut chars = string.chars();
    match chars.next() {
        Some(first) if first != '\n' => {
            let mut result = String::with_capacity(string.len());
            result.extend(mapping(first));
            result.push_str(chars.as_str());
            result
        }
        _ => string.to_string(),
    }
}

/// Convert a camel-, Pascal- or kebab-cased string to snake case.
///
/// Hyphens are deleted rather than turned into underscores, so `kebab-case`
/// becomes `kebabcase` while `kebab-Case` becomes `kebab_case`. Runs of
/// capitals (acronyms) only break where they meet a following lowercase
/// letter: `myHTTPServer` becomes `my_http_server`.
pub fn to_snake_case(string: &str) -> String {
    let chars: Vec<char> = string.chars().filter(|&c| c != '-').collect();

    let mut result = String::with_capacity(chars.len() + chars.len() / 2);
    for (i, &c) in chars.iter().enumerate() {
        if is_camel_boundary(&chars, i) {
            result.push('_');
        }
        result.push(c);
    }

    result.to_lowercase()
}

/// Whether the capital at `i` starts a new word: it follows a lowercase
/// letter, or it is followed by one. Never true for the first character or
/// for a character right after a newline.
fn is_camel_boundary(chars: &[char], i: usize) -> bool {
    if i == 0 || !chars[i].is_ascii_uppercase() {
        return false;
    }

    let prev = chars[i - 1];
    if prev == '\n' {
        return false;
    }

    prev.is_ascii_lowercase() || chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase())
}

/// Convert a camel-, snake- or kebab-cased string to Pascal case.
pub fn to_pascal_case(string: &str) -> String {
    uppercase_first_character(&collapse_delimiters(string))
}

/// Convert a Pascal-, snake- or kebab-cased string to camel case.
pub fn to_camel_case(string: &str) -> String {
    lowercase_first_character(&collapse_delimiters(string))
}

/// Drop every `-`/`_` that precedes a letter and uppercase that letter.
fn collapse_delimiters(string: &str) -> String {
    DELIMITED_LETTER
        .replace_all(string, |caps: &Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character_casing() {
        assert_eq!(uppercase_first_character("hello world"), "Hello world");
        assert_eq!(uppercase_first_character("hELLO"), "HELLO");
        assert_eq!(lowercase_first_character("Hello World"), "hello World");
        assert_eq!(lowercase_first_character("ABC"), "aBC");
        assert_eq!(uppercase_first_character("éclair"), "Éclair");
        assert_eq!(uppercase_first_character("1abc"), "1abc");
    }

    #[test]
    fn test_first_character_empty_and_newline() {
        assert_eq!(uppercase_first_character(""), "");
        assert_eq!(lowercase_first_character(""), "");
        assert_eq!(uppercase_first_character("\nabc"), "\nabc");
    }

    #[test]
    fn test_first_character_composition() {
        // Only the first character is touched by either step
        assert_eq!(uppercase_first_character(&lowercase_first_character("hELLO")), "HELLO");
        assert_eq!(uppercase_first_character(&lowercase_first_character("abC")), "AbC");
        assert_eq!(lowercase_first_character(&uppercase_first_character("AbC")), "abC");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("camelCase"), "camel_case");
        assert_eq!(to_snake_case("PascalCase"), "pascal_case");
        assert_eq!(to_snake_case("simple"), "simple");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_acronyms() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("myHTTPServer"), "my_http_server");
        assert_eq!(to_snake_case("ABC"), "abc");
        assert_eq!(to_snake_case("parseXML"), "parse_xml");
    }

    #[test]
    fn test_to_snake_case_hyphens_are_deleted() {
        assert_eq!(to_snake_case("kebab-case"), "kebabcase");
        assert_eq!(to_snake_case("kebab-Case"), "kebab_case");
        assert_eq!(to_snake_case("--"), "");
    }

    #[test]
    fn test_to_snake_case_no_boundary_after_newline() {
        assert_eq!(to_snake_case("a\nBc"), "a\nbc");
    }

    #[test]
    fn test_to_snake_case_is_idempotent_on_snake_case() {
        for input in ["my_http_server", "a", "already_snake_case", "x_1_y", ""] {
            let once = to_snake_case(input);
            assert_eq!(once, input);
            assert_eq!(to_snake_case(&once), once);
        }
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("my-http-server"), "MyHttpServer");
        assert_eq!(to_pascal_case("my_http_server"), "MyHttpServer");
        assert_eq!(to_pascal_case("myHttpServer"), "MyHttpServer");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("my_http_server"), "myHttpServer");
        assert_eq!(to_camel_case("my-http-server"), "myHttpServer");
        assert_eq!(to_camel_case("MyHttpServer"), "myHttpServer");
    }

    #[test]
    fn test_delimiters_not_before_letters_are_kept() {
        assert_eq!(to_pascal_case("snake_1"), "Snake_1");
        assert_eq!(to_camel_case("a__b"), "a_B");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
    }
}
