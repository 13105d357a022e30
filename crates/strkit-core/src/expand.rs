//! Template variable expansion.
//!
//! Placeholders such as `%NAME%` are replaced with values from a lookup map.
//! Expansion is a single left-to-right pass over the source string: text
//! that was substituted in is never scanned again, so values that contain
//! placeholders (even their own) are inserted verbatim.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use strkit_core::{expand_var, ExpandOptions};
//!
//! let vars = HashMap::from([("NAME".to_string(), "World")]);
//! let result = expand_var("Hello %NAME%!", &vars, &ExpandOptions::default()).unwrap();
//! assert_eq!(result, "Hello World!");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::BuildHasher;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExpandError;

/// What closes a variable name after `var_char`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarTerminator {
    /// Close with `var_char` itself, as in `%NAME%`.
    #[default]
    SameAsStart,
    /// No closing text; the name runs up to the nearest word boundary,
    /// as in `$NAME`.
    WordBoundary,
    /// Close with the given text, as in `${NAME}`. An empty token behaves
    /// like [`VarTerminator::SameAsStart`].
    Token(String),
}

/// Options for [`expand_var`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    /// Text that opens a variable reference.
    pub var_char: String,
    /// Text that closes a variable reference.
    pub end_var_char: VarTerminator,
    /// When false, names are lowercased before the map lookup.
    pub case_sensitive: bool,
    /// Fail on the first name missing from the map instead of leaving
    /// the placeholder in place.
    pub exception_on_unexpanded: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            var_char: "%".to_string(),
            end_var_char: VarTerminator::SameAsStart,
            case_sensitive: true,
            exception_on_unexpanded: false,
        }
    }
}

impl ExpandOptions {
    /// Set the text that opens a variable reference.
    pub fn with_var_char(mut self, var_char: impl Into<String>) -> Self {
        self.var_char = var_char.into();
        self
    }

    /// Set what closes a variable reference.
    pub fn with_end_var_char(mut self, end_var_char: VarTerminator) -> Self {
        self.end_var_char = end_var_char;
        self
    }

    /// Set whether names are matched case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set whether unknown names fail the expansion.
    pub fn with_exception_on_unexpanded(mut self, exception_on_unexpanded: bool) -> Self {
        self.exception_on_unexpanded = exception_on_unexpanded;
        self
    }

    /// Compile the placeholder pattern. The variable name is captured as `name`.
    ///
    /// An empty `var_char` is only accepted with [`VarTerminator::WordBoundary`],
    /// where every word-terminated run is then a candidate name.
    fn pattern(&self) -> Result<Regex, ExpandError> {
        let word_boundary = self.end_var_char == VarTerminator::WordBoundary;
        if self.var_char.is_empty() && !word_boundary {
            return Err(ExpandError::EmptyVarChar);
        }

        let start = regex::escape(&self.var_char);
        let end = match &self.end_var_char {
            VarTerminator::WordBoundary => {
                return Ok(Regex::new(&format!(r"{start}(?P<name>.+?)\b"))?);
            }
            VarTerminator::Token(token) if !token.is_empty() => token.as_str(),
            _ => self.var_char.as_str(),
        };

        // Each char of `end` is excluded from the name
        let end = regex::escape(end);
        Ok(Regex::new(&format!("{start}(?P<name>[^{end}]+){end}"))?)
    }
}

/// Expand variables in a string.
///
/// Each placeholder whose name is in `expand_map` is replaced by the value's
/// `Display` output. Unknown names are left in place, or fail with
/// [`ExpandError::Unexpanded`] when `exception_on_unexpanded` is set.
pub fn expand_var<V, S>(
    string: &str,
    expand_map: &HashMap<String, V, S>,
    options: &ExpandOptions,
) -> Result<String, ExpandError>
where
    V: Display,
    S: BuildHasher,
{
    let pattern = options.pattern()?;

    let mut result = String::with_capacity(string.len());
    // Start of the source text not yet copied to `result`
    let mut cursor = 0;

    for caps in pattern.captures_iter(string) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.name("name")) else {
            continue;
        };

        let name = if options.case_sensitive {
            Cow::Borrowed(name.as_str())
        } else {
            Cow::Owned(name.as_str().to_lowercase())
        };

        match expand_map.get(name.as_ref()) {
            Some(value) => {
                debug!(name = %name, "Expanding variable");
                result.push_str(&string[cursor..whole.start()]);
                result.push_str(&value.to_string());
                cursor = whole.end();
            }
            None if options.exception_on_unexpanded => {
                return Err(ExpandError::Unexpanded(name.into_owned()));
            }
            None => {
                debug!(name = %name, "Leaving variable unexpanded");
            }
        }
    }

    result.push_str(&string[cursor..]);
    Ok(result)
}
