//! Core library for strkit - stateless string transformation helpers.
//!
//! Every function here is pure: it borrows its input and returns a new
//! value, with no shared state between calls.
//!
//! - `case`: first-character casing and snake/camel/Pascal conversion
//! - `format`: underlining and delimiter-based column alignment
//! - `expand`: `%NAME%`-style template variable expansion
//! - `ngram`: anchored n-gram extraction over text or bytes
//! - `error`: error types for the fallible operations

pub mod case;
pub mod error;
pub mod expand;
pub mod format;
pub mod ngram;

pub use case::{
    lowercase_first_character, to_camel_case, to_pascal_case, to_snake_case,
    uppercase_first_character,
};
pub use error::{AlignError, ExpandError};
pub use expand::{expand_var, ExpandOptions, VarTerminator};
pub use format::{text_align_delimiter, underline, AlignOptions, DEFAULT_UNDERLINE_CHARACTER};
pub use ngram::{extract_byte_ngrams, extract_ngrams};
