use thiserror::Error;

/// Errors raised by [`expand_var`](crate::expand::expand_var).
#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("The variable name {0} is not in the expand map")]
    Unexpanded(String),

    #[error("Variable character must not be empty")]
    EmptyVarChar,

    #[error("Invalid variable pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ExpandError {
    /// Name of the variable that could not be expanded, if that is the cause.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            ExpandError::Unexpanded(name) => Some(name),
            _ => None,
        }
    }
}

/// Errors raised by [`text_align_delimiter`](crate::format::text_align_delimiter).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlignError {
    /// No line contains the delimiter, so there is no column to align to.
    #[error("No line contains the delimiter {0:?}")]
    NoDelimiter(String),
}
