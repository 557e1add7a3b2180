use thiserror::Error;

/// PSL engine error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Empty rule pattern")]
    EmptyPattern,

    #[error("No rules registered")]
    EmptyRegistry,

    #[error("Conflicting exception rules: '{first}' and '{second}' match the same domain")]
    ConflictingExceptionRules { first: String, second: String },
}

pub type Result<T> = std::result::Result<T, PslError>;
