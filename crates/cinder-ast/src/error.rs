//! Errors raised while attaching children to a program.

use miette::Diagnostic;
use thiserror::Error;

/// A structural consistency error.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum AstError {
    #[error("program body declares {declared} children but {actual} were supplied")]
    #[diagnostic(
        code(cinder::ast::body_size_mismatch),
        help("the declared size must equal the number of supplied children")
    )]
    BodySizeMismatch { declared: u64, actual: usize },

    #[error("program body slot {index} does not reference a node")]
    #[diagnostic(code(cinder::ast::missing_child))]
    MissingChild { index: usize },
}

pub type AstResult<T> = Result<T, AstError>;
