//! Error handling types shared by every astgen component.
//!
//! Schema problems are reported as structured [`Error`] values carrying an
//! [`ErrorKind`] and, where possible, the location of the offending text.
//! Locations are expressed relative to the schema: `line` is the 1-based
//! position of the node specification (or the physical line of a schema
//! file) and `col` is the 1-based character column inside that line.
//!
//! # Examples
//!
//! ```rust
//! use astgen_syntax::error::{Error, ErrorKind, Result, error_at};
//!
//! fn require_pipe(found: bool) -> Result<()> {
//!     if found {
//!         Ok(())
//!     } else {
//!         error_at(ErrorKind::MissingDelimiter, 3, 7, "Expected '|' after variant name")
//!     }
//! }
//!
//! let err = require_pipe(false).unwrap_err();
//! assert_eq!(err.to_string(), "Expected '|' after variant name at 3:7");
//! ```

use std::fmt;

/// The class of failure an [`Error`] describes.
///
/// Every kind means the schema itself is malformed and nothing was
/// generated from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A node specification has no `|` between its name and fields.
    MissingDelimiter,
    /// A field segment is empty (`A | `, `A | X, , Y`, `A | X,`).
    EmptyField,
    /// The schema declares no variants at all.
    EmptyVariantList,
    /// Two node specifications share a variant name.
    DuplicateVariant,
    /// A base, element or variant name is not a plain identifier.
    InvalidName,
    /// Brackets inside a field type do not pair up.
    Unbalanced,
    /// Any other token out of place.
    UnexpectedToken,
}

impl ErrorKind {
    /// Short lowercase label used when rendering diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::MissingDelimiter => "missing delimiter",
            ErrorKind::EmptyField => "empty field",
            ErrorKind::EmptyVariantList => "empty variant list",
            ErrorKind::DuplicateVariant => "duplicate variant",
            ErrorKind::InvalidName => "invalid name",
            ErrorKind::Unbalanced => "unbalanced brackets",
            ErrorKind::UnexpectedToken => "unexpected token",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A malformed-schema error.
///
/// # Examples
///
/// ```rust
/// use astgen_syntax::{Error, ErrorKind};
///
/// let bare = Error::new(ErrorKind::EmptyVariantList, "Schema declares no variants");
/// assert_eq!(bare.to_string(), "Schema declares no variants");
///
/// let located = Error::with_span(ErrorKind::EmptyField, "Empty field", 2, 12);
/// assert_eq!(located.to_string(), "Empty field at 2:12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// What went wrong, structurally
    pub kind: ErrorKind,

    /// Human-readable error message
    pub msg: String,

    /// Optional spec line (1-based)
    pub line: Option<usize>,

    /// Optional column within the spec line (1-based)
    pub col: Option<usize>,
}

impl Error {
    /// Creates an error without location information.
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
            line: None,
            col: None,
        }
    }

    /// Creates an error pointing at `line`/`col` of the schema.
    pub fn with_span(kind: ErrorKind, msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            msg: msg.into(),
            line: Some(line),
            col: Some(col),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(l), Some(c)) = (self.line, self.col) {
            write!(f, "{} at {}:{}", self.msg, l, c)
        } else {
            write!(f, "{}", self.msg)
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for schema operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::new(kind, msg))`.
pub fn error<T>(kind: ErrorKind, msg: impl Into<String>) -> Result<T> {
    Err(Error::new(kind, msg))
}

/// Shorthand for `Err(Error::with_span(kind, msg, line, col))`.
pub fn error_at<T>(kind: ErrorKind, line: usize, col: usize, msg: impl Into<String>) -> Result<T> {
    Err(Error::with_span(kind, msg, line, col))
}
