//! Tokens of the node specification notation.
//!
//! A node specification is a single line such as
//! `Binary | Expr, Token, Expr`. The lexer only needs to tell apart
//! identifiers, the two separators and brackets; everything else inside a
//! field type (`&`, `'`, `:`, `;`, ...) is carried as a [`TokenKind::Symbol`]
//! so that field text can be sliced back out of the line verbatim.
//!
//! ```rust
//! use astgen_syntax::{Token, TokenKind};
//!
//! let pipe = Token { kind: TokenKind::Pipe, line: 1, col: 8, start: 7, end: 8 };
//! assert!(pipe.is(&TokenKind::Pipe));
//! ```

/// Token types produced by the astgen lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Alphanumerics and `_` (`Expr`, `Vec`, `u8`, `_0`, `Café`)
    Ident(String),
    /// `|`, separates the variant name from its fields
    Pipe,
    /// `,`, separates fields (only at bracket depth zero)
    Comma,
    /// One of `<`, `(`, `[`
    Open(char),
    /// One of `>`, `)`, `]`
    Close(char),
    /// `->` in a function type; never closes a `<`
    Arrow,
    /// Any other non-whitespace character
    Symbol(char),
    Eof,
}

impl TokenKind {
    /// Text used for this token in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(s) => format!("'{}'", s),
            TokenKind::Pipe => "'|'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Arrow => "'->'".to_string(),
            TokenKind::Open(c) | TokenKind::Close(c) | TokenKind::Symbol(c) => format!("'{}'", c),
            TokenKind::Eof => "end of line".to_string(),
        }
    }
}

/// The bracket that closes `open`, if `open` is one.
pub fn closing_of(open: char) -> Option<char> {
    match open {
        '<' => Some('>'),
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

/// A token with its position in the spec line.
///
/// `line`/`col` are 1-based and used for diagnostics; `start..end` is the
/// byte range of the token in the line so the parser can slice field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn is(&self, kind: &TokenKind) -> bool {
        &self.kind == kind
    }
}
