//! Recursive-descent parser for node specifications.
//!
//! ```text
//! spec  := NAME '|' field (',' field)*
//! field := item+        -- up to the next top-level ',' or end of line
//! ```
//!
//! Field text is sliced out of the source line between its first and last
//! token, so inner spacing such as `HashMap<String, Expr>` survives as
//! written. Commas inside brackets belong to the field.

use astgen_syntax::error::{error_at, ErrorKind, Result};
use astgen_syntax::schema::NodeSpec;
use astgen_syntax::token::{closing_of, Token, TokenKind};

pub struct Parser<'src> {
    src: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    /// `tokens` must come from lexing `src` and end with `Eof`.
    pub fn new(src: &'src str, tokens: Vec<Token>) -> Self {
        Self { src, tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if !tok.is(&TokenKind::Eof) {
            self.pos += 1;
        }
        tok
    }

    pub fn parse_spec(&mut self) -> Result<NodeSpec> {
        let name_tok = self.advance();
        let variant_name = match &name_tok.kind {
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Eof => {
                return error_at(
                    ErrorKind::UnexpectedToken,
                    name_tok.line,
                    name_tok.col,
                    "Empty node specification",
                )
            }
            other => {
                return error_at(
                    ErrorKind::InvalidName,
                    name_tok.line,
                    name_tok.col,
                    format!("Expected variant name, found {}", other.describe()),
                )
            }
        };

        let delim = self.advance();
        match &delim.kind {
            TokenKind::Pipe => {}
            TokenKind::Eof => {
                return error_at(
                    ErrorKind::MissingDelimiter,
                    delim.line,
                    delim.col,
                    format!("Expected '|' after variant '{}'", variant_name),
                )
            }
            other @ TokenKind::Ident(_) => {
                return error_at(
                    ErrorKind::MissingDelimiter,
                    delim.line,
                    delim.col,
                    format!(
                        "Expected '|' after variant '{}'; a variant name must be a single identifier, found {}",
                        variant_name,
                        other.describe()
                    ),
                )
            }
            other => {
                return error_at(
                    ErrorKind::MissingDelimiter,
                    delim.line,
                    delim.col,
                    format!("Expected '|' after variant '{}', found {}", variant_name, other.describe()),
                )
            }
        }

        let mut fields = vec![self.parse_field(&variant_name)?];
        while self.peek().is(&TokenKind::Comma) {
            self.advance();
            fields.push(self.parse_field(&variant_name)?);
        }

        let rest = self.peek();
        if !rest.is(&TokenKind::Eof) {
            return error_at(
                ErrorKind::UnexpectedToken,
                rest.line,
                rest.col,
                format!("Unexpected {} in variant '{}'", rest.kind.describe(), variant_name),
            );
        }

        Ok(NodeSpec::new(variant_name, fields))
    }

    fn parse_field(&mut self, variant: &str) -> Result<String> {
        let first = self.peek().clone();
        if matches!(first.kind, TokenKind::Comma | TokenKind::Eof) {
            return error_at(
                ErrorKind::EmptyField,
                first.line,
                first.col,
                format!("Empty field in variant '{}'", variant),
            );
        }

        let mut open: Vec<Token> = Vec::new();
        let mut end = first.end;
        loop {
            let tok = self.peek().clone();
            match &tok.kind {
                TokenKind::Eof => break,
                TokenKind::Comma if open.is_empty() => break,
                TokenKind::Pipe => {
                    return error_at(
                        ErrorKind::UnexpectedToken,
                        tok.line,
                        tok.col,
                        format!("Unexpected '|' in fields of variant '{}'", variant),
                    )
                }
                TokenKind::Open(_) => open.push(tok.clone()),
                TokenKind::Close(c) => {
                    let expected = open
                        .last()
                        .and_then(|o| match o.kind {
                            TokenKind::Open(oc) => closing_of(oc),
                            _ => None,
                        });
                    if expected != Some(*c) {
                        return error_at(
                            ErrorKind::Unbalanced,
                            tok.line,
                            tok.col,
                            format!("Unmatched '{}' in variant '{}'", c, variant),
                        );
                    }
                    open.pop();
                }
                _ => {}
            }
            end = tok.end;
            self.advance();
        }

        if let Some(unclosed) = open.last() {
            return error_at(
                ErrorKind::Unbalanced,
                unclosed.line,
                unclosed.col,
                format!("Unclosed {} in variant '{}'", unclosed.kind.describe(), variant),
            );
        }

        Ok(self.src[first.start..end].to_string())
    }
}
