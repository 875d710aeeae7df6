//! astgen lexer: converts one node specification line into tokens.
use astgen_syntax::error::Result;
use astgen_syntax::token::{Token, TokenKind};

/// Character scanner over a single spec line.
pub struct Lexer {
    src: Vec<(usize, char)>,
    len: usize,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Create a lexer for `input`, reporting positions on spec line `line`.
    pub fn new(line: usize, input: &str) -> Self {
        Self {
            src: input.char_indices().collect(),
            len: input.len(),
            pos: 0,
            line,
            col: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).map(|&(_, c)| c)
    }

    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).map(|&(_, c)| c)
    }

    fn offset(&self) -> usize {
        self.src.get(self.pos).map(|&(i, _)| i).unwrap_or(self.len)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
            self.col += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_ident(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        s
    }

    /// Tokenize the whole line into a vector of tokens ending with Eof.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let col = self.col;
            let start = self.offset();
            let kind = match self.peek() {
                None => {
                    tokens.push(Token {
                        kind: TokenKind::Eof,
                        line: self.line,
                        col,
                        start,
                        end: start,
                    });
                    break;
                }
                Some(c) if c.is_alphanumeric() || c == '_' => TokenKind::Ident(self.read_ident()),
                Some('-') if self.peek_next() == Some('>') => {
                    self.advance();
                    self.advance();
                    TokenKind::Arrow
                }
                Some(c) => {
                    self.advance();
                    match c {
                        '|' => TokenKind::Pipe,
                        ',' => TokenKind::Comma,
                        '<' | '(' | '[' => TokenKind::Open(c),
                        '>' | ')' | ']' => TokenKind::Close(c),
                        other => TokenKind::Symbol(other),
                    }
                }
            };
            tokens.push(Token {
                kind,
                line: self.line,
                col,
                start,
                end: self.offset(),
            });
        }
        Ok(tokens)
    }
}
