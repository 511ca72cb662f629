use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
}

/// Pull-based scanner producing one token per `next_token` call.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    /// Name of the source being scanned.
    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek_char(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.pos += matched.end();
        }
    }

    /// Emits a token spanning the next `len` bytes and moves past them.
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;

        MK_TOKEN!(
            kind,
            String::from(&self.source[start..self.pos]),
            MK_SPAN!(start, self.pos, self.file)
        )
    }

    /// Scans the next token. Once input is exhausted every call yields `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.at() {
            Some(ch) => ch,
            None => {
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    MK_SPAN!(self.pos, self.pos, self.file)
                )
            }
        };

        if let Some(symbol) = SYMBOL_PATTERN.find(self.remainder()) {
            let (kind, len) = (lookup_identifier(symbol.as_str()), symbol.end());
            return self.emit(kind, len);
        }

        if let Some(number) = INTEGER_PATTERN.find(self.remainder()) {
            let len = number.end();
            return self.emit(TokenKind::Int, len);
        }

        match ch {
            '=' if self.peek_char() == Some('=') => self.emit(TokenKind::Equals, 2),
            '=' => self.emit(TokenKind::Assign, 1),
            '!' if self.peek_char() == Some('=') => self.emit(TokenKind::NotEquals, 2),
            '!' => self.emit(TokenKind::Bang, 1),
            '+' => self.emit(TokenKind::Plus, 1),
            '-' => self.emit(TokenKind::Minus, 1),
            '*' => self.emit(TokenKind::Asterisk, 1),
            '/' => self.emit(TokenKind::Slash, 1),
            '<' => self.emit(TokenKind::Less, 1),
            '>' => self.emit(TokenKind::Greater, 1),
            ',' => self.emit(TokenKind::Comma, 1),
            ';' => self.emit(TokenKind::Semicolon, 1),
            '(' => self.emit(TokenKind::OpenParen, 1),
            ')' => self.emit(TokenKind::CloseParen, 1),
            '{' => self.emit(TokenKind::OpenCurly, 1),
            '}' => self.emit(TokenKind::CloseCurly, 1),
            _ => self.emit(TokenKind::Illegal, ch.len_utf8()),
        }
    }
}

/// Scans all of `source`, including the trailing `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
