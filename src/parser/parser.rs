//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from a [`Lexer`] one at a time, keeping only the
//! current token and a single token of lookahead. Expressions are parsed with a
//! Pratt parser driven by NUD/LED handlers; statements by dedicated handlers.
//!
//! It maintains lookup tables, indexed by token kind, for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Handlers return `Result`s; a failed statement is dropped, its error recorded,
//! and parsing resumes at the next statement.

use std::mem;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How deeply expressions and blocks may nest before parsing gives up.
pub const MAX_NESTING: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, read on demand
    lexer: Lexer,
    /// Token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in the order they were found
    errors: Vec<Error>,
    /// Expressions and blocks currently open
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`, with the current and peek
    /// tokens already loaded.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            depth: 0,
            stmt_lookup: [None; TokenKind::COUNT],
            nud_lookup: [None; TokenKind::COUNT],
            led_lookup: [None; TokenKind::COUNT],
            binding_power_lookup: [BindingPower::Default; TokenKind::COUNT],
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Shifts the token window by one and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let previous_peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, previous_peek)
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead token is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error located at the
    /// lookahead token. The parser does not advance on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Binding power of the lookahead token.
    pub fn peek_bp(&self) -> BindingPower {
        self.binding_power_lookup[self.peek.kind.ordinal()]
    }

    /// Binding power of the current token.
    pub fn current_bp(&self) -> BindingPower {
        self.binding_power_lookup[self.current.kind.ordinal()]
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup[kind.ordinal()] = binding_power;
        self.led_lookup[kind.ordinal()] = Some(led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup[kind.ordinal()] = Some(nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup[kind.ordinal()] = Some(stmt_fn);
    }

    /// Opens one level of nesting, failing at the current token once
    /// [`MAX_NESTING`] levels are open.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Adds a diagnostic to the list returned after parsing.
    pub fn record(&mut self, error: Error) {
        trace!(
            "{}@{}: {}",
            error.get_position().1,
            error.get_position().0,
            error
        );
        self.errors.push(error);
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// Always returns a program. Statements that fail to parse are left out and
    /// their diagnostics are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        debug!("Parsing {}", self.lexer.file());

        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.record(error),
            }
            self.advance();
        }

        debug!(
            "Parsed {} statements from {} with {} errors",
            program.len(),
            self.lexer.file(),
            self.errors.len()
        );

        program
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. `file` names the source in
/// diagnostics and defaults to `shell`.
///
/// # Returns
///
/// A tuple containing:
/// - The Program, holding every statement that parsed
/// - The diagnostics for everything that did not
pub fn parse(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source.to_string(), file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
