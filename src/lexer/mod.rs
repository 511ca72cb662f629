//! Lexical analysis module.
//!
//! Converts source text into tokens on demand. It handles:
//!
//! - Recognition of keywords, identifiers, integer literals and operators
//! - One character of lookahead for `==` and `!=`
//! - Token position tracking for error reporting
//! - Unrecognised characters, which become `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;
