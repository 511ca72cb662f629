//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the token stream of a
//! [`Lexer`](crate::lexer::lexer::Lexer) into an Abstract Syntax Tree. It uses
//! a Pratt parser for expressions with proper operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and binary operators, grouping, `if`, `fn`, calls)
//! - Error accumulation with statement-level recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
