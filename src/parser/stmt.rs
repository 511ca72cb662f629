use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser.get_stmt_lookup()[parser.current_token_kind().ordinal()];
    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Skips an optional `;` after a statement.
fn skip_terminator(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    skip_terminator(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    let value = if parser.current_is(TokenKind::Semicolon) {
        None
    } else {
        let value = parse_expr(parser, BindingPower::Default)?;
        skip_terminator(parser);
        Some(value)
    };

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;
    skip_terminator(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses the statements of a block whose `{` is the current token.
///
/// Stops on the matching `}` (left as the current token) or at the end of input.
/// Statements that fail are recorded and skipped like top-level ones; only
/// exceeding the nesting limit fails the block itself.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    let token = parser.advance();

    let mut body = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) && !parser.current_is(TokenKind::EOF) {
        match parse_stmt(parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => parser.record(error),
        }
        parser.advance();
    }

    parser.leave_nesting();
    Ok(BlockStmt { token, body })
}
