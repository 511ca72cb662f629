//! Unit tests for AST rendering and token literals.

use crate::{
    ast::{
        ast::{Expr, Node, Program, Stmt},
        expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

fn token(kind: TokenKind, value: &str) -> Token {
    MK_TOKEN!(
        kind,
        value.to_string(),
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    )
}

fn ident(name: &str) -> Identifier {
    Identifier {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: token(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_string() {
    let with_value = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: Some(Expr::Integer(IntegerLiteral {
            token: token(TokenKind::Int, "5"),
            value: 5,
        })),
    });
    let bare = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: None,
    });

    assert_eq!(with_value.to_string(), "return 5;");
    assert_eq!(bare.to_string(), "return;");
}

#[test]
fn test_expression_rendering_is_parenthesized() {
    let expr = Expr::Infix(InfixExpr {
        token: token(TokenKind::Asterisk, "*"),
        left: Box::new(Expr::Prefix(PrefixExpr {
            token: token(TokenKind::Minus, "-"),
            operator: "-".to_string(),
            right: Box::new(Expr::Identifier(ident("a"))),
        })),
        operator: "*".to_string(),
        right: Box::new(Expr::Identifier(ident("b"))),
    });

    assert_eq!(expr.to_string(), "((-a) * b)");
    assert_eq!(expr.token_literal(), "*");
}

#[test]
fn test_statements_concatenate_without_separators() {
    let block = BlockStmt {
        token: token(TokenKind::OpenCurly, "{"),
        body: vec![
            Stmt::Expression(ExpressionStmt {
                token: token(TokenKind::Identifier, "x"),
                expression: Expr::Identifier(ident("x")),
            }),
            Stmt::Return(ReturnStmt {
                token: token(TokenKind::Return, "return"),
                value: Some(Expr::Identifier(ident("y"))),
            }),
        ],
    };

    assert_eq!(block.to_string(), "xreturn y;");
    assert_eq!(block.braced(), "{ xreturn y; }");
    assert_eq!(Stmt::Block(block).token_literal(), "{");
}

#[test]
fn test_empty_nodes() {
    let program = Program::default();
    let block = BlockStmt {
        token: token(TokenKind::OpenCurly, "{"),
        body: vec![],
    };

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
    assert_eq!(block.braced(), "{}");
}
