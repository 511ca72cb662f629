/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root, the statement and expression sum types and the `Node` trait
/// - expressions: Definitions for the expression node payloads
/// - statements: Definitions for the statement node payloads
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
