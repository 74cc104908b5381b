use std::fmt::Display;

use crate::Position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Float,
    Variable,

    Plus,
    Dash,
    Star,
    Slash,
    Caret,

    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Float => "float",
            TokenKind::Variable => "variable",
            TokenKind::Plus => "plus",
            TokenKind::Dash => "minus",
            TokenKind::Star => "times",
            TokenKind::Slash => "divide",
            TokenKind::Caret => "pow",
            TokenKind::OpenParen => "lparen",
            TokenKind::CloseParen => "rparen",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexeme with its start position. Created by the scanner,
/// consumed and discarded by the recognizer.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(\"{}\")", self.kind, self.lexeme)
    }
}
