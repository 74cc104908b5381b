//! Unit tests for the scanner module.
//!
//! This module contains tests for tokenization including:
//! - Float literals (integer-only and fractional)
//! - Variables
//! - Operators and parentheses
//! - Maximal munch and pushback behavior
//! - Row/column tracking across newlines
//! - Error cases

use super::{
    scanner::{print_tokens, tokenize, Scanner},
    tokens::TokenKind,
};
use crate::automaton::automaton::ARITHMETIC;

#[test]
fn test_tokenize_floats() {
    let tokens = tokenize(&ARITHMETIC, b"3.14 2.0 42".to_vec()).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].lexeme, "3.14");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].lexeme, "2.0");
    assert_eq!(tokens[2].kind, TokenKind::Float);
    assert_eq!(tokens[2].lexeme, "42");
}

#[test]
fn test_tokenize_bare_integer_is_float() {
    let tokens = tokenize(&ARITHMETIC, b"4".to_vec()).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].lexeme, "4");
}

#[test]
fn test_tokenize_maximal_munch() {
    // Never FLOAT("12") followed by something else.
    let tokens = tokenize(&ARITHMETIC, b"12.34".to_vec()).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].lexeme, "12.34");
}

#[test]
fn test_tokenize_variables() {
    let tokens = tokenize(&ARITHMETIC, b"foo BAR x".to_vec()).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].lexeme, "BAR");
    assert_eq!(tokens[2].kind, TokenKind::Variable);
    assert_eq!(tokens[2].lexeme, "x");
}

#[test]
fn test_tokenize_variable_digit_tail() {
    let tokens = tokenize(&ARITHMETIC, b"x1".to_vec()).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].lexeme, "x1");
}

#[test]
fn test_tokenize_variable_digit_tail_ends_at_letter() {
    // The digit tail has no letter transitions, so "a1b" splits.
    let tokens = tokenize(&ARITHMETIC, b"a1b".to_vec()).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].lexeme, "a1");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].lexeme, "b");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize(&ARITHMETIC, b"+ - * / ^ ( )".to_vec()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Caret);
    assert_eq!(tokens[5].kind, TokenKind::OpenParen);
    assert_eq!(tokens[6].kind, TokenKind::CloseParen);
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_expression_without_whitespace() {
    let tokens = tokenize(&ARITHMETIC, b"3.14+2.0".to_vec()).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].lexeme, "3.14");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Float);
    assert_eq!(tokens[2].lexeme, "2.0");
}

#[test]
fn test_tokenize_caret_terminates_variable() {
    let tokens = tokenize(&ARITHMETIC, b"a^b".to_vec()).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[1].kind, TokenKind::Caret);
    assert_eq!(tokens[2].kind, TokenKind::Variable);
}

#[test]
fn test_tokenize_whitespace_elided() {
    let tokens = tokenize(&ARITHMETIC, b"  a   +  b  ".to_vec()).unwrap();

    assert_eq!(tokens.len(), 3);
    for token in &tokens {
        assert!(!token.lexeme.contains(' '));
        assert!(!token.lexeme.contains('\n'));
    }
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize(&ARITHMETIC, b"ab 1.5".to_vec()).unwrap();

    assert_eq!(tokens[0].position.row, 1);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[1].position.row, 1);
    assert_eq!(tokens[1].position.column, 4);
}

#[test]
fn test_tokenize_newline_advances_row() {
    let tokens = tokenize(&ARITHMETIC, b"a+\nb".to_vec()).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].position.row, 1);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[1].position.row, 1);
    assert_eq!(tokens[1].position.column, 2);
    assert_eq!(tokens[2].position.row, 2);
    assert_eq!(tokens[2].position.column, 1);
}

#[test]
fn test_tokenize_pushback_byte_starts_next_token() {
    let tokens = tokenize(&ARITHMETIC, b"1.5+".to_vec()).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "1.5");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].position.column, 4);
}

#[test]
fn test_tokenize_invalid_pattern() {
    let result = tokenize(&ARITHMETIC, b"a#b".to_vec());

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "InvalidPattern");
    assert_eq!(error.get_position().row, 1);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_tokenize_incomplete_float_fails() {
    // "1." dies in the non-accepting decimal-point state at end of input.
    let result = tokenize(&ARITHMETIC, b"1.".to_vec());

    assert!(result.is_err());
}

#[test]
fn test_tokenize_empty_input_fails() {
    // End of input hits the non-accepting start state.
    let result = tokenize(&ARITHMETIC, b"".to_vec());

    assert!(result.is_err());
}

#[test]
fn test_tokenize_whitespace_only_input() {
    let tokens = tokenize(&ARITHMETIC, b" \n ".to_vec()).unwrap();

    assert!(tokens.is_empty());
}

#[test]
fn test_scanner_exhaustion() {
    let mut scanner = Scanner::new(&ARITHMETIC, b"a".to_vec());

    assert!(!scanner.eof());
    let token = scanner.get_token().unwrap();
    assert_eq!(token.unwrap().kind, TokenKind::Variable);

    assert!(scanner.eof());
    assert!(scanner.get_token().unwrap().is_none());
    assert!(scanner.get_token().unwrap().is_none());
}

#[test]
fn test_token_display() {
    let tokens = tokenize(&ARITHMETIC, b"(a+b)*c/2^3.5-x".to_vec()).unwrap();

    let rendered = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>()
        .join(" ");

    assert_eq!(
        rendered,
        "lparen(\"(\") variable(\"a\") plus(\"+\") variable(\"b\") rparen(\")\") \
         times(\"*\") variable(\"c\") divide(\"/\") float(\"2\") pow(\"^\") \
         float(\"3.5\") minus(\"-\") variable(\"x\")"
    );
}

#[test]
fn test_print_tokens() {
    let mut scanner = Scanner::new(&ARITHMETIC, b"1.0+x".to_vec());
    assert!(print_tokens(&mut scanner).is_ok());
    assert!(scanner.eof());

    let mut scanner = Scanner::new(&ARITHMETIC, b"1.0+#".to_vec());
    assert!(print_tokens(&mut scanner).is_err());
}
