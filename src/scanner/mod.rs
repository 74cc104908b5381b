//! Lexical analysis module for the recognizer.
//!
//! This module contains the scanner that drives the automaton over a raw
//! byte stream and produces a lazy sequence of tokens. It handles:
//!
//! - Maximal-munch tokenization with one-symbol pushback
//! - Token position tracking (1-based row and column)
//! - Transparent elision of whitespace and newline tokens
//! - The lexical error for byte sequences with no accepting path

pub mod scanner;
pub mod tokens;

#[cfg(test)]
mod tests;
