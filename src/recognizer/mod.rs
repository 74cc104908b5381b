//! Recognizer module for validating arithmetic expressions.
//!
//! This module contains the recursive-descent recognizer that consumes
//! the scanner's token sequence and checks it against an LL(1) grammar
//! with operator precedence (`^` over `*` `/` over `+` `-`). It handles:
//!
//! - Predictive production choice on a single token of lookahead
//! - Parenthesized sub-expressions and unary sign
//! - Fail-fast boolean rejection of grammar violations
//! - Propagation of lexical errors from the scanner
//!
//! The recognizer builds no syntax tree; the only outcome is a verdict.

pub mod recognizer;
