//! Deterministic finite automaton definition for the scanner.
//!
//! This module contains the immutable, table-driven DFA that classifies
//! byte sequences into token kinds. It handles:
//!
//! - The transition table over the full byte alphabet
//! - Per-state semantic values (token kinds, or skip for whitespace)
//! - The start state and the set of accepting states
//! - The hand-built table for arithmetic expressions

pub mod automaton;
