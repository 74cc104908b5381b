use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::scanner::tokens::TokenKind;

pub type StateId = usize;

/// Sentinel returned for every undefined transition. Not a member of the
/// declared state set.
pub const ERROR_STATE: StateId = 0;

lazy_static! {
    /// The shared arithmetic-expression table. Built once, immutable
    /// thereafter; the scanner always receives it by reference.
    pub static ref ARITHMETIC: Automaton = Automaton::arithmetic();
}

/// An immutable, table-driven DFA over the byte alphabet 0..=255.
///
/// Every (declared state, byte) pair maps to either a declared state or
/// `ERROR_STATE`. States carrying a semantic value of `None` match
/// skippable input (whitespace classes).
pub struct Automaton {
    states: HashSet<StateId>,
    transitions: Vec<[StateId; 256]>,
    values: Vec<Option<TokenKind>>,
    start_state: StateId,
    final_states: HashSet<StateId>,
}

impl Automaton {
    /// Returns the successor of `state` on `symbol`.
    ///
    /// `None` is the end-of-input marker and always yields `ERROR_STATE`.
    /// `state` must be in the declared state set; violating that is a
    /// programming error, not a runtime error.
    pub fn next(&self, state: StateId, symbol: Option<u8>) -> StateId {
        match symbol {
            None => ERROR_STATE,
            Some(byte) => {
                assert!(self.states.contains(&state));
                self.transitions[state][byte as usize]
            }
        }
    }

    /// Returns the semantic value of `state`, `None` meaning "skip".
    pub fn value(&self, state: StateId) -> Option<TokenKind> {
        assert!(self.states.contains(&state));
        self.values[state]
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    fn set_transition(&mut self, from: StateId, symbol: u8, to: StateId) {
        self.transitions[from][symbol as usize] = to;
    }

    fn set_value(&mut self, state: StateId, kind: TokenKind) {
        self.values[state] = Some(kind);
    }

    /// Builds the fixed table for arithmetic expressions.
    ///
    /// Float literals are `digit digit* (. digit digit*)?`, variables are
    /// letter runs with an optional digit tail, and each operator and paren
    /// gets its own single-byte accepting state. Space and newline land in
    /// accepting states with no semantic value, so the scanner drops them.
    pub fn arithmetic() -> Automaton {
        let mut automaton = Automaton {
            states: (1..=15).collect(),
            transitions: vec![[ERROR_STATE; 256]; 16],
            values: vec![None; 16],
            start_state: 1,
            final_states: [2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
                .into_iter()
                .collect(),
        };

        for digit in b'0'..=b'9' {
            automaton.set_transition(1, digit, 2);
            automaton.set_transition(2, digit, 2);
            automaton.set_transition(3, digit, 4);
            automaton.set_transition(4, digit, 4);
            automaton.set_transition(5, digit, 6);
            automaton.set_transition(6, digit, 6);
        }

        // Decimal point: requires at least one fractional digit (state 3
        // is not final).
        automaton.set_transition(2, b'.', 3);

        // The bytes between 'Z' and 'a' are not letters.
        for letter in (b'A'..=b'Z').chain(b'a'..=b'z') {
            automaton.set_transition(1, letter, 5);
            automaton.set_transition(5, letter, 5);
        }

        automaton.set_transition(1, b'+', 7);
        automaton.set_transition(1, b'-', 8);
        automaton.set_transition(1, b'*', 9);
        automaton.set_transition(1, b'/', 10);
        automaton.set_transition(1, b'^', 11);
        automaton.set_transition(1, b'(', 12);
        automaton.set_transition(1, b')', 13);
        automaton.set_transition(1, b' ', 14);
        automaton.set_transition(1, b'\n', 15);

        automaton.set_value(2, TokenKind::Float);
        automaton.set_value(4, TokenKind::Float);
        automaton.set_value(5, TokenKind::Variable);
        automaton.set_value(6, TokenKind::Variable);
        automaton.set_value(7, TokenKind::Plus);
        automaton.set_value(8, TokenKind::Dash);
        automaton.set_value(9, TokenKind::Star);
        automaton.set_value(10, TokenKind::Slash);
        automaton.set_value(11, TokenKind::Caret);
        automaton.set_value(12, TokenKind::OpenParen);
        automaton.set_value(13, TokenKind::CloseParen);

        automaton
    }
}
