use crate::{
    automaton::automaton::{Automaton, ERROR_STATE},
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::Token;

/// A forward-only, single-pass tokenizer over one byte source.
///
/// The scanner drives the automaton byte by byte and finalizes a token as
/// soon as a transition fails out of an accepting state (maximal munch).
/// The byte that triggered the failure is pushed back and replayed as the
/// first byte of the next token. One scanner instance serves one input
/// stream.
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    source: Vec<u8>,
    pos: usize,
    /// The pushed-back symbol, if any. The inner `None` is the
    /// end-of-input marker; once it lands here the scanner is exhausted.
    pushback: Option<Option<u8>>,
    row: u32,
    column: u32,
}

impl<'a> Scanner<'a> {
    pub fn new(automaton: &'a Automaton, source: Vec<u8>) -> Scanner<'a> {
        Scanner {
            automaton,
            source,
            pos: 0,
            pushback: None,
            row: 1,
            column: 1,
        }
    }

    /// True once the end-of-input marker has been consumed; no further
    /// tokens will be produced.
    pub fn eof(&self) -> bool {
        self.pushback == Some(None)
    }

    fn read(&mut self) -> Option<u8> {
        let symbol = self.source.get(self.pos).copied();
        self.pos += 1;
        symbol
    }

    fn update_position(&mut self, byte: u8) {
        if byte == b'\n' {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    ///
    /// Whitespace and newline matches carry no semantic value and are
    /// dropped here without becoming visible to the caller. Fails with an
    /// invalid-pattern error when a transition dies outside an accepting
    /// state, tagged with the offending byte's position.
    pub fn get_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            if self.eof() {
                return Ok(None);
            }

            let start = Position {
                row: self.row,
                column: self.column,
            };
            let mut buffer: Vec<u8> = vec![];
            let mut state = self.automaton.start_state();

            loop {
                let symbol = match self.pushback.take() {
                    Some(symbol) => symbol,
                    None => self.read(),
                };

                let next_state = self.automaton.next(state, symbol);
                if next_state == ERROR_STATE {
                    if self.automaton.is_final(state) {
                        self.pushback = Some(symbol);
                        break;
                    }
                    return Err(Error::new(
                        ErrorImpl::InvalidPattern {
                            symbol: render_symbol(symbol),
                        },
                        Position {
                            row: self.row,
                            column: self.column,
                        },
                    ));
                }

                state = next_state;
                if let Some(byte) = symbol {
                    buffer.push(byte);
                    self.update_position(byte);
                }
            }

            match self.automaton.value(state) {
                Some(kind) => {
                    let lexeme = String::from_utf8_lossy(&buffer).into_owned();
                    return Ok(Some(MK_TOKEN!(kind, lexeme, start)));
                }
                // Skip value: drop the match and scan the next token.
                None => continue,
            }
        }
    }
}

fn render_symbol(symbol: Option<u8>) -> String {
    match symbol {
        Some(byte) => (byte as char).to_string(),
        None => String::from("end of input"),
    }
}

/// Eagerly collects every token of `source`. Convenience wrapper around
/// the lazy scanner, mainly for tests and harnesses.
pub fn tokenize(automaton: &Automaton, source: Vec<u8>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(automaton, source);
    let mut tokens = vec![];

    while let Some(token) = scanner.get_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

/// Diagnostic helper: prints `name("lexeme") ` for each token until the
/// scanner is exhausted.
pub fn print_tokens(scanner: &mut Scanner) -> Result<(), Error> {
    while let Some(token) = scanner.get_token()? {
        print!("{} ", token);
    }

    Ok(())
}
