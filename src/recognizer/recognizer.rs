use crate::{
    errors::errors::Error,
    scanner::{
        scanner::Scanner,
        tokens::{Token, TokenKind},
    },
};

/// A recursive-descent recognizer for the grammar
///
/// ```text
/// E  -> T E'
/// E' -> (+|-) T E'  | ε
/// T  -> X T'
/// T' -> (*|/) X T'  | ε
/// X  -> Y X'
/// X' -> ^ Y X'      | ε
/// Y  -> (+|-) F | F
/// F  -> ( E ) | FLOAT | VARIABLE
/// ```
///
/// One method per nonterminal; the production is chosen on a single token
/// of lookahead with no backtracking. Grammar violations come back as
/// `Ok(false)` through every level, while scanner errors travel the `Err`
/// path untouched. The tail productions E', T' and X' are realized as
/// loops so long operator chains cost no stack.
pub struct Recognizer<'a> {
    scanner: Scanner<'a>,
    last: Option<Token>,
}

impl<'a> Recognizer<'a> {
    pub fn new(scanner: Scanner<'a>) -> Recognizer<'a> {
        Recognizer {
            scanner,
            last: None,
        }
    }

    /// Runs the start symbol over the whole token stream.
    ///
    /// Acceptance requires both a successful derivation of `E` and an
    /// exhausted lookahead: trailing tokens reject even when a prefix of
    /// the input matched.
    pub fn recognize(&mut self) -> Result<bool, Error> {
        self.last = self.scanner.get_token()?;
        let status = self.expression()?;
        Ok(status && self.last.is_none())
    }

    fn lookahead(&self) -> Option<TokenKind> {
        self.last.as_ref().map(|token| token.kind)
    }

    /// Consumes the expected terminal and refills the lookahead.
    ///
    /// On a mismatch nothing is consumed and the verdict is false. This
    /// is the only place the recognizer's state advances.
    fn terminal(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.lookahead() == Some(kind) {
            self.last = self.scanner.get_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // E -> T E'
    fn expression(&mut self) -> Result<bool, Error> {
        Ok(self.term()? && self.expression_rest()?)
    }

    // E' -> (+|-) T E' | ε
    fn expression_rest(&mut self) -> Result<bool, Error> {
        while let Some(kind @ (TokenKind::Plus | TokenKind::Dash)) = self.lookahead() {
            if !(self.terminal(kind)? && self.term()?) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    // T -> X T'
    fn term(&mut self) -> Result<bool, Error> {
        Ok(self.exponent()? && self.term_rest()?)
    }

    // T' -> (*|/) X T' | ε
    fn term_rest(&mut self) -> Result<bool, Error> {
        while let Some(kind @ (TokenKind::Star | TokenKind::Slash)) = self.lookahead() {
            if !(self.terminal(kind)? && self.exponent()?) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    // X -> Y X'
    fn exponent(&mut self) -> Result<bool, Error> {
        Ok(self.unary()? && self.exponent_rest()?)
    }

    // X' -> ^ Y X' | ε
    fn exponent_rest(&mut self) -> Result<bool, Error> {
        while self.lookahead() == Some(TokenKind::Caret) {
            if !(self.terminal(TokenKind::Caret)? && self.unary()?) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    // Y -> (+|-) F | F
    fn unary(&mut self) -> Result<bool, Error> {
        match self.lookahead() {
            Some(kind @ (TokenKind::Plus | TokenKind::Dash)) => {
                Ok(self.terminal(kind)? && self.primary()?)
            }
            _ => self.primary(),
        }
    }

    // F -> ( E ) | FLOAT | VARIABLE
    fn primary(&mut self) -> Result<bool, Error> {
        match self.lookahead() {
            Some(TokenKind::OpenParen) => Ok(self.terminal(TokenKind::OpenParen)?
                && self.expression()?
                && self.terminal(TokenKind::CloseParen)?),
            Some(TokenKind::Float) => self.terminal(TokenKind::Float),
            Some(TokenKind::Variable) => self.terminal(TokenKind::Variable),
            _ => Ok(false),
        }
    }
}
