//! Utility macros for the recognizer.
//!
//! This module defines the `MK_TOKEN!` helper macro used by the scanner
//! and its tests to reduce boilerplate when constructing tokens.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact matched text
/// * `$position` - The token's start position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Float, "3.14".to_string(), Position { row: 1, column: 1 });
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}
