//! Error types and error handling for the recognizer.
//!
//! This module defines the error types used by the scanning stage.
//! It includes:
//!
//! - Error structures with source position information
//! - The lexical error raised when no accepting automaton path exists
//! - Error formatting and display functionality
//!
//! Grammar violations are deliberately not represented here: the
//! recognizer reports those as plain boolean rejections.

pub mod errors;
