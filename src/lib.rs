#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf};

use crate::errors::errors::{Error, ErrorTip};

pub mod automaton;
pub mod errors;
pub mod macros;
pub mod recognizer;
pub mod scanner;

/// A 1-based row/column position in the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

pub fn get_line_at_row(file: PathBuf, row: u32) -> String {
    let content = fs::read_to_string(&file).unwrap();

    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        if line_number == row {
            return line.to_string();
        }

        line_number += 1;
    }

    panic!("Failed to find line {} in file", row);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_row() {
        let line = super::get_line_at_row(std::path::PathBuf::from("tests/test_file.txt"), 1);
        assert_eq!(line, "3.14+2.0\n");

        let line = super::get_line_at_row(std::path::PathBuf::from("tests/test_file.txt"), 2);
        assert_eq!(line, "(a+b)*c\n");
    }
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        error: message
        -> input.txt
           |
         2 | 3.14+#
           | -----^
    */

    let position = error.get_position();
    let line_text = get_line_at_row(file.clone(), position.row);

    let line_string = position.row.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
