use std::{env, fs, path::PathBuf};

use recognizer::{
    automaton::automaton::ARITHMETIC, display_error, recognizer::recognizer::Recognizer,
    scanner::scanner::Scanner,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let source = fs::read(file_path).expect("Failed to read file!");

    let scanner = Scanner::new(&ARITHMETIC, source);
    let mut recognizer = Recognizer::new(scanner);

    match recognizer.recognize() {
        Ok(true) => print!("accept"),
        Ok(false) => print!("reject"),
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            panic!()
        }
    }
}
