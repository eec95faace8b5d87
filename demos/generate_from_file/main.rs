//! Example reading text from a file, training a model on it, and then printing a
//! generated continuation of the corpus's opening characters.
//!
//! Usage: generate_from_file <FILE_PATH> <WINDOW_LENGTH> <N>
//! Using `cargo run`: `cargo run --example generate_from_file -- <FILE_PATH> <WINDOW_LENGTH> <N>`

use chargram::LanguageModel;

use std::{path::PathBuf, process::exit};

const USAGE: &str = "Usage: generate_from_file <FILE_PATH> <WINDOW_LENGTH> <N>";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        println!("{USAGE}");
        exit(1);
    }

    let text =
        std::fs::read_to_string(PathBuf::from(args[1].clone())).expect("could not read file");
    let window_length: usize = args[2]
        .parse()
        .expect("did not provide a valid window length");
    let target_length: usize = args[3]
        .parse()
        .expect("did not provide a valid text length");

    let mut model = LanguageModel::new(window_length, None).expect("window length must be positive");
    model.train(&text);

    let seed: String = text.chars().take(window_length).collect();
    let generated = model
        .generate(&seed, target_length)
        .expect("corpus is shorter than the window");
    println!("{generated}");
}
