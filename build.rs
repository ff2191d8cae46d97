//! Build script to generate embedded word lists
//!
//! Reads the word list files and generates Rust source code with const
//! entry arrays (six symbols plus the written gloss per line).

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate the recognized-word dictionary
    generate_entry_list(
        "data/words.tsv",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Recognized two-syllable Jyutping words (six symbols + gloss each)",
    );

    // Generate the daily answer pool
    generate_entry_list(
        "data/answers.tsv",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Daily answer pool (subset of the recognized words)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words.tsv");
    println!("cargo:rerun-if-changed=data/answers.tsv");
}

fn generate_entry_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert!(
                fields.len() == 7,
                "{input_path}: expected 7 fields, got {} in line {line:?}",
                fields.len()
            );
            fields
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[[&str; 7]] = &[").unwrap();

    for fields in entries {
        let quoted: Vec<String> = fields.iter().map(|f| format!("\"{f}\"")).collect();
        writeln!(output, "    [{}],", quoted.join(", ")).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
