//! Build script to generate embedded puzzle packs
//!
//! Reads the pack data file and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_pack_list(
        "data/packs.txt",
        &Path::new(&out_dir).join("packs.rs"),
        "PACKS",
        "Built-in word ladder packs as (name, rows) pairs",
    );

    // Rebuild if pack data changes
    println!("cargo:rerun-if-changed=data/packs.txt");
}

fn generate_pack_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let packs = parse_packs(&content);
    let count = packs.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated pack list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &[&str])] = &[").unwrap();

    for (name, rows) in packs {
        writeln!(output, "    ({name:?}, &[").unwrap();
        for row in rows {
            // Debug formatting keeps leading spaces and escapes quotes
            writeln!(output, "        {row:?},").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of packs in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

/// Split the data file into named packs, keeping leading spaces on rows
fn parse_packs(content: &str) -> Vec<(String, Vec<String>)> {
    let mut packs: Vec<(String, Vec<String>)> = Vec::new();

    for line in content.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            packs.push((name.trim().to_string(), Vec::new()));
        } else {
            let (_, rows) = packs
                .last_mut()
                .unwrap_or_else(|| panic!("Row '{line}' appears before any [pack] header"));
            rows.push(line.to_string());
        }
    }

    for (name, rows) in &packs {
        assert!(!rows.is_empty(), "Pack '{name}' has no rows");
        for row in rows {
            check_letters(name, row);
        }
    }

    packs
}

/// Letter cells must be A-Z so that every one of them can be guessed
fn check_letters(name: &str, row: &str) {
    for ch in row.chars() {
        let is_letter = ch.to_uppercase().ne(ch.to_lowercase());
        assert!(
            !is_letter || ch.is_ascii_alphabetic(),
            "Pack '{name}': letter '{ch}' in row '{row}' is not in A-Z"
        );
    }
}
