//! Extract readable text from an HTML page piped on stdin.
//!
//! Usage: `curl -s https://example.com/recipe | extract_stdin`
//!
//! Prints the same JSON object as `GET /api/extract`; a page that is too
//! short is reported as `{"ok":false,"error":"Could not extract readable text"}`.

use leftover_chef::{extract_html, ExtractionResult};
use std::io::{self, Read};

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = ExtractionResult::from(extract_html(&html));
    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
