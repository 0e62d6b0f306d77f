#![allow(missing_docs, dead_code)]

use basejson::{ParserOptions, parse_with_options};

pub const ORIGINAL: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "retries": 3,
        "temperature": 0.25,
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main"
        },
        {
            "type": "macro",
            "name": "println"
        }
    ],
    "matrix": [
        [
            "a"
        ]
    ],
    "trailing": {
        "status": "ok",
        "done": true
    }
}"#;

/// `ORIGINAL` with a type-suffixed integer and the comma slips lenient mode
/// tolerates: a doubled comma, trailing commas and a missing separator.
pub const LENIENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "retries": 3L,,
        "temperature": 0.25,
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio",
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main"
        }
        {
            "type": "macro",
            "name": "println"
        }
    ],
    "matrix": [
        [
            "a"
        ]
    ],
    "trailing": {
        "status": "ok",
        "done": true,
    }
}"#;

/// Parses `text` and renders the outcome on one line.
pub fn render(text: &str, options: ParserOptions) -> String {
    match parse_with_options(text, options) {
        Ok(value) => format!("ok: {value}"),
        Err(err) => format!("error: {err}"),
    }
}

pub fn render_all(texts: &[&str], options: ParserOptions) -> String {
    texts
        .iter()
        .map(|text| render(text, options))
        .collect::<Vec<_>>()
        .join("\n")
}
