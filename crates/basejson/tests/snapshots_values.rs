#![expect(missing_docs)]

mod common;

use basejson::{ParserOptions, Value, parse};
use common::{LENIENT, ORIGINAL, render, render_all};

#[test]
fn snapshot_compact_output() {
    insta::assert_snapshot!(render(ORIGINAL, ParserOptions::default()), @r#"ok: {"entities":[{"name":"main","type":"function"},{"name":"println","type":"macro"}],"matrix":[["a"]],"moderation":{"decision":"allow","reason":null},"request":{"filename":"example.rs","language":"rust","options":{"features":["serde","tokio"],"opt_level":"2"},"retries":3,"temperature":0.25},"snippets":["fn main() {}","println!(\"hi\")"],"trailing":{"done":true,"status":"ok"}}"#);
}

#[test]
fn lenient_document_matches_original() {
    assert_eq!(parse(LENIENT), parse(ORIGINAL));

    let strict = ParserOptions {
        strict_commas: true,
        ..Default::default()
    };
    assert_eq!(render(ORIGINAL, strict), render(ORIGINAL, ParserOptions::default()));
    let err = basejson::parse_with_options(LENIENT, strict).unwrap_err();
    assert_eq!(err.kind(), &basejson::SyntaxError::UnexpectedCharacter(b','));
    assert_eq!((err.line(), err.column(), err.offset()), (10, 23, 183));
    assert!(err.context().starts_with(b"ries\": 3L,,"));
}

#[test]
fn snapshot_diagnostics() {
    let texts = [
        r#"{"a": 1"#,
        "[1, 2,, x]",
        r#"{"n": 99999999999999999999}"#,
        "[\n  true,\n  nul\n]",
        r#""abc"#,
        "",
    ];
    insta::assert_snapshot!(render_all(&texts, ParserOptions::default()), @r#"
    error: unterminated object at line 1, column 8 (offset 7) near `{"a": 1`
    error: unexpected character 'x' at line 1, column 9 (offset 8) near `[1, 2,, x]`
    error: number out of range at line 1, column 7 (offset 6) near `{"n": 9999999999`
    error: expected literal `null` at line 3, column 6 (offset 15) near `rue,\n  nul\n]`
    error: unterminated string at line 1, column 5 (offset 4) near `"abc`
    error: unexpected end of input at line 1, column 1 (offset 0) near ``
    "#);
}

#[test]
fn snapshot_strict_and_depth() {
    let strict = ParserOptions {
        strict_commas: true,
        ..Default::default()
    };
    insta::assert_snapshot!(render_all(&["[1,]", "[1 2]", "[1, 2]"], strict), @r"
    error: unexpected character ']' at line 1, column 4 (offset 3) near `[1,]`
    error: unexpected character '2' at line 1, column 4 (offset 3) near `[1 2]`
    ok: [1,2]
    ");

    let shallow = ParserOptions {
        max_nesting_depth: Some(1),
        ..Default::default()
    };
    insta::assert_snapshot!(render_all(&["[1]", r#"{"a": []}"#], shallow), @r#"
    ok: [1]
    error: nesting depth exceeds 1 at line 1, column 7 (offset 6) near `{"a": []}`
    "#);
}

#[test]
fn snapshot_escaped_strings() {
    let value = Value::Array(
        [
            Value::string("tab\there \"q\" \\ \u{1}"),
            Value::string("line\nbreak"),
            Value::string("plain é"),
        ]
        .into_iter()
        .collect(),
    );
    insta::assert_snapshot!(value.to_string(), @r#"["tab\there \"q\" \\ \u0001","line\nbreak","plain é"]"#);
    assert_eq!(parse(&value.to_string()), Ok(value));
}
