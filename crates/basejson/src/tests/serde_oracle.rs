//! `serde_json` as a reference parser.
//!
//! Generated values are narrowed to what both parsers treat identically:
//! string content without control characters and floats with a short exact
//! decimal form.

use alloc::string::{String, ToString};

use quickcheck::QuickCheck;

use crate::{Array, Object, Value, parse};

fn narrow(value: Value) -> Value {
    fn text(s: String) -> String {
        s.chars().filter(|c| !c.is_control()).collect()
    }

    match value {
        Value::Float(f) => Value::Float((f % 1.0e6).trunc() / 8.0),
        Value::String(s) => Value::String(text(s)),
        Value::Array(array) => Value::Array(array.into_iter().map(narrow).collect::<Array>()),
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(k, v)| (text(k), narrow(v)))
                .collect::<Object>(),
        ),
        other => other,
    }
}

#[test]
fn agrees_with_serde_json_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let value = narrow(value);
        let text = value.to_string();

        let Ok(theirs) = serde_json::from_str::<serde_json::Value>(&text) else {
            return false;
        };
        let Ok(ours) = parse(&text) else {
            return false;
        };
        serde_json::to_value(&ours).ok() == Some(theirs)
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Value) -> bool);
}

#[test]
fn serde_round_trip_of_sample() {
    let text = include_str!("../../data/sample.json");
    let ours = parse(text).unwrap();
    let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(serde_json::to_value(&ours).unwrap(), theirs);
    assert_eq!(ours.to_string(), serde_json::to_string(&theirs).unwrap());
}
