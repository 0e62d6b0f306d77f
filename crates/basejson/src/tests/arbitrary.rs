use alloc::string::String;

use quickcheck::{Arbitrary, Gen};

use crate::{Array, Object, Value};

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonNumber(f64);

impl Arbitrary for JsonNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }

        Self(value)
    }
}

/// Text that is valid as raw string content: no quote and no backslash, so
/// nothing in it can end the literal or start an escape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawText(pub(crate) String);

impl Arbitrary for RawText {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(
            String::arbitrary(g)
                .chars()
                .filter(|c| !matches!(c, '"' | '\\'))
                .collect(),
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(self.0.shrink().map(|s| {
            Self(s.chars().filter(|c| !matches!(c, '"' | '\\')).collect())
        }))
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn scalar(g: &mut Gen) -> Value {
            match usize::arbitrary(g) % 5 {
                0 => Value::Null,
                1 => Value::Bool(bool::arbitrary(g)),
                2 => Value::Int(i64::arbitrary(g)),
                3 => Value::Float(JsonNumber::arbitrary(g).0),
                _ => Value::String(RawText::arbitrary(g).0),
            }
        }

        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                return scalar(g);
            }
            match usize::arbitrary(g) % 7 {
                0..=4 => scalar(g),
                5 => {
                    let len = usize::arbitrary(g) % 4;
                    let mut array = Array::new();
                    for _ in 0..len {
                        array.append(gen_val(g, depth - 1));
                    }
                    Value::Array(array)
                }
                _ => {
                    let len = usize::arbitrary(g) % 4;
                    let mut object = Object::new();
                    for _ in 0..len {
                        object.put(RawText::arbitrary(g).0, gen_val(g, depth - 1));
                    }
                    Value::Object(object)
                }
            }
        }

        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }
}
