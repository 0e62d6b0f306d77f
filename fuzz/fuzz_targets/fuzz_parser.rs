#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use basejson::{Parser, ParserOptions, SyntaxError};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r", b"\r\n"];

// Bytes that stress the lenient separator rules.
static NOISE_TABLE: &[&[u8]] = &[b",", b",,", b"L", b"\\\"", b"\x1a"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size <= HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;

            prefix += append_from(WS_TABLE, &mut data[prefix..], limit);
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size, limit);
            let limit = max_size - prefix;
            if with_rng(|rng| rng.random_ratio(1, 4)) {
                prefix += append_from(NOISE_TABLE, &mut data[prefix..], limit);
            }
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one random entry of `table` to `buf` if it fits within `limit`.
/// Returns the number of bytes written.
fn append_from(table: &[&[u8]], buf: &mut [u8], limit: usize) -> usize {
    let piece = with_rng(|rng| table[rng.random_range(0..table.len())]);
    if piece.len() > limit {
        return 0;
    }
    buf[..piece.len()].copy_from_slice(piece);
    piece.len()
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2 + 1).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };

    let options = ParserOptions {
        strict_commas: flags & 1 != 0,
        max_nesting_depth: if flags & 2 != 0 {
            Some(usize::from(flags >> 2))
        } else {
            None
        },
    };
    let ours = Parser::from_bytes(data, options).parse();

    if let Ok(value) = &ours {
        // Printed output must be accepted again with the same result.
        let printed = value.to_string();
        assert_eq!(
            Parser::new(&printed, options).parse().as_ref(),
            Ok(value),
            "reparse of {printed:?}"
        );
    }

    // Whatever a conforming parser accepts must be accepted here too, apart
    // from numbers that do not fit and nesting limits.
    if serde_json::from_slice::<Value>(data).is_ok() {
        if let Err(err) = &ours {
            assert!(
                matches!(
                    err.kind(),
                    SyntaxError::NumberOutOfRange
                        | SyntaxError::InvalidNumber
                        | SyntaxError::NestingTooDeep(_)
                ),
                "rejected valid JSON: {err}"
            );
        }
    }
}

fuzz_target!(|data: &[u8]| parser(data));
