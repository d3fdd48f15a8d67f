use memchr::{memchr, memchr_iter};

use crate::constants::{KEY_VALUE_SEPARATOR, PAIR_SEPARATOR};
use crate::error::Location;

/// One `key=value` segment of the query string, still percent-encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawPair<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub location: Location,
}

/// Splits on `&`, skipping empty segments, then on the first `=`.
/// A segment without `=` gets an empty value. Never fails.
pub fn split_pairs(input: &str) -> Vec<RawPair<'_>> {
    let bytes = input.as_bytes();
    let mut pairs = Vec::new();
    let mut start = 0;
    for idx in memchr_iter(PAIR_SEPARATOR, bytes) {
        push_pair(&mut pairs, input, start, idx);
        start = idx + 1;
    }
    push_pair(&mut pairs, input, start, bytes.len());
    pairs
}

fn push_pair<'a>(pairs: &mut Vec<RawPair<'a>>, input: &'a str, start: usize, end: usize) {
    if start == end {
        return;
    }
    let segment = &input[start..end];
    let (key, value) = match memchr(KEY_VALUE_SEPARATOR, segment.as_bytes()) {
        Some(eq) => (&segment[..eq], &segment[eq + 1..]),
        None => (segment, ""),
    };
    let location = Location {
        pair: pairs.len(),
        offset: start,
    };
    pairs.push(RawPair {
        key,
        value,
        location,
    });
}
