use memchr::{memchr, memchr2};
use smallvec::SmallVec;

use crate::{Error, Result};

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// A decomposed key: `head[seg1][seg2]...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPath<'a> {
    segments: Segments<'a>,
}

impl<'a> KeyPath<'a> {
    pub fn head(&self) -> &'a str {
        self.segments[0]
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Bracket groups after the head.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }
}

/// Parses `head ("[" segment "]")*`. Segment text is returned verbatim.
pub fn parse_key(key: &str, max_depth: usize) -> Result<KeyPath<'_>> {
    let bytes = key.as_bytes();
    let head_end = memchr2(b'[', b']', bytes).unwrap_or(bytes.len());
    if head_end == 0 {
        return Err(Error::malformed_key(format!("key `{key}` has an empty name")));
    }
    if bytes.get(head_end) == Some(&b']') {
        return Err(unbalanced(key));
    }

    let mut segments = Segments::new();
    segments.push(&key[..head_end]);

    let mut idx = head_end;
    while idx < bytes.len() {
        if bytes[idx] != b'[' {
            return Err(Error::malformed_key(format!(
                "unexpected `{}` after `]` in key `{key}`",
                key[idx..].chars().next().unwrap_or(']')
            )));
        }
        let open = idx + 1;
        let close = memchr(b']', &bytes[open..])
            .map(|offset| open + offset)
            .ok_or_else(|| unbalanced(key))?;
        if segments.len() > max_depth {
            return Err(Error::malformed_key(format!(
                "key `{key}` nests deeper than {max_depth} levels"
            )));
        }
        segments.push(&key[open..close]);
        idx = close + 1;
    }

    Ok(KeyPath { segments })
}

fn unbalanced(key: &str) -> Error {
    Error::malformed_key(format!("unbalanced brackets in key `{key}`"))
}
