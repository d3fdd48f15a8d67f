use std::borrow::Cow;

use memchr::memchr;

use crate::{Error, Result};

/// Decodes `%XX` escapes, interpreting the resulting bytes as UTF-8.
/// `+` is left alone.
pub fn percent_decode(input: &str) -> Result<Cow<'_, str>> {
    let bytes = input.as_bytes();
    let Some(first) = memchr(b'%', bytes) else {
        return Ok(Cow::Borrowed(input));
    };

    let mut out = Vec::with_capacity(bytes.len());
    out.extend_from_slice(&bytes[..first]);
    let mut idx = first;
    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte != b'%' {
            out.push(byte);
            idx += 1;
            continue;
        }
        let escaped = bytes
            .get(idx + 1..idx + 3)
            .and_then(|hex| Some((hex_value(hex[0])? << 4) | hex_value(hex[1])?))
            .ok_or_else(|| Error::decode(invalid_escape_message(input, idx)))?;
        out.push(escaped);
        idx += 3;
    }

    String::from_utf8(out)
        .map(Cow::Owned)
        .map_err(|err| Error::decode(format!("escaped bytes are not valid utf-8: {err}")))
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn invalid_escape_message(input: &str, idx: usize) -> String {
    let end = input.len().min(idx + 3);
    let snippet = input.get(idx..end).unwrap_or("%");
    format!("invalid percent escape `{snippet}` in `{input}`")
}
