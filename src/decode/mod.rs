pub mod literal;
pub mod pairs;
pub mod path;
pub mod percent;

use std::borrow::Cow;
use std::io::Read;

use serde::de::DeserializeOwned;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::arena::Arena;
use crate::value::map_to_json;
use crate::{DecodeOptions, Error, Map, Result, Value};

use self::literal::resolve_literal;
use self::pairs::{split_pairs, RawPair};
use self::path::parse_key;
use self::percent::percent_decode;

pub fn parse(input: &str, options: &DecodeOptions) -> Result<Map> {
    let mut decoder = Decoder::new(options);
    decoder.decode_document(input)?;
    Ok(decoder.finish())
}

pub fn to_json(input: &str, options: &DecodeOptions) -> Result<serde_json::Value> {
    let map = parse(input, options)?;
    Ok(serde_json::Value::Object(map_to_json(map)))
}

pub fn from_str<T: DeserializeOwned>(input: &str, options: &DecodeOptions) -> Result<T> {
    let value = to_json(input, options)?;
    serde_json::from_value(value)
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &DecodeOptions) -> Result<T> {
    let text =
        std::str::from_utf8(input).map_err(|err| Error::decode(format!("invalid utf-8: {err}")))?;
    from_str(text, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(
    mut reader: R,
    options: &DecodeOptions,
) -> Result<T> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|err| Error::decode(format!("read failed: {err}")))?;
    from_str(&buf, options)
}

struct Decoder<'o> {
    options: &'o DecodeOptions,
    arena: Arena,
    pairs: usize,
}

impl<'o> Decoder<'o> {
    fn new(options: &'o DecodeOptions) -> Self {
        Self {
            options,
            arena: Arena::new(),
            pairs: 0,
        }
    }

    fn decode_document(&mut self, input: &str) -> Result<()> {
        for pair in split_pairs(input) {
            self.decode_pair(&pair).map_err(|err| {
                debug!(
                    kind = %err.kind,
                    pair = pair.location.pair,
                    offset = pair.location.offset,
                    "query pair rejected"
                );
                err.with_location(pair.location)
            })?;
            self.pairs += 1;
        }
        Ok(())
    }

    fn decode_pair(&mut self, pair: &RawPair<'_>) -> Result<()> {
        let path = parse_key(pair.key, self.options.max_depth)?;
        let segments: SmallVec<[Cow<'_, str>; 8]> = if self.options.decode_keys {
            path.segments()
                .iter()
                .map(|&segment| percent_decode(segment))
                .collect::<Result<_>>()?
        } else {
            path.segments().iter().map(|segment| Cow::Borrowed(*segment)).collect()
        };
        let value = self.decode_value(pair.value)?;
        trace!(
            pair = pair.location.pair,
            depth = path.depth(),
            null = value.is_null(),
            "decoded query pair"
        );
        self.arena
            .insert(&segments[..], value, self.options.duplicates)
    }

    fn decode_value(&self, raw: &str) -> Result<Value> {
        let decoded = percent_decode(raw)?;
        if self.options.null_literals {
            Ok(resolve_literal(&decoded))
        } else {
            Ok(Value::Text(decoded.into_owned()))
        }
    }

    fn finish(self) -> Map {
        debug!(
            pairs = self.pairs,
            nodes = self.arena.node_count(),
            "query string decoded"
        );
        self.arena.into_map()
    }
}
