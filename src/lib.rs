//! Decoder for nested bracket-notation query strings.
//!
//! `a[0][n]=John&a[0][a]=15` decodes to `{"a": [{"n": "John", "a": "15"}]}`:
//! keys are split into bracket segments, values are percent-decoded, and a
//! container becomes a sequence when its keys are exactly `0..n` in order.
//! Scalars stay text; `null`, `nil` and `none` (any case) decode to
//! [`Value::Null`] unless wrapped in backticks.
//!
//! ```
//! let map = qsparser::parse("a[0]=1&a[1]=2&b=nil").unwrap();
//! assert_eq!(map["a"][1].as_str(), Some("2"));
//! assert!(map["b"].is_null());
//! ```

pub mod arena;
pub mod constants;
pub mod decode;
pub mod error;
pub mod options;
pub mod value;

use std::io::Read;

use serde::de::DeserializeOwned;

pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::{DecodeOptions, Duplicates};
pub use crate::value::{Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Decodes a query string (without the leading `?`) into its root mapping.
pub fn parse(query: &str) -> Result<Map> {
    parse_with_options(query, &DecodeOptions::default())
}

pub fn parse_with_options(query: &str, options: &DecodeOptions) -> Result<Map> {
    decode::parse(query, options)
}

pub fn decode_to_value(query: &str) -> Result<serde_json::Value> {
    decode_to_value_with_options(query, &DecodeOptions::default())
}

pub fn decode_to_value_with_options(
    query: &str,
    options: &DecodeOptions,
) -> Result<serde_json::Value> {
    decode::to_json(query, options)
}

pub fn from_str<T: DeserializeOwned>(query: &str) -> Result<T> {
    from_str_with_options(query, &DecodeOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(
    query: &str,
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_str(query, options)
}

pub fn from_slice<T: DeserializeOwned>(query: &[u8]) -> Result<T> {
    from_slice_with_options(query, &DecodeOptions::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    query: &[u8],
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_slice(query, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    from_reader_with_options(reader, &DecodeOptions::default())
}

pub fn from_reader_with_options<T: DeserializeOwned, R: Read>(
    reader: R,
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_reader(reader, options)
}
