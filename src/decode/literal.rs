use crate::constants::{is_null_literal, LITERAL_QUOTE};
use crate::Value;

/// Resolves a fully decoded value string into `Null` or `Text`.
///
/// A value wrapped in one pair of backticks is always text, with the
/// backticks stripped; this is how a literal `null` is written.
pub fn resolve_literal(decoded: &str) -> Value {
    if let Some(inner) = strip_literal_quotes(decoded) {
        return Value::Text(inner.to_string());
    }
    if is_null_literal(decoded) {
        return Value::Null;
    }
    Value::Text(decoded.to_string())
}

fn strip_literal_quotes(s: &str) -> Option<&str> {
    if s.len() < 2 {
        return None;
    }
    s.strip_prefix(LITERAL_QUOTE)?.strip_suffix(LITERAL_QUOTE)
}
