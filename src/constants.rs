/// Values that decode to `Value::Null`, compared ASCII case-insensitively.
pub const NULL_LITERALS: &[&str] = &["null", "nil", "none"];

/// Wraps a value that must stay text even if it spells a null literal.
pub const LITERAL_QUOTE: char = '`';

/// Bracket segments allowed after the head of one key.
pub const DEFAULT_MAX_DEPTH: usize = 32;

pub const PAIR_SEPARATOR: u8 = b'&';

pub const KEY_VALUE_SEPARATOR: u8 = b'=';

#[inline]
pub fn is_null_literal(s: &str) -> bool {
    NULL_LITERALS
        .iter()
        .any(|literal| literal.eq_ignore_ascii_case(s))
}
