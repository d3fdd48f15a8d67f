use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `%` escape is not two hex digits, or the escaped bytes are not UTF-8.
    Decode,
    /// A key has an empty head or unbalanced/misplaced brackets.
    MalformedKey,
    /// A position is used as both a leaf and a container.
    StructuralConflict,
    /// The parsed tree does not fit the requested target type.
    Deserialize,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Decode => "decode",
            ErrorKind::MalformedKey => "malformed key",
            ErrorKind::StructuralConflict => "structural conflict",
            ErrorKind::Deserialize => "deserialize",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the query string a pair-level error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Index of the pair among the non-empty `&`-separated pairs.
    pub pair: usize,
    /// Byte offset of the pair's first byte in the input.
    pub offset: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pair {} (byte {})", self.pair, self.offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    pub fn malformed_key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedKey, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StructuralConflict, message)
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Deserialize, message)
    }

    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_decode(&self) -> bool {
        self.kind == ErrorKind::Decode
    }

    pub fn is_malformed_key(&self) -> bool {
        self.kind == ErrorKind::MalformedKey
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == ErrorKind::StructuralConflict
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "{} at {location}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_display_with_location() {
        let err = Error::conflict("key `a` is already a leaf")
            .with_location(Location { pair: 1, offset: 4 });
        assert_eq!(err.to_string(), "key `a` is already a leaf at pair 1 (byte 4)");
        assert!(err.is_conflict());
    }

    #[rstest::rstest]
    fn test_display_without_location() {
        let err = Error::decode("invalid percent escape");
        assert_eq!(err.to_string(), "invalid percent escape");
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
