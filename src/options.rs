use crate::constants::DEFAULT_MAX_DEPTH;

/// Policy for a leaf stored where an earlier pair already stored a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Duplicates {
    /// The later value replaces the earlier one, keeping its position.
    #[default]
    Last,
    /// Fail with a structural conflict.
    Reject,
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub max_depth: usize,
    pub decode_keys: bool,
    pub null_literals: bool,
    pub duplicates: Duplicates,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_decode_keys(mut self, decode_keys: bool) -> Self {
        self.decode_keys = decode_keys;
        self
    }

    pub fn with_null_literals(mut self, null_literals: bool) -> Self {
        self.null_literals = null_literals;
        self
    }

    pub fn with_duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            decode_keys: true,
            null_literals: true,
            duplicates: Duplicates::default(),
        }
    }
}
