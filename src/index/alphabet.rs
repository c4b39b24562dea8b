//! Alphabet compaction
//!
//! The skew construction works on dense integer keys. Symbols of any totally
//! ordered type are mapped onto `1..=K` in sorted order, leaving key `0` for
//! the sentinel that pads the end of the text.

/// Key of the sentinel symbol, smaller than every real key
pub const SENTINEL: usize = 0;

/// Number of sentinel keys appended after the text
pub const SENTINEL_PADDING: usize = 3;

/// Sorted set of the distinct symbols of a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<T> {
    symbols: Vec<T>,
}

impl<T: Ord + Copy> Alphabet<T> {
    /// Collect the distinct symbols of `source`
    pub fn of(source: &[T]) -> Self {
        let mut symbols = source.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// Number of distinct symbols (the sentinel is not counted)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    /// Largest key handed out; keys live in `0..=max_key()`
    pub fn max_key(&self) -> usize {
        self.symbols.len()
    }

    /// Key of a symbol, if it belongs to the alphabet
    pub fn key(&self, symbol: T) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok().map(|i| i + 1)
    }

    /// Encode `source` as keys followed by the sentinel padding.
    ///
    /// Every symbol of `source` must belong to the alphabet.
    pub fn encode(&self, source: &[T]) -> Vec<usize> {
        let mut keys = Vec::with_capacity(source.len() + SENTINEL_PADDING);
        keys.extend(
            source
                .iter()
                .map(|s| self.symbols.partition_point(|x| x < s) + 1),
        );
        keys.extend([SENTINEL; SENTINEL_PADDING]);
        keys
    }
}
