// crates/domain/src/sequence.rs
use chord_kernel_shared_kernel::value_objects::progression::TOKEN_DELIMITER;
use hashbrown::HashMap;
use tracing::debug;

/// Splits corpus text into pieces, each a list of tokens.
///
/// Pieces are separated by line breaks (`\n`, optionally preceded by `\r`).
/// Tokens are taken verbatim between commas.
pub fn pieces(corpus: &str) -> impl Iterator<Item = Vec<&str>> {
    corpus.lines().map(|piece| piece.split(TOKEN_DELIMITER).collect())
}

/// Occurrence counts of every contiguous `window_len`-token window of a corpus.
///
/// Keys borrow from the corpus text the table was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceTable<'a> {
    window_len: usize,
    counts: HashMap<Vec<&'a str>, usize>,
}

impl<'a> SequenceTable<'a> {
    pub fn new(window_len: usize) -> Self {
        Self { window_len, counts: HashMap::new() }
    }

    /// Tallies the windows of one piece.
    ///
    /// Start indices run over `0..len - window_len`, so the window ending on
    /// the last token of the piece is never counted. Every counted window has
    /// at least one token after it, which keeps a table of length `n + 1`
    /// consistent with the table of length `n` built from the same corpus.
    pub fn add_piece(&mut self, tokens: &[&'a str]) {
        let n = self.window_len;
        for start in 0..tokens.len().saturating_sub(n) {
            *self.counts.entry_ref(&tokens[start..start + n]).or_insert(0) += 1;
        }
    }

    /// Number of times `window` was seen, zero when it never was.
    pub fn count_or_zero(&self, window: &[&'a str]) -> usize {
        self.counts.get(window).copied().unwrap_or(0)
    }

    #[inline]
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Number of distinct windows.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Builds the frequency table of `window_len`-token windows over `corpus`.
pub fn count_windows(window_len: usize, corpus: &str) -> SequenceTable<'_> {
    let mut table = SequenceTable::new(window_len);
    for piece in pieces(corpus) {
        table.add_piece(&piece);
    }
    debug!(window_len, distinct = table.distinct(), total = table.total(), "built sequence table");
    table
}
