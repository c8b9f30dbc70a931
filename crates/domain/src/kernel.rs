// crates/domain/src/kernel.rs
use chord_kernel_shared_kernel::LookBack;
use serde::Serialize;
use tracing::trace;

use crate::sequence::SequenceTable;

/// Result of sliding the kernel over one position of a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionScore {
    /// Index of the first context token in the query.
    pub position: usize,
    pub context: Vec<String>,
    /// The chord right after the context.
    pub following: String,
    pub context_count: usize,
    pub extended_count: usize,
    pub frequency: f64,
}

impl PositionScore {
    /// Context tokens joined with commas.
    pub fn context_label(&self) -> String {
        self.context.join(",")
    }

    /// Context plus the following token, joined with commas.
    pub fn window_label(&self) -> String {
        let mut label = self.context_label();
        label.push(',');
        label.push_str(&self.following);
        label
    }

    #[inline]
    pub fn percentage(&self) -> f64 {
        self.frequency * 100.0
    }
}

/// `extended / context`, or `0.0` for a context the corpus never shows.
#[inline]
pub fn conditional_frequency(extended_count: usize, context_count: usize) -> f64 {
    if context_count == 0 {
        0.0
    } else {
        extended_count as f64 / context_count as f64
    }
}

/// Scores every window of `query`.
///
/// `context_table` must count windows of `look_back` tokens and
/// `extended_table` windows of `look_back + 1` tokens, both over the same
/// corpus. The result has `max(0, query.len() - look_back)` entries.
pub fn score_windows<'a>(
    query: &[&'a str],
    look_back: LookBack,
    context_table: &SequenceTable<'a>,
    extended_table: &SequenceTable<'a>,
) -> Vec<PositionScore> {
    let k = look_back.get();
    debug_assert_eq!(context_table.window_len(), k);
    debug_assert_eq!(extended_table.window_len(), k + 1);

    (0..query.len().saturating_sub(k))
        .map(|i| {
            let context = &query[i..i + k];
            let extended = &query[i..=i + k];
            let context_count = context_table.count_or_zero(context);
            let extended_count = extended_table.count_or_zero(extended);
            let frequency = conditional_frequency(extended_count, context_count);
            trace!(position = i, context_count, extended_count, frequency, "scored window");

            PositionScore {
                position: i,
                context: context.iter().map(|t| (*t).to_string()).collect(),
                following: query[i + k].to_string(),
                context_count,
                extended_count,
                frequency,
            }
        })
        .collect()
}
