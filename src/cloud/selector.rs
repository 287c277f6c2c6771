//! Top-N selection with the two-phase sort.
//!
//! Ranking and display impose different orders: the selection must be the
//! N most frequent words, but the rendered cloud lists them
//! alphabetically. Two ordinary sorts get both without a composite
//! comparator across the whole mapping — rank by descending count, cut at
//! N, then re-sort the cut by word.

use rustc_hash::FxHashMap;

use crate::types::RankedEntry;

/// Select the `n` most frequent entries of `counts`, in display order.
///
/// Phase one sorts every entry by descending count, count ties broken by
/// ascending word, which makes the cut at `n` deterministic. Phase two
/// re-sorts the selected entries ascending by word (case-sensitive ordinal
/// comparison), word ties broken by count.
///
/// `n == 0` yields an empty sequence; `n == counts.len()` yields every
/// entry in alphabetical order regardless of counts.
///
/// # Panics
///
/// Panics if `n > counts.len()`; callers validate the selection size
/// before asking for it.
pub fn select_top(counts: &FxHashMap<String, u32>, n: usize) -> Vec<RankedEntry> {
    assert!(
        n <= counts.len(),
        "selection size {n} exceeds distinct word count {}",
        counts.len()
    );

    let mut ranked: Vec<RankedEntry> = counts
        .iter()
        .map(|(word, &count)| RankedEntry::new(word.clone(), count))
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(n);
    ranked.sort_by(|a, b| a.word.cmp(&b.word).then_with(|| a.count.cmp(&b.count)));

    ranked
}
