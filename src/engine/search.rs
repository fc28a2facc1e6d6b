use std::cmp::Reverse;
use std::collections::HashMap;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config as MatcherConfig, Matcher, Utf32Str};

use crate::catalog::Shortcut;
use crate::engine::display_group::DisplayGroup;
use crate::engine::flatten::FlatShortcut;

/// Relevance scorer for one query. `None` means the haystack does not match.
pub trait FuzzyScorer {
    fn score(&mut self, haystack: &str) -> Option<u32>;
}

/// fzf-style scorer: the whole query is one fuzzy needle, spaces included,
/// with smart case and smart unicode normalization.
pub struct NucleoScorer {
    atom: Atom,
    matcher: Matcher,
    buf: Vec<char>,
}

impl NucleoScorer {
    pub fn new(query: &str) -> Self {
        Self {
            atom: Atom::new(
                query,
                CaseMatching::Smart,
                Normalization::Smart,
                AtomKind::Fuzzy,
                false,
            ),
            matcher: Matcher::new(MatcherConfig::DEFAULT),
            buf: Vec::with_capacity(64),
        }
    }
}

impl FuzzyScorer for NucleoScorer {
    fn score(&mut self, haystack: &str) -> Option<u32> {
        self.buf.clear();
        let utf32 = Utf32Str::new(haystack, &mut self.buf);
        self.atom.score(utf32, &mut self.matcher).map(u32::from)
    }
}

/// Matching records, best first. Equal scores keep source order.
pub fn rank_with<'a, S: FuzzyScorer>(
    scorer: &mut S,
    records: &'a [FlatShortcut],
) -> Vec<&'a FlatShortcut> {
    let mut hits: Vec<(&FlatShortcut, u32)> = records
        .iter()
        .filter_map(|record| scorer.score(&record.match_key()).map(|s| (record, s)))
        .collect();
    hits.sort_by_key(|&(_, score)| Reverse(score));
    hits.into_iter().map(|(record, _)| record).collect()
}

pub fn rank<'a>(query: &str, records: &'a [FlatShortcut]) -> Vec<&'a FlatShortcut> {
    rank_with(&mut NucleoScorer::new(query), records)
}

/// Bucket ranked records by `category/group`.
///
/// Groups appear in the order their first member shows up in `ranked`, and members
/// keep their ranked order, so the best matches float to the top-left of the grid.
pub fn regroup<'a>(ranked: impl IntoIterator<Item = &'a FlatShortcut>) -> Vec<DisplayGroup> {
    let mut groups: Vec<DisplayGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in ranked {
        let key = record.group_key();
        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                groups.push(DisplayGroup::new(key.clone(), Vec::new()));
                slots.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot]
            .shortcuts
            .push(Shortcut::new(&record.keys, &record.description));
    }

    groups
}

/// Fuzzy-filter `records` and regroup the matches for display.
///
/// Callers only search with a non-empty query; an empty result is a valid
/// "no matches" state.
pub fn search(query: &str, records: &[FlatShortcut]) -> Vec<DisplayGroup> {
    let ranked = rank(query, records);
    tracing::debug!(query, matches = ranked.len(), "search");
    regroup(ranked)
}
