//! Salesperson code matching
//!
//! An operator name matches a master list entry when at least `threshold`
//! percent of the entry's tokens appear in the operator's tokens. The score
//! is containment of the reference name in the query, so the query may carry
//! extra words ("maersk line a/s" contains "maersk line") but not the other
//! way round.
//!
//! Every matching entry contributes its code. Codes are deduplicated and
//! joined with `/` in the order their first matching entry appears in the
//! master list. When nothing matches the result is [`APPROACH`].

use crate::tokenizer::{tokenize, tokenize_opt};
use crate::types::ReferenceEntry;
use std::collections::{HashMap, HashSet};

/// Sentinel written when no confident match exists.
pub const APPROACH: &str = "APPROACH";

/// Default minimum score (percent of reference tokens found in the query).
pub const DEFAULT_MATCH_THRESHOLD: f64 = 90.0;

/// Separator between multiple matched codes.
pub const CODE_SEPARATOR: &str = "/";

/// Percentage of `reference` tokens present in `query`.
///
/// Returns `None` for an empty reference set, which never takes part in
/// matching.
pub fn containment_score(query: &HashSet<String>, reference: &HashSet<String>) -> Option<f64> {
    if reference.is_empty() {
        return None;
    }
    let overlap = query.intersection(reference).count();
    Some(score_from_overlap(overlap, reference.len()))
}

fn score_from_overlap(overlap: usize, reference_len: usize) -> f64 {
    overlap as f64 * 100.0 / reference_len as f64
}

/// Match one operator name against the master list by scanning every entry.
///
/// A missing operator name (`None`) is never matched and yields
/// [`APPROACH`].
pub fn match_salesperson_codes(
    operator_name: Option<&str>,
    reference: &[ReferenceEntry],
    threshold: f64,
) -> String {
    let Some(name) = operator_name else {
        return APPROACH.to_string();
    };

    let query = tokenize(name);
    let mut codes = CodeSet::default();

    for entry in reference {
        let ref_tokens = tokenize_opt(entry.operator.as_deref());
        let Some(score) = containment_score(&query, &ref_tokens) else {
            continue;
        };
        if score >= threshold {
            codes.add(entry.salesperson_code.as_deref());
        }
    }

    codes.render()
}

/// Codes collected for one query, first-match order.
#[derive(Debug, Default)]
struct CodeSet<'a> {
    seen: HashSet<&'a str>,
    ordered: Vec<&'a str>,
}

impl<'a> CodeSet<'a> {
    /// Register a match; a missing code counts as a match but never renders.
    fn add(&mut self, code: Option<&'a str>) {
        if let Some(code) = code {
            if self.seen.insert(code) {
                self.ordered.push(code);
            }
        }
    }

    fn render(&self) -> String {
        if self.ordered.is_empty() {
            APPROACH.to_string()
        } else {
            self.ordered.join(CODE_SEPARATOR)
        }
    }
}

/// Score of one master list entry for a query, as shown by `match`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    /// Position of the entry in the master list
    pub index: usize,
    pub operator: String,
    pub salesperson_code: Option<String>,
    pub overlap: usize,
    pub reference_tokens: usize,
    pub score: f64,
}

/// Master list with token sets computed once and an inverted index from
/// token to entry positions.
///
/// Produces exactly the same output as [`match_salesperson_codes`] while
/// only visiting entries that share at least one token with the query.
#[derive(Debug, Clone)]
pub struct SalespersonMatcher {
    entries: Vec<ReferenceEntry>,
    token_sets: Vec<HashSet<String>>,
    index: HashMap<String, Vec<usize>>,
    threshold: f64,
}

impl SalespersonMatcher {
    pub fn new(entries: Vec<ReferenceEntry>, threshold: f64) -> Self {
        let token_sets: Vec<HashSet<String>> = entries
            .iter()
            .map(|e| tokenize_opt(e.operator.as_deref()))
            .collect();

        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, tokens) in token_sets.iter().enumerate() {
            for token in tokens {
                index.entry(token.clone()).or_default().push(i);
            }
        }

        Self {
            entries,
            token_sets,
            index,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Number of entries whose name has at least one token.
    pub fn scorable_entries(&self) -> usize {
        self.token_sets.iter().filter(|t| !t.is_empty()).count()
    }

    /// Match one operator name; see [`match_salesperson_codes`].
    pub fn match_operator(&self, operator_name: Option<&str>) -> String {
        let Some(name) = operator_name else {
            return APPROACH.to_string();
        };

        let mut codes = CodeSet::default();
        for candidate in self.matching_candidates(&tokenize(name)) {
            codes.add(self.entries[candidate].salesperson_code.as_deref());
        }
        codes.render()
    }

    /// Every entry sharing a token with `name`, in master list order, with
    /// its score. Entries without tokens are never listed.
    pub fn score_candidates(&self, name: &str) -> Vec<CandidateScore> {
        let query = tokenize(name);
        self.overlaps(&query)
            .into_iter()
            .map(|(i, overlap)| {
                let reference_tokens = self.token_sets[i].len();
                CandidateScore {
                    index: i,
                    operator: self.entries[i].operator.clone().unwrap_or_default(),
                    salesperson_code: self.entries[i].salesperson_code.clone(),
                    overlap,
                    reference_tokens,
                    score: score_from_overlap(overlap, reference_tokens),
                }
            })
            .collect()
    }

    /// Positions of entries meeting the threshold, in master list order.
    fn matching_candidates(&self, query: &HashSet<String>) -> Vec<usize> {
        if self.threshold <= 0.0 {
            // zero overlap still meets a non-positive threshold
            return (0..self.entries.len())
                .filter(|&i| !self.token_sets[i].is_empty())
                .collect();
        }

        self.overlaps(query)
            .into_iter()
            .filter(|&(i, overlap)| {
                score_from_overlap(overlap, self.token_sets[i].len()) >= self.threshold
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// (position, overlap) for every entry sharing a token with `query`,
    /// sorted by position.
    fn overlaps(&self, query: &HashSet<String>) -> Vec<(usize, usize)> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in query {
            if let Some(positions) = self.index.get(token) {
                for &i in positions {
                    *counts.entry(i).or_insert(0) += 1;
                }
            }
        }
        let mut overlaps: Vec<(usize, usize)> = counts.into_iter().collect();
        overlaps.sort_unstable_by_key(|&(i, _)| i);
        overlaps
    }
}
