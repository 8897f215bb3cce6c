//! Fuzzy "did you mean" suggestions for failed lookups.
//!
//! Similarity is the classic sequence-matching ratio: find the longest
//! common block of the two strings, recurse on the pieces to its left and
//! right, and score `2 * matched / (len_a + len_b)` over chars. Advisory
//! only; nothing here mutates the store.

use std::collections::HashMap;

/// At most this many suggestions are offered.
pub const MAX_SUGGESTIONS: usize = 5;

/// Candidates scoring below this ratio are not worth suggesting.
pub const CUTOFF: f64 = 0.6;

/// Rank `candidates` against `query` and keep the close ones.
///
/// Results are ordered by descending ratio; equal ratios keep the input
/// order. Capped at [`MAX_SUGGESTIONS`].
pub fn close_matches<I, S>(query: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let query_chars: Vec<char> = query.chars().collect();

    let mut scored: Vec<(f64, String)> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let candidate_chars: Vec<char> = candidate.chars().collect();
        let score = ratio(&query_chars, &candidate_chars);
        if score >= CUTOFF {
            scored.push((score, candidate.to_string()));
        }
    }

    // Stable sort keeps input order for equal ratios.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Similarity in `[0, 1]`; 1.0 means identical sequences.
pub fn ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    2.0 * matched_total(a, b) as f64 / (a.len() + b.len()) as f64
}

/// Total size of the matching blocks between `a` and `b`.
fn matched_total(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size > 0 {
            total += size;
            pending.push((alo, i, blo, j));
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest block `a[i..i+size] == b[j..j+size]` within the given windows.
///
/// Walks `a` once, carrying for every end position in `b` the length of the
/// common run ending there.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let size = if j > blo {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_runs.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run_lengths = next_runs;
    }

    (best_i, best_j, best_size)
}
