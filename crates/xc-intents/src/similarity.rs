// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Fuzzy string similarity.
//!
//! Scores are computed over Unicode scalar values with the classic
//! Ratcliff/Obershelp "gestalt" matching: the longest common block is found,
//! then the algorithm recurses on the pieces to its left and right. The
//! partial ratio slides the shorter string over the longer one, anchored at
//! every matching block, and keeps the best window.

use std::collections::HashMap;

/// Similarity score in `0..=100`.
pub type Score = u8;

/// Pluggable string similarity used by the intent detector.
pub trait Similarity: Send + Sync {
    /// Score how well `a` and `b` match, in `0..=100`.
    fn score(&self, a: &str, b: &str) -> Score;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> Score + Send + Sync,
{
    fn score(&self, a: &str, b: &str) -> Score {
        self(a, b)
    }
}

/// Best-window similarity, tolerant of text surrounding the shorter string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

impl Similarity for PartialRatio {
    fn score(&self, a: &str, b: &str) -> Score {
        partial_ratio(a, b)
    }
}

/// Whole-string similarity of `a` and `b`.
pub fn ratio(a: &str, b: &str) -> Score {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_score(SequenceMatcher::new(&a, &b).ratio())
}

/// Score of the best alignment of the shorter string inside the longer one.
///
/// Returns 0 when either string is empty.
pub fn partial_ratio(a: &str, b: &str) -> Score {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.len() <= b.len() {
        (a.as_slice(), b.as_slice())
    } else {
        (b.as_slice(), a.as_slice())
    };

    let mut best = 0.0_f64;
    for block in SequenceMatcher::new(shorter, longer).matching_blocks() {
        let start = block.b.saturating_sub(block.a);
        let end = (start + shorter.len()).min(longer.len());
        let window = &longer[start..end];

        let window_ratio = SequenceMatcher::new(shorter, window).ratio();
        if window_ratio > 0.995 {
            return 100;
        }
        best = best.max(window_ratio);
    }

    to_score(best)
}

fn to_score(ratio: f64) -> Score {
    (100.0 * ratio).round_ties_even().clamp(0.0, 100.0) as Score
}

/// A run of `size` equal elements at `a[a..]` and `b[b..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Sequences of this length or more get the popular-element heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Longest-common-block matcher over two character sequences.
///
/// Elements of `b` that occur in more than 1% of its positions (plus one) are
/// treated as popular once `b` has at least 200 elements: they never seed a
/// match, but a match may still grow across them.
#[derive(Debug)]
pub struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a`, then in
    /// `b`, wins. A zero-sized block at `(alo, blo)` means no match.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchingBlock {
        let (a, b) = (self.a, self.b);
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let previous = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0);
                    let k = previous + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular elements never seed a match; let it grow over them here.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// Non-adjacent matching blocks in increasing order, terminated by the
    /// empty block `(len(a), len(b), 0)`.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a && blo < block.b {
                queue.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                queue.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
        }
        blocks.sort();

        let mut collapsed: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            if let Some(last) = collapsed.last_mut() {
                if last.a + last.size == block.a && last.b + last.size == block.b {
                    last.size += block.size;
                    continue;
                }
            }
            collapsed.push(block);
        }
        collapsed.push(MatchingBlock {
            a: la,
            b: lb,
            size: 0,
        });
        collapsed
    }

    /// `2 * M / T` where M is the number of matched elements and T the total
    /// number of elements in both sequences.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        2.0 * matches as f64 / total as f64
    }
}
