use std::{cmp::Reverse, collections::HashSet};

use itertools::Itertools;

use crate::bunch::Bunch;

/// Decides the order candidate words are tried in. Implementations must be a
/// deterministic total order so the same hand always yields the same solution.
pub trait OrderingHeuristic {
  fn order_words<'a>(&self, words: HashSet<&'a str>) -> Vec<&'a str>;
}

/// Longest words first, ties broken alphabetically. Long words use up the hand
/// fastest.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongestWord;

impl OrderingHeuristic for LongestWord {
  fn order_words<'a>(&self, words: HashSet<&'a str>) -> Vec<&'a str> {
    words
      .into_iter()
      .sorted_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
      .collect()
  }
}

/// Words carrying the hardest-to-place letter first, so tiles like Q, Z or J
/// are played while the board still has room. Ties fall back to `LongestWord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RareLetters;

impl RareLetters {
  /// Rarity of the rarest letter in `word`.
  fn score(word: &str) -> u32 {
    word.chars().map(Bunch::rarity).max().unwrap_or(0)
  }
}

impl OrderingHeuristic for RareLetters {
  fn order_words<'a>(&self, words: HashSet<&'a str>) -> Vec<&'a str> {
    words
      .into_iter()
      .sorted_by_key(|&word| (Reverse(Self::score(word)), Reverse(word.len()), word))
      .collect()
  }
}
