use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::{restriction::Restriction, tile_group::TileGroup};

/// Word validity plus enumeration of the words a set of tiles can spell.
pub trait Dictionary {
  fn is_valid(&self, word: &str) -> bool;

  fn words(&self) -> impl Iterator<Item = &str>;

  /// Every word whose letter demand fits in `tiles`.
  fn words_formable_from(&self, tiles: &TileGroup) -> HashSet<&str> {
    self
      .words()
      .filter(|word| tiles.contains(&TileGroup::from(*word)))
      .collect()
  }

  /// Like `words_formable_from`, keeping only words that satisfy
  /// `restriction`.
  fn restricted_words_formable_from(
    &self,
    tiles: &TileGroup,
    restriction: Restriction,
  ) -> HashSet<&str> {
    self
      .words()
      .filter(|word| restriction.matches(word) && tiles.contains(&TileGroup::from(*word)))
      .collect()
  }
}

#[derive(Debug)]
struct WordEntry {
  word: String,
  demand: TileGroup,
}

/// An immutable dictionary backed by an in-memory word set.
///
/// Each word's letter demand is computed once up front, and words are indexed
/// by their first and last letters so restricted queries only visit words that
/// can match.
#[derive(Debug)]
pub struct WordSet {
  entries: Vec<WordEntry>,
  lookup: HashMap<String, usize>,
  by_first: HashMap<char, Vec<usize>>,
  by_last: HashMap<char, Vec<usize>>,
}

impl WordSet {
  pub fn canonicalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
      .then(|| word.to_ascii_uppercase())
  }

  /// Builds a dictionary from raw lines. Blank lines and entries containing
  /// anything other than ASCII letters are dropped.
  pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
    let entries: Vec<_> = words
      .into_iter()
      .filter_map(|word| Self::canonicalize_word(word.as_ref()))
      .unique()
      .map(|word| WordEntry { demand: TileGroup::from(word.as_str()), word })
      .collect();

    let mut lookup = HashMap::new();
    let mut by_first = HashMap::<_, Vec<_>>::new();
    let mut by_last = HashMap::<_, Vec<_>>::new();
    for (idx, entry) in entries.iter().enumerate() {
      lookup.insert(entry.word.clone(), idx);
      if let Some(first) = entry.word.chars().next() {
        by_first.entry(first).or_default().push(idx);
      }
      if let Some(last) = entry.word.chars().next_back() {
        by_last.entry(last).or_default().push(idx);
      }
    }

    Self { entries, lookup, by_first, by_last }
  }

  /// A dictionary accepting every word accepted by at least one of `members`.
  pub fn compound<'a, D>(members: impl IntoIterator<Item = &'a D>) -> Self
  where
    D: Dictionary + 'a,
  {
    Self::from_words(members.into_iter().flat_map(|member| member.words()))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn formable<'a>(
    &'a self,
    candidates: impl Iterator<Item = &'a WordEntry>,
    tiles: &TileGroup,
  ) -> HashSet<&'a str> {
    let available = tiles.len();
    candidates
      .filter(|entry| entry.word.len() <= available && tiles.contains(&entry.demand))
      .map(|entry| entry.word.as_str())
      .collect()
  }
}

impl Dictionary for WordSet {
  fn is_valid(&self, word: &str) -> bool {
    Self::canonicalize_word(word).is_some_and(|word| self.lookup.contains_key(&word))
  }

  fn words(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|entry| entry.word.as_str())
  }

  fn words_formable_from(&self, tiles: &TileGroup) -> HashSet<&str> {
    self.formable(self.entries.iter(), tiles)
  }

  fn restricted_words_formable_from(
    &self,
    tiles: &TileGroup,
    restriction: Restriction,
  ) -> HashSet<&str> {
    let (index, letter) = match restriction {
      Restriction::StartsWith(letter) => (&self.by_first, letter),
      Restriction::EndsWith(letter) => (&self.by_last, letter),
    };
    let candidates = index
      .get(&TileGroup::canonicalize_letter(letter))
      .into_iter()
      .flatten()
      .map(|&idx| &self.entries[idx]);
    self.formable(candidates, tiles)
  }
}
