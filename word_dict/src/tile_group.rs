use std::{collections::BTreeMap, fmt::Display};

/// A multiset of letter tiles. Letters are stored upper-cased and letters with
/// a zero count are never stored, so two groups holding the same tiles always
/// compare equal.
///
/// Every operation returns a new group; a `TileGroup` is never changed after
/// it is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileGroup {
  counts: BTreeMap<char, u32>,
}

impl TileGroup {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn canonicalize_letter(letter: char) -> char {
    letter.to_ascii_uppercase()
  }

  /// A new group with one more `letter`.
  pub fn combined_with(&self, letter: char) -> Self {
    let mut counts = self.counts.clone();
    *counts.entry(Self::canonicalize_letter(letter)).or_default() += 1;
    Self { counts }
  }

  /// A new group with every tile in `other` removed.
  ///
  /// Callers only subtract tiles they know are present. Removing a tile that
  /// isn't there is a logic error; debug builds assert on it and release
  /// builds clamp the count at zero.
  pub fn subtracted_by(&self, other: &TileGroup) -> Self {
    let mut counts = self.counts.clone();
    for (&letter, &removed) in &other.counts {
      let count = counts.entry(letter).or_default();
      debug_assert!(
        *count >= removed,
        "removing {removed} of '{letter}' from a group holding {count}"
      );
      *count = count.saturating_sub(removed);
      if *count == 0 {
        counts.remove(&letter);
      }
    }
    Self { counts }
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// True if every tile `other` asks for is available in `self`.
  pub fn contains(&self, other: &TileGroup) -> bool {
    other
      .counts
      .iter()
      .all(|(letter, &needed)| self.count(*letter) >= needed)
  }

  pub fn count(&self, letter: char) -> u32 {
    self
      .counts
      .get(&Self::canonicalize_letter(letter))
      .cloned()
      .unwrap_or(0)
  }

  /// Total number of tiles.
  pub fn len(&self) -> usize {
    self.counts.values().map(|&count| count as usize).sum()
  }

  /// Distinct letters with their counts, in alphabetical order.
  pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
    self.counts.iter().map(|(&letter, &count)| (letter, count))
  }

  /// Every tile, one entry per copy, in alphabetical order.
  pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
    self
      .iter()
      .flat_map(|(letter, count)| std::iter::repeat_n(letter, count as usize))
  }
}

impl FromIterator<char> for TileGroup {
  fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
    let mut group = Self::new();
    group.extend(iter);
    group
  }
}

impl Extend<char> for TileGroup {
  fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
    for letter in iter {
      *self.counts.entry(Self::canonicalize_letter(letter)).or_default() += 1;
    }
  }
}

impl From<&str> for TileGroup {
  fn from(letters: &str) -> Self {
    letters.chars().collect()
  }
}

impl Display for TileGroup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.letters().try_for_each(|letter| write!(f, "{letter}"))
  }
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;

  use super::TileGroup;

  #[gtest]
  fn test_counts() {
    let group = TileGroup::from("banana");
    expect_eq!(group.count('A'), 3);
    expect_eq!(group.count('n'), 2);
    expect_eq!(group.count('z'), 0);
    expect_eq!(group.len(), 6);
    expect_eq!(group.to_string(), "AAABNN");
  }

  #[gtest]
  fn test_empty() {
    expect_true!(TileGroup::new().is_empty());
    expect_false!(TileGroup::from("a").is_empty());
    expect_true!(TileGroup::from("ab").subtracted_by(&TileGroup::from("ba")).is_empty());
  }

  #[gtest]
  fn test_combined_with_leaves_original() {
    let group = TileGroup::from("cat");
    let combined = group.combined_with('s');
    expect_eq!(group, TileGroup::from("cat"));
    expect_eq!(combined, TileGroup::from("cats"));
  }

  #[gtest]
  fn test_combine_then_subtract_round_trips() {
    for hand in ["", "a", "cat", "zzq", "bananas"] {
      let group = TileGroup::from(hand);
      for letter in ['a', 'q', 'z', 'E'] {
        let round_trip = group
          .combined_with(letter)
          .subtracted_by(&TileGroup::from_iter([letter]));
        expect_eq!(round_trip, group);
      }
    }
  }

  #[gtest]
  fn test_subtract_drops_zero_counts() {
    let group = TileGroup::from("aab").subtracted_by(&TileGroup::from("b"));
    expect_eq!(group, TileGroup::from("aa"));
    expect_that!(group.iter().collect::<Vec<_>>(), container_eq([('A', 2)]));
  }

  #[gtest]
  fn test_contains() {
    let hand = TileGroup::from("tacos");
    expect_true!(hand.contains(&TileGroup::from("cat")));
    expect_true!(hand.contains(&TileGroup::new()));
    expect_false!(hand.contains(&TileGroup::from("toot")));
    expect_false!(hand.contains(&TileGroup::from("dog")));
  }
}
