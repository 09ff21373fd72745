use rand::{seq::SliceRandom, Rng};
use word_dict::TileGroup;

/// Letter counts in a standard 144-tile Bananagrams set.
const STANDARD_DISTRIBUTION: [(char, u32); 26] = [
  ('A', 13),
  ('B', 3),
  ('C', 3),
  ('D', 6),
  ('E', 18),
  ('F', 3),
  ('G', 4),
  ('H', 3),
  ('I', 12),
  ('J', 2),
  ('K', 2),
  ('L', 5),
  ('M', 3),
  ('N', 8),
  ('O', 11),
  ('P', 3),
  ('Q', 2),
  ('R', 9),
  ('S', 6),
  ('T', 9),
  ('U', 6),
  ('V', 3),
  ('W', 3),
  ('X', 2),
  ('Y', 3),
  ('Z', 2),
];

/// The pile of face-down tiles hands are drawn from.
#[derive(Clone, Debug)]
pub struct Bunch {
  tiles: Vec<char>,
}

impl Bunch {
  pub fn standard() -> Self {
    Self {
      tiles: STANDARD_DISTRIBUTION
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count as usize))
        .collect(),
    }
  }

  pub fn remaining(&self) -> usize {
    self.tiles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tiles.is_empty()
  }

  /// Draws `n` tiles without replacement, or every remaining tile if fewer
  /// than `n` are left.
  pub fn draw<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> TileGroup {
    self.tiles.shuffle(rng);
    let keep = self.tiles.len().saturating_sub(n);
    self.tiles.split_off(keep).into_iter().collect()
  }

  /// Copies of `letter` in a standard set.
  pub fn standard_count(letter: char) -> u32 {
    let letter = TileGroup::canonicalize_letter(letter);
    STANDARD_DISTRIBUTION
      .iter()
      .find(|&&(candidate, _)| candidate == letter)
      .map(|&(_, count)| count)
      .unwrap_or(0)
  }

  /// How hard `letter` is to come by: the size of the full set divided by the
  /// number of copies. Letters outside the set get the maximum.
  pub fn rarity(letter: char) -> u32 {
    let total: u32 = STANDARD_DISTRIBUTION.iter().map(|&(_, count)| count).sum();
    match Self::standard_count(letter) {
      0 => total,
      count => total / count,
    }
  }
}
