use std::fmt::Display;

use util::pos::Pos;

/// A letter placed on the board. Tiles still in hand are plain letters inside
/// a `TileGroup`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Tile {
  pub letter: char,
  pub pos: Pos,
}

impl Display for Tile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "'{}' at {}", self.letter, self.pos)
  }
}
