use std::fmt::Display;

use crate::tile_group::TileGroup;

/// A positional filter applied while enumerating formable words.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Restriction {
  StartsWith(char),
  EndsWith(char),
}

impl Restriction {
  pub fn starts_with(letter: char) -> Self {
    Self::StartsWith(TileGroup::canonicalize_letter(letter))
  }

  pub fn ends_with(letter: char) -> Self {
    Self::EndsWith(TileGroup::canonicalize_letter(letter))
  }

  pub fn matches(&self, word: &str) -> bool {
    match *self {
      Self::StartsWith(letter) => word.chars().next() == Some(letter),
      Self::EndsWith(letter) => word.chars().next_back() == Some(letter),
    }
  }
}

impl Display for Restriction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::StartsWith(letter) => write!(f, "starts with '{letter}'"),
      Self::EndsWith(letter) => write!(f, "ends with '{letter}'"),
    }
  }
}
