use std::{
  cmp::Ordering,
  fmt::Display,
  ops::{Add, Mul, Sub},
};

/// A cell on an unbounded board. `x` is the column and `y` is the row.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn zero() -> Self {
    Self { x: 0, y: 0 }
  }

  pub const fn new(row: i32, col: i32) -> Self {
    Self { x: col, y: row }
  }
}

/// Row-major: positions sort top to bottom, then left to right.
impl Ord for Pos {
  fn cmp(&self, other: &Self) -> Ordering {
    self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
  }
}

impl PartialOrd for Pos {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Sub for Pos {
  type Output = Diff;

  fn sub(self, rhs: Self) -> Diff {
    Diff { x: self.x - rhs.x, y: self.y - rhs.y }
  }
}

impl Sub<Diff> for Pos {
  type Output = Self;

  fn sub(self, rhs: Diff) -> Self {
    Self { x: self.x - rhs.x, y: self.y - rhs.y }
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(row {}, col {})", self.y, self.x)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Mul<Diff> for i32 {
  type Output = Diff;

  fn mul(self, rhs: Diff) -> Diff {
    Diff { x: self * rhs.x, y: self * rhs.y }
  }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl Direction {
  pub const ALL: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

  pub const fn diff(self) -> Diff {
    match self {
      Direction::Up => Diff { x: 0, y: -1 },
      Direction::Down => Diff { x: 0, y: 1 },
      Direction::Left => Diff { x: -1, y: 0 },
      Direction::Right => Diff { x: 1, y: 0 },
    }
  }

  /// True for the directions words are read in.
  pub const fn is_forward(self) -> bool {
    matches!(self, Direction::Right | Direction::Down)
  }

  pub const fn is_horizontal(self) -> bool {
    matches!(self, Direction::Left | Direction::Right)
  }

  /// The reading direction along the same axis.
  pub const fn forward(self) -> Self {
    if self.is_horizontal() {
      Direction::Right
    } else {
      Direction::Down
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Direction::Up => "up",
      Direction::Down => "down",
      Direction::Left => "left",
      Direction::Right => "right",
    };
    write!(f, "{name}")
  }
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;

  use super::{Direction, Pos};

  #[gtest]
  fn test_row_major_order() {
    let mut positions = vec![Pos::new(1, 0), Pos::new(0, 5), Pos::new(0, -2), Pos::new(-1, 3)];
    positions.sort();
    expect_that!(
      positions,
      container_eq([Pos::new(-1, 3), Pos::new(0, -2), Pos::new(0, 5), Pos::new(1, 0)])
    );
  }

  #[gtest]
  fn test_step() {
    let pos = Pos::new(2, 3);
    expect_eq!(pos + Direction::Right.diff(), Pos::new(2, 4));
    expect_eq!(pos + Direction::Up.diff(), Pos::new(1, 3));
    expect_eq!(pos + 3 * Direction::Left.diff(), Pos::new(2, 0));
    expect_eq!(pos - Direction::Down.diff(), Pos::new(1, 3));
  }

  #[gtest]
  fn test_axes() {
    expect_eq!(Direction::Left.forward(), Direction::Right);
    expect_eq!(Direction::Up.forward(), Direction::Down);
    expect_true!(Direction::Left.is_horizontal());
    expect_false!(Direction::Down.is_horizontal());
    expect_true!(Direction::Down.is_forward());
    expect_false!(Direction::Up.is_forward());
  }
}
