use std::fmt::Display;

use bitcode::{Decode, Encode};
use itertools::Itertools;

use crate::pos::Pos;

/// Dense row-major grid anchored at (0, 0).
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct Grid<T> {
  grid: Vec<T>,
  width: u32,
  height: u32,
}

impl<T> Grid<T> {
  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn in_bounds(&self, pos: Pos) -> bool {
    pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
  }

  fn idx(&self, pos: Pos) -> usize {
    debug_assert!(self.in_bounds(pos));
    pos.x as usize + pos.y as usize * self.width as usize
  }

  pub fn get(&self, pos: Pos) -> Option<&T> {
    self.in_bounds(pos).then(|| self.grid.get(self.idx(pos))).flatten()
  }

  pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self
      .in_bounds(pos)
      .then(|| {
        let index = self.idx(pos);
        self.grid.get_mut(index)
      })
      .flatten()
  }

  pub fn iter_row(&self, y: u32) -> impl Iterator<Item = &T> {
    let y = y as i32;
    (0..self.width as i32).flat_map(move |x| self.get(Pos { x, y }))
  }
}

impl<T> Grid<T>
where
  T: Default,
{
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      grid: (0..width * height).map(|_| T::default()).collect(),
      width,
      height,
    }
  }
}

impl<T: Display> Display for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height).try_for_each(|y| writeln!(f, "{}", self.iter_row(y).join(" ")))
  }
}
