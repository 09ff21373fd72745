use std::{collections::BTreeMap, fmt::Display};

use bitcode::{Decode, Encode};
use itertools::Itertools;
use log::trace;
use util::{
  grid::Grid,
  pos::{Direction, Pos},
};
use word_dict::{Dictionary, TileGroup};

use crate::tile::Tile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub enum Cell {
  #[default]
  Empty,
  Letter(char),
}

impl Display for Cell {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Cell::Letter(c) => *c,
        Cell::Empty => '.',
      }
    )
  }
}

/// A maximal run of two or more letters along one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
  pub start: Pos,
  pub direction: Direction,
  pub word: String,
}

/// A sparse, unbounded board of placed tiles.
///
/// The board only grows through `add_word`, which keeps every run of two or
/// more letters a valid word. Cloning gives a fully independent board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
  cells: BTreeMap<Pos, char>,
}

impl Board {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn get(&self, pos: Pos) -> Option<char> {
    self.cells.get(&pos).copied()
  }

  /// Every placed tile, in row-major order.
  pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
    self.cells.iter().map(|(&pos, &letter)| Tile { letter, pos })
  }

  pub fn letters(&self) -> TileGroup {
    self.cells.values().copied().collect()
  }

  /// Overlays `word` on the board at `pos`.
  ///
  /// For `Right` and `Down`, `pos` holds the first letter; for `Left` and `Up`
  /// it holds the last letter. The word always reads left to right or top to
  /// bottom.
  ///
  /// Returns the letters that filled empty cells. Returns `None`, leaving the
  /// board untouched, if any cell already holds a different letter or if the
  /// placement would leave a run of two or more letters that is not a word.
  pub fn add_word<D: Dictionary>(
    &mut self,
    dict: &D,
    word: &str,
    pos: Pos,
    direction: Direction,
  ) -> Option<Vec<char>> {
    let letters: Vec<_> = word.chars().map(TileGroup::canonicalize_letter).collect();
    if letters.is_empty() {
      return None;
    }

    let axis = direction.forward();
    let step = axis.diff();
    let start = if direction.is_forward() {
      pos
    } else {
      pos + (letters.len() as i32 - 1) * direction.diff()
    };
    let span: Vec<_> = (0..letters.len() as i32).map(|idx| start + idx * step).collect();

    let mut staged = BTreeMap::new();
    for (&cell, &letter) in span.iter().zip(&letters) {
      match self.cells.get(&cell) {
        Some(&existing) if existing != letter => {
          trace!("{word} {direction} from {pos}: {cell} holds '{existing}', not '{letter}'");
          return None;
        }
        Some(_) => {}
        None => {
          staged.insert(cell, letter);
        }
      }
    }

    let lookup = |cell: Pos| staged.get(&cell).or_else(|| self.cells.get(&cell)).copied();
    if let Some(bad) = span
      .iter()
      .flat_map(|&cell| [Direction::Right, Direction::Down].map(|axis| (cell, axis)))
      .map(|(cell, axis)| Self::run_through(lookup, cell, axis))
      .find(|run| !Self::run_is_valid(dict, run))
    {
      trace!("{word} {direction} from {pos}: forms invalid run {bad}");
      return None;
    }

    let added = span.iter().filter_map(|cell| staged.get(cell)).copied().collect();
    self.cells.extend(staged);
    Some(added)
  }

  fn run_is_valid<D: Dictionary>(dict: &D, run: &str) -> bool {
    run.chars().count() < 2 || dict.is_valid(run)
  }

  /// The maximal run of letters through `cell` along `axis`, read forward.
  fn run_through<F>(lookup: F, cell: Pos, axis: Direction) -> String
  where
    F: Fn(Pos) -> Option<char>,
  {
    let step = axis.diff();
    let mut start = cell;
    while lookup(start - step).is_some() {
      start = start - step;
    }
    std::iter::successors(Some(start), |&pos| Some(pos + step))
      .map_while(&lookup)
      .collect()
  }

  /// Every run of two or more letters on the board, rows first.
  pub fn lines(&self) -> Vec<Line> {
    let lookup = |cell: Pos| self.get(cell);
    [Direction::Right, Direction::Down]
      .into_iter()
      .flat_map(|direction| {
        self
          .cells
          .keys()
          .filter(move |&&pos| self.get(pos - direction.diff()).is_none())
          .map(move |&start| Line {
            start,
            direction,
            word: Self::run_through(lookup, start, direction),
          })
      })
      .filter(|line| line.word.chars().count() >= 2)
      .collect()
  }

  /// Runs of two or more letters that `dict` does not accept. Empty for any
  /// board built through `add_word`.
  pub fn invalid_lines<D: Dictionary>(&self, dict: &D) -> Vec<Line> {
    self
      .lines()
      .into_iter()
      .filter(|line| !dict.is_valid(&line.word))
      .collect()
  }

  /// The top-left and bottom-right corners of the occupied area.
  pub fn bounds(&self) -> Option<(Pos, Pos)> {
    let (min_x, max_x) = self.cells.keys().map(|pos| pos.x).minmax().into_option()?;
    let (min_y, max_y) = self.cells.keys().map(|pos| pos.y).minmax().into_option()?;
    Some((Pos { x: min_x, y: min_y }, Pos { x: max_x, y: max_y }))
  }

  /// A dense copy of the occupied area, shifted so its top-left corner is at
  /// (0, 0).
  pub fn to_grid(&self) -> Grid<Cell> {
    let Some((min, max)) = self.bounds() else {
      return Grid::new(0, 0);
    };

    let mut grid = Grid::new((max.x - min.x + 1) as u32, (max.y - min.y + 1) as u32);
    for tile in self.tiles() {
      if let Some(cell) = grid.get_mut(Pos::zero() + (tile.pos - min)) {
        *cell = Cell::Letter(tile.letter);
      }
    }
    grid
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_grid())
  }
}
