use log::{debug, trace};
use util::pos::{Direction, Pos};
use word_dict::{Dictionary, Restriction, TileGroup};

use crate::{
  board::Board,
  heuristic::{LongestWord, OrderingHeuristic},
  tile::Tile,
};

/// Where the first word goes on an empty board.
const FIRST_WORD_POS: Pos = Pos::zero();
const FIRST_WORD_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
  /// A board using every tile of the hand.
  Found(Board),
  /// The search space holds no board that uses the whole hand.
  NoSolution,
}

impl Solution {
  pub fn is_found(&self) -> bool {
    matches!(self, Solution::Found(_))
  }

  pub fn board(&self) -> Option<&Board> {
    match self {
      Solution::Found(board) => Some(board),
      Solution::NoSolution => None,
    }
  }

  pub fn into_board(self) -> Option<Board> {
    match self {
      Solution::Found(board) => Some(board),
      Solution::NoSolution => None,
    }
  }
}

pub trait Solver {
  fn solve(&self, hand: &TileGroup) -> Solution;
}

/// Exhaustive depth-first search over (board, remaining tiles) states.
///
/// Candidates are tried in the order given by the heuristics, and the first
/// board that uses every tile is returned. Each attempt works on its own copy
/// of the board, so backtracking is just dropping that copy.
pub struct BruteForceSolver<'d, D> {
  dictionary: &'d D,
  first_word_heuristic: Box<dyn OrderingHeuristic>,
  subsequent_word_heuristic: Box<dyn OrderingHeuristic>,
}

impl<'d, D: Dictionary> BruteForceSolver<'d, D> {
  pub fn new(dictionary: &'d D) -> Self {
    Self::with_heuristics(dictionary, Box::new(LongestWord), Box::new(LongestWord))
  }

  pub fn with_heuristics(
    dictionary: &'d D,
    first_word_heuristic: Box<dyn OrderingHeuristic>,
    subsequent_word_heuristic: Box<dyn OrderingHeuristic>,
  ) -> Self {
    Self {
      dictionary,
      first_word_heuristic,
      subsequent_word_heuristic,
    }
  }

  /// Like `solve`, but keeps building on `board` instead of starting from an
  /// empty one. Tiles already on `board` are not part of `hand`; the returned
  /// board holds them plus every tile of `hand`.
  pub fn solve_from(&self, board: &Board, hand: &TileGroup) -> Solution {
    debug!("Solving hand {hand} ({} tiles) on a board of {}", hand.len(), board.len());
    match self.search(board, hand) {
      Some(board) => {
        debug!("Found a board of {} tiles", board.len());
        Solution::Found(board)
      }
      None => {
        debug!("No board uses all of {hand}");
        Solution::NoSolution
      }
    }
  }

  /// Returns the first complete board reachable from `board` using `tiles`, or
  /// `None` once every candidate below this state has failed.
  fn search(&self, board: &Board, tiles: &TileGroup) -> Option<Board> {
    if tiles.is_empty() {
      return Some(board.clone());
    }

    if board.is_empty() {
      let words = self
        .first_word_heuristic
        .order_words(self.dictionary.words_formable_from(tiles));
      words
        .into_iter()
        .find_map(|word| self.try_place(board, tiles, word, FIRST_WORD_POS, FIRST_WORD_DIRECTION))
    } else {
      board
        .tiles()
        .find_map(|anchor| self.place_on_anchor(board, tiles, anchor))
    }
  }

  /// Tries every word passing through `anchor`: words starting on it going
  /// right or down, then words ending on it going left or up.
  fn place_on_anchor(&self, board: &Board, tiles: &TileGroup, anchor: Tile) -> Option<Board> {
    self
      .place_restricted(
        board,
        tiles,
        anchor,
        Restriction::starts_with(anchor.letter),
        [Direction::Right, Direction::Down],
      )
      .or_else(|| {
        self.place_restricted(
          board,
          tiles,
          anchor,
          Restriction::ends_with(anchor.letter),
          [Direction::Left, Direction::Up],
        )
      })
  }

  fn place_restricted(
    &self,
    board: &Board,
    tiles: &TileGroup,
    anchor: Tile,
    restriction: Restriction,
    directions: [Direction; 2],
  ) -> Option<Board> {
    // The anchor is already on the board, so it can be reused but not spent.
    let available = tiles.combined_with(anchor.letter);
    let words = self
      .subsequent_word_heuristic
      .order_words(self.dictionary.restricted_words_formable_from(&available, restriction));
    trace!("Anchor {anchor}: {} words {restriction}", words.len());
    words
      .into_iter()
      .flat_map(|word| directions.map(|direction| (word, direction)))
      .find_map(|(word, direction)| self.try_place(board, tiles, word, anchor.pos, direction))
  }

  fn try_place(
    &self,
    board: &Board,
    tiles: &TileGroup,
    word: &str,
    pos: Pos,
    direction: Direction,
  ) -> Option<Board> {
    let mut next = board.clone();
    let added = next.add_word(self.dictionary, word, pos, direction)?;
    if added.is_empty() {
      return None;
    }

    trace!("Placed {word} {direction} from {pos}, {} tiles left", tiles.len() - added.len());
    self.search(&next, &tiles.subtracted_by(&added.into_iter().collect()))
  }
}

impl<D: Dictionary> Solver for BruteForceSolver<'_, D> {
  fn solve(&self, hand: &TileGroup) -> Solution {
    self.solve_from(&Board::new(), hand)
  }
}
