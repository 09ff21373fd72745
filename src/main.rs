#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;

use std::{
  fs::{self, File},
  io::Write,
  path::{Path, PathBuf},
  process::ExitCode,
};

use args::{Args, BuiltinList, Command, SolveArgs};
use clap::Parser;
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use solver::{BruteForceSolver, Bunch, Cell, Solution, Solver};
use util::{
  bitcode,
  error::{BananaError, BananaResult},
  grid::Grid,
  time::time_fn,
};
use word_dict::{
  loader::{load_embedded, load_from_files},
  BuiltinDict, TileGroup, WordSet,
};

fn parse_hand(hand: &str) -> BananaResult<TileGroup> {
  let letters = hand.chars().filter(|c| !c.is_whitespace());
  if let Some(bad) = letters.clone().find(|c| !c.is_ascii_alphabetic()) {
    return Err(BananaError::Parse(format!("'{bad}' is not a tile letter")).into());
  }
  Ok(letters.collect())
}

fn draw_hand(count: usize, seed: Option<u64>) -> TileGroup {
  let mut rng = match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  };
  Bunch::standard().draw(count, &mut rng)
}

fn load_dictionary(builtins: &[BuiltinList], paths: &[PathBuf]) -> BananaResult<WordSet> {
  if builtins.is_empty() && paths.is_empty() {
    info!("No word lists given, using the general built-in list");
    return Ok(load_embedded());
  }

  let mut members = builtins
    .iter()
    .map(|&list| BuiltinDict::from(list).load())
    .collect::<BananaResult<Vec<_>>>()?;
  if !paths.is_empty() {
    members.push(load_from_files(paths)?);
  }
  Ok(WordSet::compound(&members))
}

fn save_grid(path: &Path, grid: &Grid<Cell>) -> BananaResult {
  let result = bitcode::encode(grid);
  File::create(path)?.write_all(&result)?;
  Ok(())
}

fn solve(args: SolveArgs) -> BananaResult<ExitCode> {
  let dict = load_dictionary(&args.builtins, &args.dicts)?;
  let hand = match (&args.hand, args.random) {
    (Some(hand), _) => parse_hand(hand)?,
    (None, Some(count)) => draw_hand(count, args.seed),
    (None, None) => return Err(BananaError::Parse("give --hand or --random".to_owned()).into()),
  };
  println!("Hand: {hand} ({} tiles)", hand.len());

  let solver = BruteForceSolver::with_heuristics(
    &dict,
    args.first_heuristic.build(),
    args.heuristic.build(),
  );
  let (time, solution) = time_fn(|| solver.solve(&hand));
  println!("Took {:.3}s", time.as_secs_f32());

  let Solution::Found(board) = solution else {
    println!("No solution");
    return Ok(ExitCode::FAILURE);
  };

  print!("{board}");
  println!(
    "Words: {}",
    board.lines().iter().map(|line| &line.word).join(", ")
  );

  if let Some(path) = &args.save {
    save_grid(path, &board.to_grid())?;
    println!("Saved to {}", path.display());
  }
  Ok(ExitCode::SUCCESS)
}

fn show(path: &Path) -> BananaResult<ExitCode> {
  let grid: Grid<Cell> = bitcode::decode(&fs::read(path)?)?;
  println!("{} x {} grid from {}", grid.width(), grid.height(), path.display());
  print!("{grid}");
  Ok(ExitCode::SUCCESS)
}

fn main() -> BananaResult<ExitCode> {
  env_logger::init();

  let args = Args::parse();
  match args.command {
    Command::Solve(solve_args) => solve(solve_args),
    Command::Show { path } => show(&path),
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use solver::{Board, Cell};
  use util::{bitcode, grid::Grid, pos::{Direction, Pos}};
  use word_dict::{Dictionary, TileGroup, WordSet};

  use super::{draw_hand, load_dictionary, parse_hand, save_grid};
  use crate::args::BuiltinList;

  #[gtest]
  fn test_parse_hand() {
    expect_eq!(parse_hand("cat dog").unwrap(), TileGroup::from("catdog"));
    expect_that!(parse_hand("ca7"), err(anything()));
    expect_true!(parse_hand("").unwrap().is_empty());
  }

  #[gtest]
  fn test_seeded_draw_is_reproducible() {
    let hand = draw_hand(21, Some(7));
    expect_eq!(hand.len(), 21);
    expect_eq!(hand, draw_hand(21, Some(7)));
  }

  #[gtest]
  fn test_load_dictionary_merges_builtins() {
    let general = load_dictionary(&[], &[]).unwrap();
    expect_true!(general.is_valid("quiz"));

    let merged = load_dictionary(&[BuiltinList::Thousand, BuiltinList::FiveThousand], &[]).unwrap();
    expect_eq!(merged.len(), 5000);

    let missing = std::path::PathBuf::from("/definitely/not/a/word/list.txt");
    expect_that!(load_dictionary(&[BuiltinList::Thousand], &[missing]), err(anything()));
  }

  #[gtest]
  fn test_saved_grid_decodes() {
    let dict = WordSet::from_words(["cat", "to"]);
    let mut board = Board::new();
    board.add_word(&dict, "cat", Pos::zero(), Direction::Right).unwrap();
    board.add_word(&dict, "to", Pos::new(0, 2), Direction::Down).unwrap();

    let path = std::env::temp_dir().join(format!("bananagrams-save-{}.bin", std::process::id()));
    save_grid(&path, &board.to_grid()).unwrap();
    let grid: Grid<Cell> = bitcode::decode(&std::fs::read(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    expect_eq!(grid, board.to_grid());
    expect_eq!(grid.to_string(), "C A T\n. . O\n");
  }
}
