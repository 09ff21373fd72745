use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use solver::{LongestWord, OrderingHeuristic, RareLetters};
use word_dict::BuiltinDict;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinList {
  Thousand,
  FiveThousand,
  TenThousand,
}

impl From<BuiltinList> for BuiltinDict {
  fn from(list: BuiltinList) -> Self {
    match list {
      BuiltinList::Thousand => BuiltinDict::Thousand,
      BuiltinList::FiveThousand => BuiltinDict::FiveThousand,
      BuiltinList::TenThousand => BuiltinDict::TenThousand,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum HeuristicKind {
  LongestWord,
  RareLetters,
}

impl HeuristicKind {
  pub fn build(self) -> Box<dyn OrderingHeuristic> {
    match self {
      HeuristicKind::LongestWord => Box::new(LongestWord),
      HeuristicKind::RareLetters => Box::new(RareLetters),
    }
  }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Find a grid that uses every tile in a hand.
  Solve(SolveArgs),
  /// Print a board written by `solve --save`.
  Show { path: PathBuf },
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
  /// Letters in the hand, e.g. "CATDOG".
  #[arg(long, conflicts_with = "random", required_unless_present = "random")]
  pub hand: Option<String>,

  /// Draw this many tiles from a standard bunch instead of giving a hand.
  #[arg(long)]
  pub random: Option<usize>,

  /// Seed for `--random`, for a reproducible draw.
  #[arg(long, requires = "random", conflicts_with = "hand")]
  pub seed: Option<u64>,

  /// Newline-delimited word list. Repeat to merge several lists.
  #[arg(long = "dict")]
  pub dicts: Vec<PathBuf>,

  /// Built-in list of the most common English words, merged with any
  /// `--dict` files. Without either, a small general list is used.
  #[arg(long = "builtin", value_enum)]
  pub builtins: Vec<BuiltinList>,

  #[arg(long, value_enum, default_value = "longest-word")]
  pub first_heuristic: HeuristicKind,

  #[arg(long, value_enum, default_value = "longest-word")]
  pub heuristic: HeuristicKind,

  /// Write the solved grid here.
  #[arg(long)]
  pub save: Option<PathBuf>,
}
