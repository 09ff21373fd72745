use std::{
  error::Error,
  fmt::Display,
  fs::File,
  io::{self, BufRead, BufReader},
  path::Path,
};

use log::debug;
use util::error::{BananaError, BananaResult};

use crate::dictionary::WordSet;

pub const EMBEDDED_WORDS: &str = include_str!("resources/words.txt");

pub fn load_from_str(data: &str) -> WordSet {
  WordSet::from_words(data.lines())
}

/// The word list compiled into the binary.
pub fn load_embedded() -> WordSet {
  load_from_str(EMBEDDED_WORDS)
}

/// Lists of the most common English words compiled into the crate. Each
/// larger list holds every word of the smaller ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinDict {
  Thousand,
  FiveThousand,
  TenThousand,
}

impl BuiltinDict {
  pub const ALL: [BuiltinDict; 3] = [
    BuiltinDict::Thousand,
    BuiltinDict::FiveThousand,
    BuiltinDict::TenThousand,
  ];

  fn contents(self) -> &'static str {
    match self {
      BuiltinDict::Thousand => include_str!("resources/thousand.txt"),
      BuiltinDict::FiveThousand => include_str!("resources/five_thousand.txt"),
      BuiltinDict::TenThousand => include_str!("resources/ten_thousand.txt"),
    }
  }

  pub fn load(self) -> BananaResult<WordSet> {
    let dict = load_from_str(self.contents());
    if dict.is_empty() {
      return Err(BananaError::Parse(format!("No words in the built-in {self} list")).into());
    }

    debug!("Loaded {} words from the built-in {self} list", dict.len());
    Ok(dict)
  }
}

impl Display for BuiltinDict {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      BuiltinDict::Thousand => "thousand",
      BuiltinDict::FiveThousand => "five-thousand",
      BuiltinDict::TenThousand => "ten-thousand",
    };
    write!(f, "{name}")
  }
}

/// Loads a newline-delimited word list. A missing file is reported as
/// `BananaError::NotFound`, and a file with no usable words is an error
/// rather than an empty dictionary.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> BananaResult<WordSet> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|err| -> Box<dyn Error> {
    match err.kind() {
      io::ErrorKind::NotFound => BananaError::NotFound(path.display().to_string()).into(),
      _ => err.into(),
    }
  })?;

  let dict = WordSet::from_words(BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?);
  if dict.is_empty() {
    return Err(BananaError::Parse(format!("No words found in {}", path.display())).into());
  }

  debug!("Loaded {} words from {}", dict.len(), path.display());
  Ok(dict)
}

/// Loads every file and merges them into one compound dictionary. The first
/// file that fails to load aborts the whole load.
pub fn load_from_files<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> BananaResult<WordSet> {
  let members = paths
    .into_iter()
    .map(load_from_file)
    .collect::<BananaResult<Vec<_>>>()?;
  if members.is_empty() {
    return Err(BananaError::NotFound("no dictionary files given".to_owned()).into());
  }
  Ok(WordSet::compound(&members))
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::{fs, path::PathBuf};

  use googletest::prelude::*;
  use util::error::BananaError;

  use crate::dictionary::{Dictionary, WordSet};

  use super::{load_embedded, load_from_file, load_from_files, load_from_str, BuiltinDict};

  fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("word_dict_{}_{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
  }

  #[gtest]
  fn test_load_from_str() {
    let dict = load_from_str("cat\n\ndog\r\n  emu  \n");
    expect_eq!(dict.len(), 3);
    expect_true!(dict.is_valid("EMU"));
  }

  #[gtest]
  fn test_embedded_words() {
    let dict = load_embedded();
    expect_false!(dict.is_empty());
    expect_true!(dict.is_valid("cat"));
    expect_true!(dict.is_valid("at"));
  }

  #[gtest]
  fn test_builtin_lists_load() {
    let sizes: Vec<_> = BuiltinDict::ALL
      .iter()
      .map(|builtin| builtin.load().unwrap().len())
      .collect();
    expect_that!(sizes, container_eq([1000, 5000, 10000]));

    for builtin in BuiltinDict::ALL {
      let dict = builtin.load().unwrap();
      expect_true!(dict.is_valid("the"));
      expect_false!(dict.is_valid("zzz"));
    }
  }

  #[gtest]
  fn test_builtin_lists_are_nested() {
    let thousand = BuiltinDict::Thousand.load().unwrap();
    let ten_thousand = BuiltinDict::TenThousand.load().unwrap();
    expect_true!(thousand.words().all(|word| ten_thousand.is_valid(word)));

    let compound = WordSet::compound([&thousand, &ten_thousand]);
    expect_eq!(compound.len(), ten_thousand.len());
  }

  #[gtest]
  fn test_missing_file_is_not_found() {
    let result = load_from_file("/definitely/not/a/real/word/list.txt");
    assert_that!(result, err(anything()));
    let err = result.err().unwrap();
    expect_true!(matches!(
      err.downcast_ref::<BananaError>(),
      Some(BananaError::NotFound(_))
    ));
  }

  #[gtest]
  fn test_empty_file_is_an_error() {
    let path = write_temp("empty.txt", "\n\n");
    expect_that!(load_from_file(&path), err(anything()));
    fs::remove_file(path).unwrap();
  }

  #[gtest]
  fn test_load_from_files_merges() {
    let first = write_temp("first.txt", "cat\ndog\n");
    let second = write_temp("second.txt", "emu\n");

    let dict = load_from_files([&first, &second]).unwrap();
    expect_eq!(dict.len(), 3);
    expect_true!(dict.is_valid("dog"));
    expect_true!(dict.is_valid("emu"));

    fs::remove_file(first).unwrap();
    fs::remove_file(second).unwrap();
  }

  #[gtest]
  fn test_load_from_files_fails_on_any_missing() {
    let first = write_temp("present.txt", "cat\n");
    let missing = PathBuf::from("/definitely/not/a/real/word/list.txt");
    expect_that!(load_from_files([&first, &missing]), err(anything()));
    fs::remove_file(first).unwrap();
  }
}
