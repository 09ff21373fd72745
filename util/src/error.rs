use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum BananaError {
  NotFound(String),
  Parse(String),
}

impl Display for BananaError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      BananaError::NotFound(what) => write!(f, "Not found: {what}"),
      BananaError::Parse(msg) => write!(f, "Parse error: {msg}"),
    }
  }
}

impl Error for BananaError {}

pub type BananaResult<T = ()> = Result<T, Box<dyn Error>>;
