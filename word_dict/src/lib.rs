#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod dictionary;
pub mod loader;
pub mod restriction;
pub mod tile_group;

pub use dictionary::{Dictionary, WordSet};
pub use loader::BuiltinDict;
pub use restriction::Restriction;
pub use tile_group::TileGroup;
