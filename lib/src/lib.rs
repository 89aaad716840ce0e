#![warn(missing_docs)]

//! # `binairo`
//!
//! A solver for [Binairo](https://en.wikipedia.org/wiki/Takuzu) (also sold as Takuzu or "binary puzzle") grids.
//! Begin by collecting the givens with a [`BoardBuilder`](builder::BoardBuilder), most often via
//! [`BoardBuilder::from_text`](builder::BoardBuilder::from_text) on the `0`/`1`/`X` text format.
//! Convert it to a [`Board`] object, then either call [`solve()`](crate::Board::solve), consuming the
//! board and yielding a solved version of the board, or drive a
//! [`BacktrackSearch`](search::BacktrackSearch) by hand to watch its progress.
//!
//! # Internals
//! This crate is a plain depth-first search with chronological backtracking; there is no constraint
//! propagation and no up-front solvability check, so an unsolvable puzzle is only detected once the
//! whole space is exhausted.
//!
//! A cursor sweeps the grid in row-major order. At each cell the board cycles the cell through its
//! candidate values; after every placement an incremental legality check accepts or rejects the
//! board *prefix* filled so far, looking only at the affected row and column. On acceptance the
//! cursor advances; once a cell runs out of candidates the cursor retreats to the nearest earlier
//! non-given cell. Falling off either end of the grid is a terminal state: past the end the board
//! is solved, before the start the search space is exhausted.

pub use board::Board;
pub use builder::BoardBuilder;
pub use cell::Value;
pub use location::Location;

pub(crate) mod board;
mod tests;
pub(crate) mod location;
pub(crate) mod cell;
pub mod builder;
pub mod search;
