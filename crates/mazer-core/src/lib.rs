//! **mazer-core** — the maze data model.
//!
//! This crate provides the foundational types of the *mazer* workspace:
//! geometry primitives, the typed [`Cell`] value, and the [`Maze`] grid
//! with validated editing and unique start/end designation. Search lives
//! in the `mazer-paths` crate; rendering and input handling are left to
//! front ends built on these queries.

pub mod cell;
pub mod error;
pub mod geom;
pub mod maze;

pub use cell::Cell;
pub use error::MazeError;
pub use geom::{Point, Range};
pub use maze::Maze;
