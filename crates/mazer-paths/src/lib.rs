//! Breadth-first pathfinding over maze grids.
//!
//! Two entry points drive the same unweighted search:
//!
//! - [`solve`] runs eagerly and returns the shortest path between a
//!   maze's designated start and end.
//! - [`traverse`] returns a lazy [`Traversal`] iterator that yields the
//!   visit order one cell per pull — suitable for animating the search —
//!   and hands out the same shortest path once it finishes.
//!
//! Both operate through the [`Pather`] trait, which any grid-like type
//! can implement; the provided `Maze` implementation treats walls as
//! impassable and everything else as floor. Paths are exposed in
//! end→start order (reverse for presentation), and an unreachable target
//! is an expected outcome — an empty path, never an error.

mod bfs;
mod error;
mod traits;
mod traversal;
mod visited;

pub use bfs::{bfs_path, solve};
pub use error::SearchError;
pub use traits::Pather;
pub use traversal::{Traversal, traverse};
