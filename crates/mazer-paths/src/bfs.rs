//! Eager breadth-first shortest-path search.

use std::collections::VecDeque;

use mazer_core::{Maze, Point, Range};

use crate::error::SearchError;
use crate::traits::Pather;
use crate::visited::Visited;

/// Compute the unweighted shortest path from `start` to `goal` over
/// `pather`'s neighbour relation, inside `rng`.
///
/// The whole reachable region is expanded before the backtrace, so the
/// search cost does not depend on where the goal sits. The result is
/// ordered end→start and includes both endpoints; it is empty when `goal`
/// is `None` or was never reached. A `start` outside `rng` also produces
/// an empty result.
pub fn bfs_path<P: Pather>(
    pather: &P,
    rng: Range,
    start: Point,
    goal: Option<Point>,
) -> Vec<Point> {
    let mut visited = Visited::new(rng);
    if !visited.record_root(start) {
        return Vec::new();
    }

    let mut frontier: VecDeque<Point> = VecDeque::new();
    frontier.push_back(start);
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(cur) = frontier.pop_front() {
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &n in nbuf.iter() {
            if visited.record(n, cur) {
                frontier.push_back(n);
            }
        }
    }

    match goal {
        Some(g) => visited.backtrace(g),
        None => Vec::new(),
    }
}

/// Compute the shortest path between the maze's designated start and end.
///
/// Walls are impassable; every other cell, including the start and end
/// themselves, is floor. Fails with [`SearchError::NoStart`] when no
/// start is designated. An undesignated or unreachable end is not an
/// error: the result is simply empty.
///
/// The path is ordered end→start — reverse it for start→end presentation
/// — and is a fresh allocation on every call; repeated calls never
/// accumulate.
pub fn solve(maze: &Maze) -> Result<Vec<Point>, SearchError> {
    let start = maze.start().ok_or(SearchError::NoStart)?;
    Ok(bfs_path(maze, maze.bounds(), start, maze.end()))
}
