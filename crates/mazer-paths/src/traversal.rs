//! Lazy breadth-first traversal — one expansion step per pull.

use std::collections::VecDeque;

use mazer_core::{Maze, Point, Range};

use crate::error::SearchError;
use crate::traits::Pather;
use crate::visited::Visited;

/// A pull-based breadth-first traversal.
///
/// Each call to [`next`](Iterator::next) dequeues one coordinate, expands
/// its neighbours, and yields the dequeued coordinate, so the yielded
/// sequence is exactly the order the search visits cells — one highlight
/// event per pull for front ends animating the search. When the goal is
/// discovered during an expansion it is yielded exactly once, as the
/// final element, and the sequence ends; the shortest path is then
/// available from [`path`](Traversal::path).
///
/// A `Traversal` owns all of its search state; it is single-pass and
/// safe to abandon mid-run (partial work is simply dropped).
pub struct Traversal<'a, P: Pather> {
    pather: &'a P,
    goal: Option<Point>,
    visited: Visited,
    frontier: VecDeque<Point>,
    nbuf: Vec<Point>,
    pending_goal: Option<Point>,
    path: Vec<Point>,
    done: bool,
}

impl<'a, P: Pather> Traversal<'a, P> {
    /// Start a traversal from `start` toward `goal` (if any) inside `rng`.
    ///
    /// A `start` outside `rng` produces an already-exhausted traversal.
    pub fn new(pather: &'a P, rng: Range, start: Point, goal: Option<Point>) -> Self {
        let mut visited = Visited::new(rng);
        let mut frontier = VecDeque::new();
        let done = !visited.record_root(start);
        if !done {
            frontier.push_back(start);
        }
        Self {
            pather,
            goal,
            visited,
            frontier,
            nbuf: Vec::with_capacity(4),
            pending_goal: None,
            path: Vec::new(),
            done,
        }
    }

    /// Whether the traversal has run to completion.
    #[inline]
    pub fn finished(&self) -> bool {
        self.done
    }

    /// The shortest path found, ordered end→start and including both
    /// endpoints. Empty until the traversal finishes, and empty forever
    /// when there is no goal or the goal is unreachable.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Consume the traversal, returning [`path`](Traversal::path) by value.
    #[inline]
    pub fn into_path(self) -> Vec<Point> {
        self.path
    }

    fn finish(&mut self) {
        self.done = true;
        if let Some(g) = self.goal {
            self.path = self.visited.backtrace(g);
        }
    }
}

impl<P: Pather> Iterator for Traversal<'_, P> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        // A goal discovered on the previous pull is the final element.
        if let Some(g) = self.pending_goal.take() {
            self.finish();
            return Some(g);
        }
        if self.done {
            return None;
        }
        let Some(cur) = self.frontier.pop_front() else {
            self.finish();
            return None;
        };

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(cur, &mut nbuf);

        let mut found_goal = false;
        for &n in nbuf.iter() {
            if self.visited.record(n, cur) {
                self.frontier.push_back(n);
                if self.goal == Some(n) {
                    found_goal = true;
                }
            }
        }
        self.nbuf = nbuf;

        if found_goal {
            self.pending_goal = self.goal;
        }
        Some(cur)
    }
}

/// Start a step-by-step search between the maze's designated start and
/// end.
///
/// Fails with [`SearchError::NoStart`] when no start is designated. An
/// undesignated end is not an error: the traversal visits the whole
/// reachable region and finishes with an empty path. Each call creates a
/// traversal with fresh state.
pub fn traverse(maze: &Maze) -> Result<Traversal<'_, Maze>, SearchError> {
    let start = maze.start().ok_or(SearchError::NoStart)?;
    Ok(Traversal::new(maze, maze.bounds(), start, maze.end()))
}
