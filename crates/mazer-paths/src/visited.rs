//! Per-run predecessor bookkeeping for breadth-first searches.

use mazer_core::{Point, Range};

/// Discovery state of one coordinate.
///
/// `Root` is a distinct tag rather than a self-referential or dummy
/// coordinate, so the search origin can never be mistaken for "has a
/// predecessor".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Visit {
    /// Not discovered yet.
    Unseen,
    /// The search root; it has no predecessor.
    Root,
    /// Discovered while expanding the contained coordinate.
    From(Point),
}

/// Flat predecessor map over a grid rectangle.
///
/// A fresh `Visited` is allocated per search run; nothing is shared
/// between runs.
pub(crate) struct Visited {
    rng: Range,
    width: usize,
    map: Vec<Visit>,
}

impl Visited {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            map: vec![Visit::Unseen; rng.len()],
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    pub(crate) fn get(&self, p: Point) -> Visit {
        match self.idx(p) {
            Some(i) => self.map[i],
            None => Visit::Unseen,
        }
    }

    /// Mark `p` as the search root. Returns `false` if `p` lies outside
    /// the range.
    pub(crate) fn record_root(&mut self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.map[i] = Visit::Root;
                true
            }
            None => false,
        }
    }

    /// Record that `p` was discovered from `from`. Returns `true` only on
    /// first discovery; later sightings keep the original predecessor, so
    /// each coordinate enters a frontier at most once.
    pub(crate) fn record(&mut self, p: Point, from: Point) -> bool {
        match self.idx(p) {
            Some(i) if self.map[i] == Visit::Unseen => {
                self.map[i] = Visit::From(from);
                true
            }
            _ => false,
        }
    }

    /// Follow predecessor links from `end` back to the root.
    ///
    /// The result is ordered end→start and includes both endpoints; it is
    /// empty when `end` was never discovered.
    pub(crate) fn backtrace(&self, end: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = end;
        loop {
            match self.get(cur) {
                Visit::Unseen => return Vec::new(),
                Visit::Root => {
                    path.push(cur);
                    return path;
                }
                Visit::From(prev) => {
                    path.push(cur);
                    cur = prev;
                }
            }
        }
    }
}
