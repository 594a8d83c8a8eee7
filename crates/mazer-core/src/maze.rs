//! The [`Maze`] type — a rectangular grid of typed cells with unique
//! start/end designation.
//!
//! The grid owns its cell matrix exclusively. The positions of the start
//! and end cells are cached alongside the matrix and kept consistent by
//! every mutation; they are never recomputed by scanning.

use std::fmt;

use crate::cell::Cell;
use crate::error::MazeError;
use crate::geom::{Point, Range, RangeIter};

/// A rectangular maze of [`Cell`]s.
///
/// At most one cell holds [`Cell::Start`] and at most one holds
/// [`Cell::End`]. Designating a new start (or end) demotes the previous
/// one to [`Cell::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    end: Option<Point>,
}

impl Maze {
    /// Create a new maze of the given dimensions, all cells empty and
    /// neither start nor end designated.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either dimension is
    /// zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Self {
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
            bounds: Range::new(0, 0, width, height),
            start: None,
            end: None,
        })
    }

    /// The bounding range of the maze, `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the maze as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The designated start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The designated end cell, if any.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Read the cell at `p`.
    ///
    /// Fails with [`MazeError::OutOfBounds`] outside the maze.
    pub fn cell(&self, p: Point) -> Result<Cell, MazeError> {
        match self.index(p) {
            Some(i) => Ok(self.cells[i]),
            None => Err(MazeError::OutOfBounds {
                pos: p,
                size: self.size(),
            }),
        }
    }

    /// Write `value` into the cell at `p`, maintaining the start/end
    /// designations.
    ///
    /// Rules, applied in order once `p` has been validated:
    ///
    /// 1. If `p` currently holds the start (or end) designation, that
    ///    designation is dropped — whatever `value` is.
    /// 2. If `value` is [`Cell::Start`] and a *different* cell is the
    ///    current start, that cell is demoted to [`Cell::Empty`] and the
    ///    designation moves to `p`. Symmetrically for [`Cell::End`].
    /// 3. The cell at `p` becomes `value`.
    ///
    /// Rewriting a cell with its current value is a no-op in effect.
    /// Fails with [`MazeError::OutOfBounds`] outside the maze; the grid is
    /// untouched on failure.
    pub fn set_cell(&mut self, p: Point, value: Cell) -> Result<(), MazeError> {
        let i = self.index(p).ok_or(MazeError::OutOfBounds {
            pos: p,
            size: self.size(),
        })?;

        // The target loses whichever designation it held.
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }

        // Demote the stale designee elsewhere, then record the new one.
        match value {
            Cell::Start => {
                let stale = self.start.replace(p);
                self.demote(stale);
            }
            Cell::End => {
                let stale = self.end.replace(p);
                self.demote(stale);
            }
            Cell::Empty | Cell::Wall => {}
        }

        self.cells[i] = value;
        Ok(())
    }

    /// Reset a previously designated cell to empty.
    fn demote(&mut self, designee: Option<Point>) {
        if let Some(old) = designee
            && let Some(i) = self.index(old)
        {
            self.cells[i] = Cell::Empty;
        }
    }

    /// Append the in-bounds orthogonal neighbours of `p` to `buf`, in the
    /// fixed order up, down, left, right. The caller clears `buf` first.
    ///
    /// Cell values are not consulted here; walls are a concern of the
    /// search layer.
    pub fn adjacent(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.orthogonal() {
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Reset every cell to [`Cell::Empty`] and drop both designations.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.start = None;
        self.end = None;
    }

    /// Row-major iterator over `(Point, Cell)` pairs, for whole-board
    /// queries such as rendering.
    pub fn iter(&self) -> MazeIter<'_> {
        MazeIter {
            maze: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let c = self.cell(Point::new(x, y)).map_err(|_| fmt::Error)?;
                write!(f, "{}", c.as_char())?;
            }
            if y + 1 < self.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MazeIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Cell)` pairs of a [`Maze`].
pub struct MazeIter<'a> {
    maze: &'a Maze,
    inner: RangeIter,
}

impl Iterator for MazeIter<'_> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let cell = self.maze.cell(p).ok()?;
        Some((p, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MazeIter<'_> {}

impl<'a> IntoIterator for &'a Maze {
    type Item = (Point, Cell);
    type IntoIter = MazeIter<'a>;

    fn into_iter(self) -> MazeIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_empty_and_undesignated() {
        let m = Maze::new(4, 3).unwrap();
        assert_eq!(m.size(), Point::new(4, 3));
        assert_eq!(m.start(), None);
        assert_eq!(m.end(), None);
        for (_, c) in m.iter() {
            assert_eq!(c, Cell::Empty);
        }
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        assert_eq!(
            Maze::new(0, 5),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 5
            })
        );
        assert!(Maze::new(5, 0).is_err());
        assert!(Maze::new(-1, 3).is_err());
    }

    #[test]
    fn set_then_get() {
        let mut m = Maze::new(4, 4).unwrap();
        for v in Cell::VALUES {
            let p = Point::new(2, 1);
            m.set_cell(p, v).unwrap();
            assert_eq!(m.cell(p), Ok(v));
        }
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut m = Maze::new(4, 3).unwrap();
        let size = Point::new(4, 3);
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(4, 0),
            Point::new(0, 3),
        ] {
            assert_eq!(m.cell(p), Err(MazeError::OutOfBounds { pos: p, size }));
            assert_eq!(
                m.set_cell(p, Cell::Wall),
                Err(MazeError::OutOfBounds { pos: p, size })
            );
        }
        // Nothing was written.
        for (_, c) in m.iter() {
            assert_eq!(c, Cell::Empty);
        }
    }

    #[test]
    fn start_designation_moves() {
        let mut m = Maze::new(5, 5).unwrap();
        let a = Point::new(1, 1);
        let b = Point::new(3, 3);
        m.set_cell(a, Cell::Start).unwrap();
        assert_eq!(m.start(), Some(a));
        m.set_cell(b, Cell::Start).unwrap();
        assert_eq!(m.start(), Some(b));
        // Old designee is demoted, and exactly one Start remains.
        assert_eq!(m.cell(a), Ok(Cell::Empty));
        let starts = m.iter().filter(|&(_, c)| c == Cell::Start).count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn end_designation_moves() {
        let mut m = Maze::new(5, 5).unwrap();
        let a = Point::new(0, 4);
        let b = Point::new(4, 0);
        m.set_cell(a, Cell::End).unwrap();
        m.set_cell(b, Cell::End).unwrap();
        assert_eq!(m.end(), Some(b));
        assert_eq!(m.cell(a), Ok(Cell::Empty));
    }

    #[test]
    fn overwriting_a_designee_clears_its_cache() {
        let mut m = Maze::new(5, 5).unwrap();
        let p = Point::new(2, 2);
        m.set_cell(p, Cell::Start).unwrap();
        m.set_cell(p, Cell::Wall).unwrap();
        assert_eq!(m.start(), None);
        assert_eq!(m.cell(p), Ok(Cell::Wall));
    }

    #[test]
    fn start_can_replace_end_in_place() {
        let mut m = Maze::new(5, 5).unwrap();
        let p = Point::new(2, 2);
        m.set_cell(p, Cell::End).unwrap();
        m.set_cell(p, Cell::Start).unwrap();
        assert_eq!(m.end(), None);
        assert_eq!(m.start(), Some(p));
        assert_eq!(m.cell(p), Ok(Cell::Start));
    }

    #[test]
    fn redesignating_the_same_cell_is_stable() {
        let mut m = Maze::new(5, 5).unwrap();
        let p = Point::new(1, 2);
        m.set_cell(p, Cell::Start).unwrap();
        m.set_cell(p, Cell::Start).unwrap();
        assert_eq!(m.start(), Some(p));
        assert_eq!(m.cell(p), Ok(Cell::Start));
    }

    #[test]
    fn rewriting_empty_is_idempotent() {
        let mut m = Maze::new(3, 3).unwrap();
        let p = Point::new(1, 1);
        m.set_cell(p, Cell::Empty).unwrap();
        let snapshot = m.clone();
        m.set_cell(p, Cell::Empty).unwrap();
        assert_eq!(m, snapshot);
    }

    #[test]
    fn adjacent_order_and_bounds() {
        let m = Maze::new(3, 3).unwrap();
        let mut buf = Vec::new();

        m.adjacent(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(1, 0), // up
                Point::new(1, 2), // down
                Point::new(0, 1), // left
                Point::new(2, 1), // right
            ]
        );

        // Corner keeps only the in-bounds neighbours, order preserved.
        buf.clear();
        m.adjacent(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 0)]);

        buf.clear();
        m.adjacent(Point::new(2, 2), &mut buf);
        assert_eq!(buf, vec![Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut m = Maze::new(3, 3).unwrap();
        m.set_cell(Point::new(0, 0), Cell::Start).unwrap();
        m.set_cell(Point::new(2, 2), Cell::End).unwrap();
        m.set_cell(Point::new(1, 1), Cell::Wall).unwrap();
        m.clear();
        assert_eq!(m.start(), None);
        assert_eq!(m.end(), None);
        assert!(m.iter().all(|(_, c)| c == Cell::Empty));
    }

    #[test]
    fn display_renders_rows() {
        let mut m = Maze::new(3, 2).unwrap();
        m.set_cell(Point::new(0, 0), Cell::Start).unwrap();
        m.set_cell(Point::new(1, 0), Cell::Wall).unwrap();
        m.set_cell(Point::new(2, 1), Cell::End).unwrap();
        assert_eq!(m.to_string(), "S#.\n..E");
    }

    #[test]
    fn iter_is_row_major_and_sized() {
        let mut m = Maze::new(3, 2).unwrap();
        m.set_cell(Point::new(1, 0), Cell::Wall).unwrap();
        let items: Vec<_> = m.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), Cell::Wall));
        assert_eq!(m.iter().len(), 6);
    }
}
