use mazer_core::{Maze, Point};

/// Minimal search interface — passable-neighbour enumeration.
pub trait Pather {
    /// Append the passable neighbours of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Orthogonal in-bounds neighbours with wall cells filtered out; start and
/// end cells count as ordinary floor. The up, down, left, right order of
/// [`Point::orthogonal`] is preserved, so traversal order over a maze is
/// deterministic.
impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.orthogonal() {
            if self.cell(n).is_ok_and(|c| !c.is_wall()) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Cell;

    #[test]
    fn walls_and_out_of_bounds_filtered() {
        let mut m = Maze::new(3, 3).unwrap();
        m.set_cell(Point::new(1, 0), Cell::Wall).unwrap();
        let mut buf = Vec::new();
        m.neighbors(Point::new(1, 1), &mut buf);
        // Up is a wall; down, left, right remain in order.
        assert_eq!(
            buf,
            vec![Point::new(1, 2), Point::new(0, 1), Point::new(2, 1)]
        );

        buf.clear();
        m.neighbors(Point::new(0, 0), &mut buf);
        // Up and left are out of bounds, right is the wall.
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }

    #[test]
    fn start_and_end_are_passable() {
        let mut m = Maze::new(3, 1).unwrap();
        m.set_cell(Point::new(0, 0), Cell::Start).unwrap();
        m.set_cell(Point::new(2, 0), Cell::End).unwrap();
        let mut buf = Vec::new();
        m.neighbors(Point::new(1, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 0), Point::new(2, 0)]);
    }
}
