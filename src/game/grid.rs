use std::fmt;

/// A cell position on the playing field.  `x` grows to the right and `y`
/// grows downwards.
///
/// Coordinates outside of the grid are representable so that a snake's next
/// head position can be computed before it's checked against the walls.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Coord {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Coord {
    pub(crate) const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Coord {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square playing field of `size` × `size` cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    size: u16,
}

impl Grid {
    pub(crate) const fn new(size: u16) -> Grid {
        Grid { size }
    }

    pub(crate) fn size(self) -> u16 {
        self.size
    }

    pub(crate) fn in_bounds(self, c: Coord) -> bool {
        let n = i32::from(self.size);
        (0..n).contains(&c.x) && (0..n).contains(&c.y)
    }

    /// The cell at which a freshly-reset snake's head is placed
    pub(crate) fn center(self) -> Coord {
        let mid = i32::from(self.size / 2);
        Coord::new(mid, mid)
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Iterate over every cell in the grid, row by row
    #[cfg(test)]
    pub(crate) fn cells(self) -> impl Iterator<Item = Coord> {
        let n = i32::from(self.size);
        (0..n).flat_map(move |y| (0..n).map(move |x| Coord::new(x, y)))
    }
}
