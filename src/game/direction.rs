use super::grid::Coord;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Return the cell one step away from `pos` in this direction.  The
    /// result may lie outside the grid.
    pub(crate) fn step(self, pos: Coord) -> Coord {
        let Coord { x, y } = pos;
        match self {
            Direction::Up => Coord::new(x, y - 1),
            Direction::Down => Coord::new(x, y + 1),
            Direction::Left => Coord::new(x - 1, y),
            Direction::Right => Coord::new(x + 1, y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Coord::new(2, 7), Coord::new(2, 6))]
    #[case(Direction::Down, Coord::new(2, 7), Coord::new(2, 8))]
    #[case(Direction::Left, Coord::new(2, 7), Coord::new(1, 7))]
    #[case(Direction::Right, Coord::new(2, 7), Coord::new(3, 7))]
    #[case(Direction::Up, Coord::new(2, 0), Coord::new(2, -1))]
    #[case(Direction::Left, Coord::new(0, 7), Coord::new(-1, 7))]
    #[case(Direction::Right, Coord::new(19, 9), Coord::new(20, 9))]
    fn test_direction_step(#[case] d: Direction, #[case] pos: Coord, #[case] r: Coord) {
        assert_eq!(d.step(pos), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down, true)]
    #[case(Direction::Down, Direction::Up, true)]
    #[case(Direction::Left, Direction::Right, true)]
    #[case(Direction::Right, Direction::Left, true)]
    #[case(Direction::Up, Direction::Left, false)]
    #[case(Direction::Right, Direction::Down, false)]
    #[case(Direction::Right, Direction::Right, false)]
    fn test_is_opposite(#[case] a: Direction, #[case] b: Direction, #[case] opposite: bool) {
        assert_eq!(a.is_opposite(b), opposite);
    }
}
