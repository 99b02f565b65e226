/// A grid cell, addressed 1-indexed as in `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    pub fn in_bounds(&self, n: usize) -> bool {
        self.row >= 1 && self.row <= n && self.col >= 1 && self.col <= n
    }

    /// Linear id in `0..n*n`. Only meaningful for in-bounds sites.
    pub fn index(&self, n: usize) -> usize {
        (self.row - 1) * n + (self.col - 1)
    }

    /// The adjacent site in `dir`, if it lies on the n-by-n grid.
    pub fn neighbor(&self, dir: Direction, n: usize) -> Option<Site> {
        let (row, col) = match dir {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        Some(Site { row, col }).filter(|site| site.in_bounds(n))
    }

    pub fn neighbors(&self, n: usize) -> impl Iterator<Item = Site> + '_ {
        Direction::all_directions()
            .iter()
            .filter_map(move |&dir| self.neighbor(dir, n))
    }
}

impl From<(usize, usize)> for Site {
    fn from((row, col): (usize, usize)) -> Site {
        Site { row, col }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up, Down, Left, Right,
}

impl Direction {
    pub fn all_directions() -> &'static [Direction; 4] {
        &[Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }
}
