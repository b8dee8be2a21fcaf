// grid.rs - Toroidal grid for Conway's Game of Life

use rand::{Rng, SeedableRng, rngs::SmallRng};

// Compile-time grid size configuration
pub const WIDTH: usize = 40;                          // Columns
pub const HEIGHT: usize = 40;                         // Rows

pub type Cell = bool;                                 // true = alive
pub type TRow = [Cell; WIDTH];
pub type TGrid = [TRow; HEIGHT];

// Relative positions of the 8 surrounding cells
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// One generation of the automaton.
///
/// A `Grid` is a value snapshot: `next` never touches `self` and always hands
/// back a fresh grid. Every coordinate lookup wraps around both edges, so the
/// playing field behaves like the surface of a torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: TGrid,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// All cells dead.
    pub const fn empty() -> Self {
        Self { cells: [[false; WIDTH]; HEIGHT] }
    }

    /// Grid with exactly the given coordinates alive. Coordinates wrap.
    pub fn with_alive<I>(alive: I) -> Self
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let mut grid = Self::empty();
        for (x, y) in alive {
            let (col, row) = wrap(x, y);
            grid.cells[row][col] = true;
        }
        grid
    }

    /// Seeded random grid; each cell is alive with probability 1/8.
    pub fn new_random(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Self::empty();
        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.random_range(0..8u32) == 0;
            }
        }
        grid
    }

    /// Cell at (x, y), wrapping negative and out-of-range coordinates.
    pub fn at(&self, x: isize, y: isize) -> Cell {
        let (col, row) = wrap(x, y);
        self.cells[row][col]
    }

    /// Lazily walks every `(x, y, cell)` row by row, top to bottom and left to
    /// right. Calling it again starts a fresh walk.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..HEIGHT).flat_map(move |y| (0..WIDTH).map(move |x| (x, y, self.cells[y][x])))
    }

    /// Live cells among the 8 wrapped neighbours of (x, y), excluding itself.
    pub fn count_neighbours(&self, x: isize, y: isize) -> usize {
        NEIGHBOURS
            .iter()
            .filter(|&&(dx, dy)| self.at(x + dx, y + dy))
            .count()
    }

    /// Successor generation under B3/S23.
    pub fn next(&self) -> Self {
        let mut next = Self::empty();
        for (x, y, alive) in self.cells() {
            let count = self.count_neighbours(x as isize, y as isize);
            next.cells[y][x] = match (alive, count) {
                (true, 2) | (true, 3) => true,   // Survival
                (false, 3)            => true,   // Birth
                _                     => false,  // Death or stays dead
            };
        }
        next
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }
}

fn wrap(x: isize, y: isize) -> (usize, usize) {
    (
        x.rem_euclid(WIDTH as isize) as usize,
        y.rem_euclid(HEIGHT as isize) as usize,
    )
}
