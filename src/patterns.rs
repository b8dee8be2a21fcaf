// patterns.rs - Named seed patterns stamped onto a grid

use crate::grid::Grid;

/// A named arrangement of live cells, given as (x, y) offsets from its
/// top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Beehive",
        cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
];

impl Pattern {
    /// Copy of `grid` with this pattern's cells switched on at offset (x, y).
    pub fn stamp(&self, grid: &Grid, x: isize, y: isize) -> Grid {
        let existing = grid
            .cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(cx, cy, _)| (cx as isize, cy as isize));
        let placed = self.cells.iter().map(|&(dx, dy)| (x + dx, y + dy));
        Grid::with_alive(existing.chain(placed))
    }

    pub fn grid_at(&self, x: isize, y: isize) -> Grid {
        self.stamp(&Grid::empty(), x, y)
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{HEIGHT, WIDTH};

    fn pattern(name: &str) -> &'static Pattern {
        find(name).unwrap_or_else(|| panic!("missing pattern {name}"))
    }

    fn advance(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = grid.next();
        }
        grid
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(pattern("glider").name, "Glider");
        assert_eq!(pattern("BLINKER").name, "Blinker");
        assert!(find("Gosper gun").is_none());
    }

    #[test]
    fn still_lifes_do_not_change() {
        for name in ["Block", "Beehive"] {
            let grid = pattern(name).grid_at(12, 12);
            assert_eq!(grid.next(), grid, "{name} changed");
        }
    }

    #[test]
    fn period_two_oscillators_return_after_two_steps() {
        for name in ["Blinker", "Toad", "Beacon"] {
            let grid = pattern(name).grid_at(15, 15);
            let once = grid.next();
            assert_ne!(once, grid, "{name} did not oscillate");
            assert_eq!(once.next(), grid, "{name} period is not two");
        }
    }

    #[test]
    fn blinker_rotates() {
        let horizontal = pattern("Blinker").grid_at(5, 5);
        let vertical = Grid::with_alive([(6, 4), (6, 5), (6, 6)]);
        assert_eq!(horizontal.next(), vertical);
    }

    #[test]
    fn glider_moves_one_cell_diagonally_every_four_generations() {
        let glider = pattern("Glider");
        let start = glider.grid_at(10, 10);
        assert_eq!(advance(start, 4), glider.grid_at(11, 11));
        assert_eq!(start.population(), 5);
    }

    #[test]
    fn glider_wraps_around_the_torus() {
        let start = pattern("Glider").grid_at(WIDTH as isize - 2, HEIGHT as isize - 2);
        assert_eq!(start.population(), 5);
        // A full lap across a square torus brings it back home
        assert_eq!(advance(start, 4 * WIDTH), start);
    }

    #[test]
    fn stamp_keeps_existing_cells() {
        let base = pattern("Block").grid_at(0, 0);
        let both = pattern("Blinker").stamp(&base, 20, 20);
        assert_eq!(both.population(), 7);
        assert!(both.at(0, 0));
        assert!(both.at(22, 20));
    }
}
