// patterns.rs - Well-known starting shapes

use crate::grid::Grid;

/// A named shape given as `(dx, dy)` offsets from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BLINKER,
    GLIDER,
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

impl Pattern {
    /// Bounding box as `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(dx, dy)| {
            (w.max(dx + 1), h.max(dy + 1))
        })
    }

    /// Top-left corner that centres the pattern in a grid of side `size`.
    pub fn centred_origin(&self, size: usize) -> (usize, usize) {
        let (w, h) = self.extent();
        (size.saturating_sub(w) / 2, size.saturating_sub(h) / 2)
    }

    /// Sets the pattern's cells alive with its corner at `origin`. Cells that
    /// would land on the border or outside the grid are dropped.
    pub fn stamp(&self, grid: &mut Grid, origin: (usize, usize)) -> usize {
        let mut placed = 0;
        for &(dx, dy) in self.cells {
            let (x, y) = (origin.0 + dx, origin.1 + dy);
            if grid.is_interior(x, y) {
                grid.put(x, y, true);
                placed += 1;
            }
        }
        placed
    }
}

/// Looks up a pattern by name, ignoring case and separators.
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = normalise(name);
    PATTERNS.iter().find(|p| normalise(p.name) == wanted)
}

fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_forgiving() {
        assert_eq!(find("r-pentomino").map(|p| p.name), Some("R-pentomino"));
        assert_eq!(find("gosper_glider_gun").map(|p| p.name), Some("Gosper Glider Gun"));
        assert_eq!(find("BLINKER"), Some(&BLINKER));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn extents() {
        assert_eq!(BLINKER.extent(), (3, 1));
        assert_eq!(find("pulsar").unwrap().extent(), (13, 13));
        assert_eq!(find("gosper glider gun").unwrap().extent(), (36, 9));
    }

    #[test]
    fn stamp_clips_to_interior() {
        let mut grid = Grid::new(5).unwrap();
        // Corner at the border: only the cells inside 1..4 survive
        assert_eq!(BLOCK.stamp(&mut grid, (0, 0)), 1);
        assert!(grid.at(1, 1));
        assert!(!grid.at(0, 0));

        let mut small = Grid::new(5).unwrap();
        let origin = BLINKER.centred_origin(5);
        assert_eq!(origin, (1, 2));
        assert_eq!(BLINKER.stamp(&mut small, origin), 3);
    }
}
