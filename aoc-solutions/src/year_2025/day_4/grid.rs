use itertools::iproduct;
use thiserror::Error;
use tracing::debug;

/// A marker with fewer occupied neighbours than this can be removed
pub const CROWDED: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellParseError {
    #[error("invalid character {0:?}, expected '@' or '.'")]
    InvalidCharacter(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rows of cells, `true` where a roll sits. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Parse one row of `@` (roll) and `.` (empty) cells.
    pub fn parse_row(line: &str) -> Result<Vec<bool>, CellParseError> {
        line.chars()
            .map(|c| match c {
                '@' => Ok(true),
                '.' => Ok(false),
                other => Err(CellParseError::InvalidCharacter(other)),
            })
            .collect()
    }

    pub fn marker_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Cells outside the grid, including past the end of a short row, are empty.
    pub fn is_marker(&self, row: isize, col: isize) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Occupied cells among the 8 surrounding `pos`.
    pub fn live_neighbours(&self, pos: GridPos) -> usize {
        let (row, col) = (pos.row as isize, pos.col as isize);
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| self.is_marker(row + dr, col + dc))
            .count()
    }

    pub fn is_removable(&self, pos: GridPos) -> bool {
        self.is_marker(pos.row as isize, pos.col as isize) && self.live_neighbours(pos) < CROWDED
    }

    pub fn markers(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(col, _)| GridPos::new(row, col))
        })
    }

    /// Every marker removable right now, judged against the current grid.
    pub fn removable(&self) -> Vec<GridPos> {
        self.markers()
            .filter(|&pos| self.is_removable(pos))
            .collect()
    }

    /// Single pass: how many markers could be removed, without removing them.
    pub fn count_removable(&self) -> usize {
        self.markers()
            .filter(|&pos| self.is_removable(pos))
            .count()
    }

    pub fn clear(&mut self, positions: &[GridPos]) {
        for pos in positions {
            if let Some(cell) = self
                .rows
                .get_mut(pos.row)
                .and_then(|cells| cells.get_mut(pos.col))
            {
                *cell = false;
            }
        }
    }

    /// One pass: collect the removable markers first, then clear them together.
    pub fn reduce_pass(&mut self) -> usize {
        let batch = self.removable();
        self.clear(&batch);
        batch.len()
    }

    /// Repeat passes until nothing is removable; returns the total removed.
    pub fn reduce(&mut self) -> usize {
        let mut total = 0;
        for pass in 1.. {
            let removed = self.reduce_pass();
            if removed == 0 {
                debug!(
                    passes = pass - 1,
                    total,
                    remaining = self.marker_count(),
                    "grid settled"
                );
                break;
            }
            debug!(pass, removed, "removed markers");
            total += removed;
        }
        total
    }
}

impl FromIterator<Vec<bool>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<bool>>>(rows: I) -> Self {
        Self::from_rows(rows.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(text: &str) -> Grid {
        text.lines()
            .map(|line| Grid::parse_row(line).unwrap())
            .collect()
    }

    #[test]
    fn test_isolated_marker_removed_first_pass() {
        let mut g = grid("...\n.@.\n...");
        assert_eq!(g.count_removable(), 1);
        assert_eq!(g.reduce_pass(), 1);
        assert_eq!(g.marker_count(), 0);
    }

    #[test]
    fn test_packed_block_peels_from_outside() {
        let mut g = grid("@@@\n@@@\n@@@");
        // only the corners have fewer than 4 neighbours
        assert_eq!(g.reduce_pass(), 4);
        assert!(!g.is_marker(0, 0));
        assert!(g.is_marker(0, 1));
        assert!(g.is_marker(1, 1));
        // then the edges
        assert_eq!(g.reduce_pass(), 4);
        assert!(g.is_marker(1, 1));
        // then the centre
        assert_eq!(g.reduce_pass(), 1);
        assert_eq!(g.reduce_pass(), 0);
    }

    #[test]
    fn test_reduce_block_until_empty() {
        let mut g = grid("@@@\n@@@\n@@@");
        assert_eq!(g.reduce(), 9);
        assert_eq!(g.marker_count(), 0);
    }

    #[test]
    fn test_batch_is_simultaneous() {
        // each end has one neighbour, the middle two; all go in the same pass
        let mut g = grid("@@@");
        assert_eq!(g.removable().len(), 3);
        assert_eq!(g.reduce_pass(), 3);
    }

    #[test]
    fn test_stable_core_survives() {
        // a 4x4 block loses its corners, the rest keeps at least 4 neighbours
        let mut g = grid("@@@@\n@@@@\n@@@@\n@@@@");
        assert_eq!(g.reduce(), 4);
        assert_eq!(g.marker_count(), 12);
        assert_eq!(g.reduce(), 0);
    }

    #[test]
    fn test_ragged_rows() {
        let g = grid("@@@@@\n@\n@@@");
        assert!(!g.is_marker(1, 3));
        assert!(!g.is_marker(-1, 0));
        assert!(!g.is_marker(0, -1));
        assert!(!g.is_marker(3, 0));
        assert_eq!(g.live_neighbours(GridPos::new(1, 0)), 4);
        assert_eq!(g.live_neighbours(GridPos::new(0, 3)), 2);
    }

    #[test]
    fn test_parse_row_rejects_other_characters() {
        assert_eq!(Grid::parse_row("@.@"), Ok(vec![true, false, true]));
        assert_eq!(
            Grid::parse_row("@#."),
            Err(CellParseError::InvalidCharacter('#'))
        );
    }

    fn grids() -> impl Strategy<Value = Grid> {
        prop::collection::vec(prop::collection::vec(any::<bool>(), 0..12), 0..12)
            .prop_map(Grid::from_rows)
    }

    proptest! {
        #[test]
        fn prop_reduce_is_idempotent(g in grids()) {
            let mut g = g;
            let before = g.marker_count();
            let removed = g.reduce();
            prop_assert_eq!(g.marker_count(), before - removed);
            prop_assert_eq!(g.count_removable(), 0);
            prop_assert_eq!(g.reduce(), 0);
        }

        #[test]
        fn prop_first_pass_matches_single_count(g in grids()) {
            let mut g = g;
            let expected = g.count_removable();
            prop_assert_eq!(g.reduce_pass(), expected);
        }
    }
}
