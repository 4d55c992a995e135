//! Day 3: Toboggan Trajectory.

use tracing::debug;

use crate::{Answers, Error};

const TREE: u8 = b'#';
const OPEN: u8 = b'.';

/// `(right, down)` steps.
pub type Slope = (usize, usize);

pub const SLOPES: [Slope; 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

/// The map repeats to the right forever; only one tile of it is stored.
#[derive(Debug)]
pub struct Grid<'a> {
    rows: Vec<&'a [u8]>,
    width: usize,
}

impl<'a> Grid<'a> {
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let rows: Vec<&[u8]> = input.lines().map(|line| line.trim_end().as_bytes()).collect();
        let width = rows.first().map_or(0, |row| row.len());
        for (ix, row) in rows.iter().enumerate() {
            if row.is_empty() || row.len() != width {
                return Err(Error::line(ix, format!("expected a row of width {width}, got {}", row.len())));
            }
            if let Some(&cell) = row.iter().find(|&&cell| cell != TREE && cell != OPEN) {
                return Err(Error::line(ix, format!("unexpected map cell '{}'", cell as char)));
            }
        }
        Ok(Self {rows, width})
    }

    /// Trees hit going down from the top left corner.
    ///
    /// # Panics
    /// If `dy` is zero.
    pub fn count_trees(&self, (dx, dy): Slope) -> usize {
        self.rows.iter().step_by(dy).enumerate()
            .filter(|(step, row)| row[step * dx % self.width] == TREE)
            .count()
    }
}

pub fn part_one(grid: &Grid) -> usize {
    grid.count_trees((3, 1))
}

pub fn part_two(grid: &Grid) -> usize {
    SLOPES.iter().map(|&slope| grid.count_trees(slope)).product()
}

pub fn solve(input: &str) -> Result<Answers, Error> {
    let grid = Grid::parse(input)?;
    debug!(rows = grid.rows.len(), width = grid.width, "parsed map");
    Ok(Answers::new(part_one(&grid), part_two(&grid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn example_works() {
        let input = indoc! {"
            ..##.......
            #...#...#..
            .#....#..#.
            ..#.#...#.#
            .#...##..#.
            ..#.##.....
            .#.#.#....#
            .#........#
            #.##...#...
            #...##....#
            .#..#...#.#
        "};
        let grid = Grid::parse(input).unwrap();
        let counts = SLOPES.map(|slope| grid.count_trees(slope));
        assert_eq!(counts, [2, 7, 3, 4, 2]);
        assert_eq!(part_one(&grid), 7);
        assert_eq!(part_two(&grid), 336);
    }

    #[test]
    fn columns_wrap_around() {
        let grid = Grid::parse("#..\n#..\n#..\n.#.\n").unwrap();
        // columns 0, 2, 1, 0
        assert_eq!(grid.count_trees((2, 1)), 1);
        // columns 0, 3 % 3, 6 % 3, 9 % 3
        assert_eq!(grid.count_trees((3, 1)), 3);

        let single = Grid::parse("#.").unwrap();
        assert_eq!(single.count_trees((5, 1)), 1);
    }

    #[test]
    fn steep_slopes_skip_rows() {
        let grid = Grid::parse("#..\n###\n.#.\n###\n..#\n").unwrap();
        // rows 0, 2, 4 at columns 0, 1, 2
        assert_eq!(grid.count_trees((1, 2)), 3);
        // rows 0, 3 at columns 0, 2
        assert_eq!(grid.count_trees((2, 3)), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(Grid::parse("...\n..\n"), Err(Error::Line {line: 2, ..})));
        assert!(matches!(Grid::parse("...\n.X.\n"), Err(Error::Line {line: 2, ..})));
    }
}
