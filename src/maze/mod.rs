pub mod cell;
pub mod direction;
pub mod graph;
pub mod grid;
pub mod rooms;

use std::fmt;

pub use cell::GridCell;
pub use direction::Direction;
pub use graph::{AdjacencyGraph, DegreeHistogram};
use grid::Grid;
pub use rooms::RoomMap;

/// Grid coordinate `(x, y)`: `x` is the column, `y` is the row.
pub type Coord = (u8, u8);

/// Wall-and-passage picture of a maze.
///
/// `size` cells in each dimension are laid out with a wall slot between every
/// pair of neighbors, so the internal grid is `2 * size + 1` wide.
pub struct Maze {
    grid: Grid<GridCell>,
    size: u8,
}

impl Maze {
    /// Largest size whose wall grid still fits `u8` coordinates.
    pub const MAX_SIZE: u8 = 127;

    /// Creates a maze of the given size with every wall standing.
    ///
    /// # Panics
    /// * If `size` exceeds [`Maze::MAX_SIZE`]
    pub fn new(size: u8) -> Self {
        if size > Maze::MAX_SIZE {
            panic!("Cannot render a maze wider than {} cells", Maze::MAX_SIZE);
        }
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let grid_size = size * 2 + 1;
        let mut maze = Maze {
            grid: Grid::new(grid_size, GridCell::Wall),
            size,
        };
        (0..size).for_each(|y| {
            (0..size).for_each(|x| {
                maze[(x, y)] = GridCell::Path;
            });
        });
        maze
    }

    /// Carves a passage for every connection of `graph`, whose vertices are
    /// the cell ids of a `size`x`size` grid.
    pub fn from_graph(graph: &AdjacencyGraph, size: u8) -> Self {
        let mut maze = Maze::new(size);
        // Zero-sized cells, only here for the id to coordinate mapping
        let cells = Grid::new(size, ());
        for a in 0..graph.total_nodes() {
            for b in graph.neighbors(a).filter(|&b| b > a) {
                maze.remove_wall_between(cells.unravel_index(a), cells.unravel_index(b));
            }
        }
        maze
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }

    /// Position of the wall slot separating two orthogonally adjacent cells.
    ///
    /// # Panics
    /// * If either cell is out of bounds
    /// * If the cells are not orthogonal neighbors
    fn wall_coord(&self, a: Coord, b: Coord) -> Coord {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            panic!("The given coordinate is out of bounds");
        }
        if a.0.abs_diff(b.0) + a.1.abs_diff(b.1) != 1 {
            panic!("Cells {:?} and {:?} are not orthogonal neighbors", a, b);
        }
        // The wall sits halfway between the two cell slots
        (a.0 + b.0 + 1, a.1 + b.1 + 1)
    }

    /// Removes the wall between two adjacent cells.
    /// Returns `true` if a wall was removed, `false` if the passage was already open.
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> bool {
        let wall_coord = self.wall_coord(a, b);
        if self.grid[wall_coord] == GridCell::Wall {
            self.grid[wall_coord] = GridCell::Path;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn is_wall_between(&self, a: Coord, b: Coord) -> bool {
        self.grid[self.wall_coord(a, b)] == GridCell::Wall
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[(index.0 * 2 + 1, index.1 * 2 + 1)]
    }
}

impl std::ops::IndexMut<Coord> for Maze {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.grid[(index.0 * 2 + 1, index.1 * 2 + 1)]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid_size = self.grid.size();
        for y in 0..grid_size {
            for x in 0..grid_size {
                write!(f, "{}", self.grid[(x, y)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
