use super::Coord;

/// Square grid of values stored in a flat buffer.
/// Cell `(x, y)` lives at flat index `x * size + y`, which is also the cell id
/// used as a vertex index in the adjacency graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    pub data: Box<[T]>,
    size: u8,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `init` with the cell id of every cell.
    pub fn from_fn(size: u8, init: impl FnMut(usize) -> T) -> Self {
        let total = size as usize * size as usize;
        let data = (0..total).map(init).collect::<Vec<_>>().into_boxed_slice();
        Grid { data, size }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }

    pub fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since size is u8 (assuming usize is at least 32 bits)
        coord.0 as usize * self.size as usize + coord.1 as usize
    }

    /// Inverse of [`Grid::ravel_index`].
    pub fn unravel_index(&self, id: usize) -> Coord {
        let size = self.size as usize;
        ((id / size) as u8, (id % size) as u8)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T: Clone> Grid<T> {
    pub fn new(size: u8, value: T) -> Self {
        let data = vec![value; size as usize * size as usize].into_boxed_slice();
        Grid { data, size }
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        if !self.is_in_bounds(index) {
            panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                index, self.size, self.size
            );
        }
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        if !self.is_in_bounds(index) {
            panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                index, self.size, self.size
            );
        }
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 0u32);
        grid[(2, 3)] = 7;
        assert_eq!(grid[(2, 3)], 7);
        assert_eq!(grid.data[2 * 5 + 3], 7);
    }

    #[test]
    fn test_ravel_roundtrip_on_corners() {
        let grid = Grid::from_fn(4, |id| id);
        for coord in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            let id = grid.ravel_index(coord);
            assert_eq!(grid[coord], id);
            assert_eq!(grid.unravel_index(id), coord);
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(3, false);
        let _ = grid[(3, 0)];
    }
}
