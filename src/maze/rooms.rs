use super::{Coord, grid::Grid};

/// Room label of every cell.
///
/// Cells share a room exactly when they hold the same label. Labels are not
/// parent pointers: merging rewrites the label of every member cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMap {
    labels: Grid<usize>,
}

impl RoomMap {
    /// Every cell starts alone in a room labelled with its own cell id.
    pub fn new(size: u8) -> Self {
        RoomMap {
            labels: Grid::from_fn(size, |id| id),
        }
    }

    pub fn size(&self) -> u8 {
        self.labels.size()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.labels.is_in_bounds(coord)
    }

    /// Cell id of `coord`, used as its vertex index in the adjacency graph.
    pub fn cell_id(&self, coord: Coord) -> usize {
        self.labels.ravel_index(coord)
    }

    pub fn label(&self, coord: Coord) -> usize {
        self.labels[coord]
    }

    /// Merges the rooms of all `cells` into the room of the first one.
    ///
    /// Scans the whole map once and relabels every cell holding any of the
    /// collected labels. Returns the label of the merged room.
    ///
    /// # Panics
    /// * If `cells` is empty or any coordinate is out of bounds
    pub fn merge(&mut self, cells: &[Coord]) -> usize {
        let target = self.label(cells[0]);
        let merged = cells.iter().map(|&c| self.label(c)).collect::<Vec<_>>();
        for label in self.labels.iter_mut() {
            if merged.contains(label) {
                *label = target;
            }
        }
        target
    }

    /// Number of distinct rooms. Walks the whole map.
    pub fn count_rooms(&self) -> usize {
        let mut labels = self.labels.data.to_vec();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}
