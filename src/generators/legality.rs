use crate::{
    generators::DirectionOptions,
    maze::{Coord, Direction, RoomMap, direction::offset_coord},
};

fn all_unique(a: usize, b: usize, c: usize) -> bool {
    a != b && b != c && a != c
}

/// Checks whether `direction` is a legal connection from `coord` right now.
///
/// Orthogonal moves must join two different rooms. Diagonal moves must touch
/// three cells (source, hinge and target) that all sit in different rooms, so
/// that committing both edges cannot close a cycle.
pub fn is_legal(
    coord: Coord,
    direction: Direction,
    rooms: &RoomMap,
    options: DirectionOptions,
) -> bool {
    let size = rooms.size();
    let Some(hinge) = offset_coord(coord, direction.step(), size) else {
        return false;
    };
    match direction.diagonal() {
        None => options.enable_standard && rooms.label(coord) != rooms.label(hinge),
        Some(offset) => {
            if !options.enable_diagonal {
                return false;
            }
            let Some(target) = offset_coord(coord, offset, size) else {
                return false;
            };
            all_unique(rooms.label(coord), rooms.label(hinge), rooms.label(target))
        }
    }
}

/// Lists the directions that are legal from `coord`, in canonical order.
/// An empty list is a normal answer: the cell has nowhere to go right now.
///
/// # Panics
/// * If `coord` is out of bounds
pub fn available_directions(
    coord: Coord,
    rooms: &RoomMap,
    options: DirectionOptions,
) -> Vec<Direction> {
    if !rooms.is_in_bounds(coord) {
        panic!("The given coordinate is out of bounds");
    }
    Direction::ALL
        .into_iter()
        .filter(|&direction| is_legal(coord, direction, rooms, options))
        .collect()
}
