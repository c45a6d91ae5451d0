use std::sync::mpsc::SyncSender;

use rand::Rng;

use crate::{
    error::GenerationError,
    generators::{
        GenerationConfig, GenerationEvent, GenerationResult, legality::available_directions,
    },
    maze::{
        AdjacencyGraph, Coord, DegreeHistogram, Direction, RoomMap, direction::offset_coord,
    },
};

/// Cells touched by moving from `cell` in `direction`: the cell itself, the
/// orthogonal neighbor and, for diagonal codes, the diagonal target.
fn touched_cells(cell: Coord, direction: Direction, size: u8) -> Vec<Coord> {
    std::iter::once(cell)
        .chain(offset_coord(cell, direction.step(), size))
        .chain(
            direction
                .diagonal()
                .and_then(|offset| offset_coord(cell, offset, size)),
        )
        .collect()
}

/// Randomized Kruskal over a `config.size`x`config.size` grid.
///
/// Each pass samples a random cell and, if it has any legal direction, commits
/// one of them uniformly at random and merges the rooms involved. Runs until a
/// single room is left, or gives up once more than
/// [`GenerationConfig::max_fail_streak`] consecutive samples found no legal
/// direction. `config.seed` is ignored, every draw comes from `rng`.
pub fn randomized_kruskal<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
    events: Option<SyncSender<GenerationEvent>>,
) -> Result<GenerationResult, GenerationError> {
    let send = |event: GenerationEvent| {
        if let Some(sender) = &events {
            let _ = sender.send(event);
        }
    };

    let GenerationConfig { size, options, .. } = *config;
    let total_nodes = config.total_nodes();
    let max_fail_streak = config.max_fail_streak();

    // Every cell starts in its own room
    let mut rooms = RoomMap::new(size);
    let mut graph = AdjacencyGraph::new(total_nodes);

    tracing::info!(
        "[kruskal] Generating {}x{} maze with {} directions",
        size,
        size,
        options
    );
    send(GenerationEvent::Started {
        rooms: rooms.clone(),
    });

    let mut pass = 0;
    let mut failed_passes = 0;
    let mut fail_streak = 0;
    let mut rooms_left = total_nodes;

    while rooms_left > 1 {
        pass += 1;

        let cell: Coord = (rng.random_range(0..size), rng.random_range(0..size));
        let available = available_directions(cell, &rooms, options);

        // No legal direction from this cell, sample again
        if available.is_empty() {
            failed_passes += 1;
            fail_streak += 1;
            tracing::trace!("[kruskal] Pass {}: no legal direction from {:?}", pass, cell);

            if fail_streak > max_fail_streak {
                tracing::warn!(
                    "[kruskal] Giving up after {} consecutive failed samples, {} rooms left",
                    fail_streak,
                    rooms_left
                );
                send(GenerationEvent::Aborted {
                    total_passes: pass,
                    total_failed_passes: failed_passes,
                    fail_streak,
                });
                return Err(GenerationError::ExhaustedRetries {
                    fail_streak,
                    total_passes: pass,
                    rooms_left,
                    partial: Box::new(graph),
                });
            }
            continue;
        }
        fail_streak = 0;

        let selected = available[rng.random_range(0..available.len())];
        let nodes = touched_cells(cell, selected, size);
        debug_assert_eq!(nodes.len(), if selected.is_diagonal() { 3 } else { 2 });

        // Link consecutive cells: source to hinge, then hinge to diagonal target
        let ids = nodes.iter().map(|&c| rooms.cell_id(c)).collect::<Vec<_>>();
        ids.windows(2).for_each(|pair| graph.connect(pair[0], pair[1]));

        rooms.merge(&nodes);
        rooms_left -= nodes.len() - 1;

        tracing::debug!(
            "[kruskal] Pass {}: {:?} -> {} touching {:?}, {} rooms left",
            pass,
            cell,
            selected,
            nodes,
            rooms_left
        );
        send(GenerationEvent::Pass {
            pass,
            cell,
            available,
            selected,
            nodes,
            rooms: rooms.clone(),
            rooms_left,
        });
    }

    let degrees = DegreeHistogram::from_graph(&graph)?;

    tracing::info!(
        "[kruskal] Done after {} passes ({} failed)",
        pass,
        failed_passes
    );
    send(GenerationEvent::Finished {
        total_passes: pass,
        total_failed_passes: failed_passes,
    });

    Ok(GenerationResult {
        graph,
        total_passes: pass,
        total_failed_passes: failed_passes,
        degrees,
        size,
        total_nodes,
    })
}
