use std::sync::mpsc::SyncSender;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
pub mod legality;

pub use kruskal::randomized_kruskal;
pub use legality::available_directions;

use crate::{
    error::GenerationError,
    maze::{AdjacencyGraph, Coord, DegreeHistogram, Direction, RoomMap},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Which kinds of connection a generation run may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionOptions {
    /// Allow the four orthogonal directions.
    pub enable_standard: bool,
    /// Allow the eight diagonal directions.
    pub enable_diagonal: bool,
}

impl Default for DirectionOptions {
    fn default() -> Self {
        Self {
            enable_standard: true,
            enable_diagonal: false,
        }
    }
}

impl std::fmt::Display for DirectionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.enable_standard, self.enable_diagonal) {
            (true, true) => write!(f, "standard + diagonal"),
            (true, false) => write!(f, "standard"),
            (false, true) => write!(f, "diagonal"),
            (false, false) => write!(f, "none"),
        }
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of cells along each side of the square grid.
    pub size: u8,
    pub options: DirectionOptions,
    /// Seed for the random source. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    pub const MIN_SIZE: u8 = 2;
    /// The adjacency matrix holds `size⁴` entries, so keep it at 16 MiB or less.
    pub const MAX_SIZE: u8 = 64;

    pub fn new(size: u8, options: DirectionOptions) -> Self {
        Self {
            size,
            options,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn total_nodes(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Consecutive failed samples tolerated before a run is abandoned.
    pub fn max_fail_streak(&self) -> usize {
        self.total_nodes() * 10
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&self.size) {
            return Err(GenerationError::InvalidSize {
                size: self.size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        if !self.options.enable_standard && !self.options.enable_diagonal {
            return Err(GenerationError::NoDirectionsEnabled);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(4, DirectionOptions::default())
    }
}

/// Progress report sent to an observer while a maze is generated.
///
/// Room snapshots are full [`RoomMap`] copies and carry the grid size with
/// them. Senders should be bounded so a slow observer holds the generator back
/// instead of letting snapshots pile up.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationEvent {
    /// Initial room labels.
    Started { rooms: RoomMap },
    /// A connection was committed.
    Pass {
        pass: usize,
        cell: Coord,
        available: Vec<Direction>,
        selected: Direction,
        /// Every cell touched by the commit, starting with `cell`.
        nodes: Vec<Coord>,
        /// Room labels after the merge.
        rooms: RoomMap,
        rooms_left: usize,
    },
    Finished {
        total_passes: usize,
        total_failed_passes: usize,
    },
    Aborted {
        total_passes: usize,
        total_failed_passes: usize,
        fail_streak: usize,
    },
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub graph: AdjacencyGraph,
    /// Every loop iteration, including failed samples.
    pub total_passes: usize,
    /// Iterations that found no legal direction.
    pub total_failed_passes: usize,
    pub degrees: DegreeHistogram,
    pub size: u8,
    pub total_nodes: usize,
}

impl GenerationResult {
    /// Undirected edges as `(a, b)` with `a < b`, ascending.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        (0..self.total_nodes)
            .flat_map(|a| {
                self.graph
                    .neighbors(a)
                    .filter(move |&b| b > a)
                    .map(move |b| (a, b))
            })
            .collect()
    }

    /// Nodes directly connected to `node`, ascending.
    pub fn adjacency_list(&self, node: usize) -> Vec<usize> {
        self.graph.neighbors(node).collect()
    }
}

/// Generates a maze with a random source seeded from `config.seed`.
pub fn generate(
    config: GenerationConfig,
    events: Option<SyncSender<GenerationEvent>>,
) -> Result<GenerationResult, GenerationError> {
    let mut rng = get_rng(config.seed);
    generate_with_rng(config, &mut rng, events)
}

/// Generates a maze drawing every random choice from `rng`.
/// `config.seed` is ignored.
pub fn generate_with_rng<R: Rng>(
    config: GenerationConfig,
    rng: &mut R,
    events: Option<SyncSender<GenerationEvent>>,
) -> Result<GenerationResult, GenerationError> {
    config.validate()?;
    randomized_kruskal(&config, rng, events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_bad_sizes() {
        for size in [0, 1, GenerationConfig::MAX_SIZE + 1] {
            let config = GenerationConfig::new(size, DirectionOptions::default());
            assert!(matches!(
                generate(config, None),
                Err(GenerationError::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn test_config_rejects_no_directions() {
        let options = DirectionOptions {
            enable_standard: false,
            enable_diagonal: false,
        };
        assert!(matches!(
            generate(GenerationConfig::new(4, options), None),
            Err(GenerationError::NoDirectionsEnabled)
        ));
    }

    #[test]
    fn test_fail_streak_bound() {
        let config = GenerationConfig::new(5, DirectionOptions::default());
        assert_eq!(config.max_fail_streak(), 250);
    }

    #[test]
    fn test_exhausted_run_stops_just_past_the_config_bound() {
        let options = DirectionOptions {
            enable_standard: false,
            enable_diagonal: true,
        };
        // Diagonal commits join three rooms at a time, so 16 cells never reach one room
        let config = GenerationConfig::new(4, options).with_seed(21);
        match generate(config, None) {
            Err(GenerationError::ExhaustedRetries { fail_streak, .. }) => {
                assert_eq!(fail_streak, config.max_fail_streak() + 1);
            }
            other => panic!("expected ExhaustedRetries, got {:?}", other),
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let options = DirectionOptions {
            enable_standard: true,
            enable_diagonal: true,
        };
        let config = GenerationConfig::new(6, options).with_seed(42);
        let first = generate(config, None).unwrap();
        let second = generate(config, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_edges_and_adjacency_lists_agree() {
        let config = GenerationConfig::new(4, DirectionOptions::default()).with_seed(7);
        let result = generate(config, None).unwrap();
        let edges = result.edges();
        assert_eq!(edges.len(), result.total_nodes - 1);
        for (a, b) in edges {
            assert!(a < b);
            assert!(result.adjacency_list(a).contains(&b));
            assert!(result.adjacency_list(b).contains(&a));
        }
    }
}
