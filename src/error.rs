use thiserror::Error;

use crate::maze::graph::AdjacencyGraph;

/// Ways a generation run can fail. All of them are fatal for the run.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("maze size {size} is out of range, expected {min}..={max}")]
    InvalidSize { size: u8, min: u8, max: u8 },

    #[error("both standard and diagonal directions are disabled")]
    NoDirectionsEnabled,

    #[error(
        "no legal direction found in {fail_streak} consecutive samples after {total_passes} passes, \
         {rooms_left} rooms could not be combined"
    )]
    ExhaustedRetries {
        fail_streak: usize,
        total_passes: usize,
        rooms_left: usize,
        /// Connections made before giving up.
        partial: Box<AdjacencyGraph>,
    },

    #[error("node {node} has degree {degree}, expected 1..=4")]
    BadDegree { node: usize, degree: usize },
}
