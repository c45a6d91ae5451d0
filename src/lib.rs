pub mod app;
pub mod error;
pub mod generators;
pub mod maze;

pub use error::GenerationError;
pub use generators::{
    DirectionOptions, GenerationConfig, GenerationEvent, GenerationResult, generate,
    generate_with_rng,
};
