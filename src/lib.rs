pub mod biome;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heightfield;
pub mod rivers;
pub mod summits;
pub mod vegetation;

pub use biome::Terrain;
pub use config::GenerationParams;
pub use error::GenerationError;
pub use generator::generate_world;
pub use grid::Grid;
pub use heightfield::{HeightField, synthesize};
