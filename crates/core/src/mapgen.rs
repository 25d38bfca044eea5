//! Procedural level generation: the tile scan, depth progression tables, and
//! spawn-point collection.

pub mod progression;

mod generator;

pub use generator::generate_level;
