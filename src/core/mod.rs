//! Core types describing particles and their kinematic state.

pub mod particle;
pub mod species;

pub use particle::Particle;
pub use species::Species;
