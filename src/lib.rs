//! Relativistic single-particle kinematics.
//!
//! This crate models a particle by its rest mass, charge, and scalar
//! momentum magnitude, exposing total energy and beta (v/c) as derived
//! views coupled through E² = m² + p² and β = p/E. Momentum is the only
//! stored kinematic state; writing energy or beta translates the value
//! into an equivalent momentum before storing it, so the three accessors
//! can never drift apart.
//!
//! Invalid setter inputs are reported through [`log::warn!`] and either
//! clamped (negative momentum becomes 0) or rejected without mutation
//! (sub-mass energy, out-of-range beta). The `try_*` setter variants
//! return a typed [`KinematicsError`] instead for callers that want
//! strict handling.

pub mod constants;
pub mod core;
pub mod error;

pub use core::particle::Particle;
pub use core::species::Species;
pub use error::{KinematicsError, Result};
