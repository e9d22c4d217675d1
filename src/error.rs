//! Error types for strict kinematic setters.
//!
//! The lenient setters on [`Particle`](crate::Particle) warn and continue;
//! the `try_*` variants surface the same conditions as a typed
//! [`KinematicsError`] instead.

use std::fmt;

/// An invalid kinematic assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// Momentum magnitude cannot be negative.
    NegativeMomentum(f64),
    /// Total energy cannot be below the rest mass.
    EnergyBelowMass { energy: f64, mass: f64 },
    /// Beta must lie in the physical region [0, 1].
    BetaOutOfRange(f64),
    /// Rest mass must be strictly positive.
    NonPositiveMass(f64),
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMomentum(p) => {
                write!(f, "cannot set momentum to a negative value ({p})")
            }
            Self::EnergyBelowMass { energy, mass } => {
                write!(
                    f,
                    "cannot set energy {energy} MeV below the rest mass {mass} MeV/c^2"
                )
            }
            Self::BetaOutOfRange(beta) => {
                write!(f, "cannot set beta into unphysical region ({beta})")
            }
            Self::NonPositiveMass(mass) => {
                write!(f, "particle mass must be strictly positive ({mass})")
            }
        }
    }
}

impl std::error::Error for KinematicsError {}

/// Convenient Result type alias for kinematic operations.
pub type Result<T> = std::result::Result<T, KinematicsError>;
