//! Registry of built-in particle species.
//!
//! A species is a fixed (mass, charge, name) triple; constructing a
//! particle from one goes through the same [`Particle`] contract as a
//! hand-built particle, with no behavior of its own.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALPHA_CHARGE, ALPHA_MASS, ELECTRON_CHARGE, ELECTRON_MASS, MUON_CHARGE, MUON_MASS,
    PROTON_CHARGE, PROTON_MASS,
};
use crate::core::particle::Particle;

/// The particle species with built-in constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Proton,
    Alpha,
    Electron,
    Muon,
}

impl Species {
    /// Rest mass in MeV/c².
    pub fn mass(self) -> f64 {
        match self {
            Species::Proton => PROTON_MASS,
            Species::Alpha => ALPHA_MASS,
            Species::Electron => ELECTRON_MASS,
            Species::Muon => MUON_MASS,
        }
    }

    /// Charge in units of the elementary charge.
    pub fn charge(self) -> f64 {
        match self {
            Species::Proton => PROTON_CHARGE,
            Species::Alpha => ALPHA_CHARGE,
            Species::Electron => ELECTRON_CHARGE,
            Species::Muon => MUON_CHARGE,
        }
    }

    /// Display name used in particle summaries.
    pub fn name(self) -> &'static str {
        match self {
            Species::Proton => "Proton",
            Species::Alpha => "Alpha",
            Species::Electron => "Electron",
            Species::Muon => "Muon",
        }
    }
}

impl Particle {
    /// Creates a particle of the given species, at rest.
    ///
    /// Chain [`with_momentum`] or [`with_beta`] to give it an initial
    /// kinematic state.
    ///
    /// [`with_momentum`]: Particle::with_momentum
    /// [`with_beta`]: Particle::with_beta
    pub fn of(species: Species) -> Self {
        Particle::new(species.mass(), species.charge(), species.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_constants_reach_the_particle() {
        let proton = Particle::of(Species::Proton);
        assert_eq!(proton.mass(), PROTON_MASS);
        assert_eq!(proton.charge(), PROTON_CHARGE);
        assert_eq!(proton.name(), "Proton");
        assert_eq!(proton.momentum(), 0.0);

        let alpha = Particle::of(Species::Alpha);
        assert_eq!(alpha.mass(), ALPHA_MASS);
        assert_eq!(alpha.charge(), ALPHA_CHARGE);
    }

    #[test]
    fn all_species_have_positive_mass() {
        for species in [
            Species::Proton,
            Species::Alpha,
            Species::Electron,
            Species::Muon,
        ] {
            assert!(species.mass() > 0.0, "{} mass", species.name());
        }
    }
}
