use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, Result};

/// A relativistic point particle described by rest mass, charge, and the
/// magnitude of its momentum.
///
/// Momentum is the only stored kinematic quantity. Total energy and beta
/// are derived on every read via E² = m² + p² and β = p/E, and their
/// setters translate the incoming value into an equivalent momentum, so
/// the three accessors stay consistent by construction.
///
/// Mass must be strictly positive (every physical species is) and is
/// fixed for the lifetime of the particle. Charge and name are
/// informational and take no part in any computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ParticleRepr")]
pub struct Particle {
    mass: f64,
    charge: f64,
    name: String,
    momentum: f64,
}

/// Wire shape of [`Particle`]. Deserialization funnels through the
/// construction and setter rules, so a serialized payload cannot carry
/// state the setters would refuse.
#[derive(Deserialize)]
struct ParticleRepr {
    mass: f64,
    charge: f64,
    name: String,
    #[serde(default)]
    momentum: f64,
}

impl TryFrom<ParticleRepr> for Particle {
    type Error = KinematicsError;

    fn try_from(repr: ParticleRepr) -> Result<Self> {
        // The comparison also rejects NaN.
        if !(repr.mass > 0.0) {
            return Err(KinematicsError::NonPositiveMass(repr.mass));
        }
        let mut particle = Particle::new(repr.mass, repr.charge, repr.name);
        particle.set_momentum(repr.momentum);
        Ok(particle)
    }
}

impl Particle {
    /// Creates a particle at rest.
    ///
    /// `mass` is the rest mass in MeV/c² and must be strictly positive;
    /// `charge` is in units of the elementary charge.
    pub fn new(mass: f64, charge: f64, name: impl Into<String>) -> Self {
        debug_assert!(mass > 0.0, "particle mass must be positive");
        Self {
            mass,
            charge,
            name: name.into(),
            momentum: 0.0,
        }
    }

    /// Applies the momentum-setting rule and returns the particle,
    /// for construction chaining.
    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.set_momentum(momentum);
        self
    }

    /// Applies the beta-setting rule and returns the particle, for
    /// construction chaining. Chained after [`with_momentum`], the beta
    /// value wins, matching the historical initialization order.
    ///
    /// [`with_momentum`]: Particle::with_momentum
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.set_beta(beta);
        self
    }

    /// Rest mass in MeV/c².
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Charge in units of the elementary charge.
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Display name of the particle.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Momentum magnitude in MeV/c.
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Sets the momentum magnitude in MeV/c.
    ///
    /// A negative value is reported through `log::warn!` and clamped to
    /// zero; the stored momentum is never negative.
    pub fn set_momentum(&mut self, momentum: f64) {
        if momentum < 0.0 {
            warn!("Cannot set momentum to a negative value; momentum will be set to 0");
            self.momentum = 0.0;
        } else {
            self.momentum = momentum;
        }
    }

    /// Strict variant of [`set_momentum`]: a negative value returns
    /// [`KinematicsError::NegativeMomentum`] and leaves the particle
    /// untouched instead of clamping.
    ///
    /// [`set_momentum`]: Particle::set_momentum
    pub fn try_set_momentum(&mut self, momentum: f64) -> Result<()> {
        if momentum < 0.0 {
            return Err(KinematicsError::NegativeMomentum(momentum));
        }
        self.momentum = momentum;
        Ok(())
    }

    /// Total relativistic energy in MeV, √(m² + p²).
    ///
    /// Always at least the rest mass.
    pub fn energy(&self) -> f64 {
        (self.mass * self.mass + self.momentum * self.momentum).sqrt()
    }

    /// Sets the total energy in MeV by storing the equivalent momentum
    /// √(E² − m²).
    ///
    /// A value below the rest mass has no momentum solution; it is
    /// reported through `log::warn!` and the state is left unchanged.
    pub fn set_energy(&mut self, energy: f64) {
        if energy < self.mass {
            warn!("Cannot set energy to a value lower than the particle mass");
        } else {
            // E >= m guarantees a non-negative root, no clamp needed.
            self.momentum = (energy * energy - self.mass * self.mass).sqrt();
        }
    }

    /// Strict variant of [`set_energy`]: a sub-mass value returns
    /// [`KinematicsError::EnergyBelowMass`] with no mutation.
    ///
    /// [`set_energy`]: Particle::set_energy
    pub fn try_set_energy(&mut self, energy: f64) -> Result<()> {
        if energy < self.mass {
            return Err(KinematicsError::EnergyBelowMass {
                energy,
                mass: self.mass,
            });
        }
        self.momentum = (energy * energy - self.mass * self.mass).sqrt();
        Ok(())
    }

    /// Velocity as a fraction of the speed of light, β = p/E.
    ///
    /// Recomputed on every call; zero for a particle at rest (the
    /// denominator is then the rest mass, which is positive).
    pub fn beta(&self) -> f64 {
        self.momentum / self.energy()
    }

    /// Sets beta by storing the equivalent momentum β·m/√(1 − β²),
    /// routed through [`set_momentum`].
    ///
    /// Values outside [0, 1] are reported through `log::warn!` and the
    /// state is left unchanged. Exactly 1.0 passes the guard and stores
    /// infinite momentum; this mirrors the historical boundary check
    /// rather than correcting it.
    ///
    /// [`set_momentum`]: Particle::set_momentum
    pub fn set_beta(&mut self, beta: f64) {
        if beta < 0.0 || beta > 1.0 {
            warn!("Cannot set beta into unphysical region");
        } else {
            self.set_momentum(beta * self.mass / (1.0 - beta * beta).sqrt());
        }
    }

    /// Strict variant of [`set_beta`]: out-of-range values return
    /// [`KinematicsError::BetaOutOfRange`] with no mutation. The boundary
    /// is the same as the lenient setter, so 1.0 is still accepted.
    ///
    /// [`set_beta`]: Particle::set_beta
    pub fn try_set_beta(&mut self, beta: f64) -> Result<()> {
        if beta < 0.0 || beta > 1.0 {
            return Err(KinematicsError::BetaOutOfRange(beta));
        }
        self.momentum = beta * self.mass / (1.0 - beta * beta).sqrt();
        Ok(())
    }

    /// Lorentz factor γ = E/m.
    pub fn gamma(&self) -> f64 {
        self.energy() / self.mass
    }

    /// Kinetic energy in MeV, E − m.
    pub fn kinetic_energy(&self) -> f64 {
        self.energy() - self.mass
    }

    /// Human-readable one-line summary of the particle's fixed
    /// properties.
    pub fn info(&self) -> String {
        format!(
            "Particle \"{}\" of mass {:.3} MeV/c^2, charge: {}",
            self.name, self.mass, self.charge
        )
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_satisfies_mass_shell_relation() {
        let particle = Particle::new(938.272, 1.0, "Proton").with_momentum(200.0);
        let e = particle.energy();
        assert!((e * e - (938.272_f64.powi(2) + 200.0_f64.powi(2))).abs() < 1e-6);
    }

    #[test]
    fn negative_momentum_is_clamped_to_zero() {
        let mut particle = Particle::new(105.658, -1.0, "Muon").with_momentum(50.0);
        particle.set_momentum(-5.0);
        assert_eq!(particle.momentum(), 0.0);
    }

    #[test]
    fn sub_mass_energy_leaves_momentum_unchanged() {
        let mut particle = Particle::new(938.272, 1.0, "Proton").with_momentum(200.0);
        particle.set_energy(100.0);
        assert_eq!(particle.momentum(), 200.0);
    }

    #[test]
    fn out_of_range_beta_leaves_momentum_unchanged() {
        let mut particle = Particle::new(938.272, 1.0, "Proton").with_momentum(200.0);
        particle.set_beta(-0.1);
        assert_eq!(particle.momentum(), 200.0);
        particle.set_beta(1.5);
        assert_eq!(particle.momentum(), 200.0);
    }

    #[test]
    fn beta_at_rest_is_zero() {
        let particle = Particle::new(0.511, -1.0, "Electron");
        assert_eq!(particle.beta(), 0.0);
    }

    #[test]
    fn beta_of_exactly_one_stores_infinite_momentum() {
        let mut particle = Particle::new(938.272, 1.0, "Proton");
        particle.set_beta(1.0);
        assert!(particle.momentum().is_infinite());
    }

    #[test]
    fn strict_setters_report_errors_without_mutation() {
        let mut particle = Particle::new(938.272, 1.0, "Proton").with_momentum(200.0);
        assert!(matches!(
            particle.try_set_momentum(-1.0),
            Err(KinematicsError::NegativeMomentum(_))
        ));
        assert!(matches!(
            particle.try_set_energy(10.0),
            Err(KinematicsError::EnergyBelowMass { .. })
        ));
        assert!(matches!(
            particle.try_set_beta(1.5),
            Err(KinematicsError::BetaOutOfRange(_))
        ));
        assert_eq!(particle.momentum(), 200.0);
    }

    #[test]
    fn info_formats_mass_to_three_decimals() {
        let particle = Particle::new(938.272, 1.0, "Proton");
        assert_eq!(
            particle.info(),
            "Particle \"Proton\" of mass 938.272 MeV/c^2, charge: 1"
        );
    }
}
