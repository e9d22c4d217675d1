//! Physical constants for the built-in particle species.
//!
//! Masses are rest masses in MeV/c²; charges are in units of the
//! elementary charge.

/// Proton rest mass, MeV/c^2
pub const PROTON_MASS: f64 = 938.272;
/// Proton charge, units of elementary charge
pub const PROTON_CHARGE: f64 = 1.0;

/// Alpha nucleus rest mass, MeV/c^2
pub const ALPHA_MASS: f64 = 3727.3;
/// Alpha nucleus charge, units of elementary charge
pub const ALPHA_CHARGE: f64 = 2.0;

/// Electron rest mass, MeV/c^2
pub const ELECTRON_MASS: f64 = 0.511;
/// Electron charge, units of elementary charge
pub const ELECTRON_CHARGE: f64 = -1.0;

/// Muon rest mass, MeV/c^2
pub const MUON_MASS: f64 = 105.658;
/// Muon charge, units of elementary charge
pub const MUON_CHARGE: f64 = -1.0;
