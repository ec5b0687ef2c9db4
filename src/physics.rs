//! Attenuation model of the slab medium.
//!
//! Energies are measured in electron rest energies and lengths in centimeters,
//! so both unit constants are one.
#[allow(unused_imports)]
use crate::utils::Real;

pub const ELECTRON_MASS: f64 = 1.0;
pub const CENTIMETER: f64 = 1.0;

/// Lowest photon energy able to create an electron-positron pair.
pub const PAIR_THRESHOLD: f64 = 2.0 * ELECTRON_MASS;
/// Energy of each photon left behind by positron annihilation.
pub const ANNIHILATION_ENERGY: f64 = ELECTRON_MASS;

// annihilation photons must never pair produce themselves
const _: () = assert!(ANNIHILATION_ENERGY < PAIR_THRESHOLD);

/// Linear attenuation coefficients (per unit length) at a single photon energy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Attenuation {
    pub photo_effect:    f64,
    pub compton:         f64,
    pub pair_production: f64,
}

/// Constants of the detector material and readout.
///
/// `photo_effect`, `compton` and `pair_production` scale the closed-form
/// attenuation laws `k1 / E`, `k2 * E` and `k3 * (E - 2m)`; `resolution` scales
/// the photomultiplier spread `resolution * sqrt(E)`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub photo_effect:    f64,
    pub compton:         f64,
    pub pair_production: f64,
    pub resolution:      f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            photo_effect:    0.1,
            compton:         0.05,
            pair_production: 0.03,
            resolution:      0.1,
        }
    }
}

impl Calibration {
    pub fn attenuation(&self, energy: f64) -> Attenuation {
        let pair_production = if energy >= PAIR_THRESHOLD {
            self.pair_production * (energy - PAIR_THRESHOLD)
        } else {
            0.0
        };
        Attenuation {
            photo_effect: self.photo_effect / energy * ELECTRON_MASS,
            compton: self.compton * energy * ELECTRON_MASS,
            pair_production,
        }
    }

    /// Standard deviation of the photomultiplier response to `deposited`.
    pub fn resolution(&self, deposited: f64) -> f64 { self.resolution * (deposited * ELECTRON_MASS).sqrt() }
}
