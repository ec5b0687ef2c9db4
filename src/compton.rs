use crate::physics::ELECTRON_MASS;
use rand::prelude::{Distribution, Rng};

/// Energy of a photon of energy `energy` after Compton scattering through an
/// angle with cosine `cos_theta`.
pub fn scattered_energy(energy: f64, cos_theta: f64) -> f64 {
    let alpha = energy / ELECTRON_MASS;
    energy / (1.0 + alpha * (1.0 - cos_theta))
}

/// Klein-Nishina distribution of the scattered photon energy.
///
/// Sampled with Kahn's rejection method on the ratio `eta = E / E'`, which
/// lies in `[1, 1 + 2 * alpha]` with `alpha = E / m_e`. The scattered energy is
/// therefore never larger than the incident one and never below the
/// backscatter edge `E / (1 + 2 * alpha)`.
///
/// Source:
/// H. Kahn, Applications of Monte Carlo, AECU-3259 (1954)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KleinNishina {
    pub energy: f64,
}

impl KleinNishina {
    pub const fn new(energy: f64) -> Self { Self { energy } }

    fn alpha(&self) -> f64 { self.energy / ELECTRON_MASS }
}

impl Distribution<f64> for KleinNishina {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let alpha = self.alpha();
        let beta = 1.0 + 2.0 * alpha;
        let branch = beta / (9.0 + 2.0 * alpha);
        let eta = loop {
            let r1: f64 = rng.gen();
            let r2: f64 = rng.gen();
            let r3: f64 = rng.gen();
            if r1 <= branch {
                let eta = 1.0 + 2.0 * alpha * r2;
                if r3 <= 4.0 * (1.0 / eta - 1.0 / (eta * eta)) {
                    break eta;
                }
            } else {
                let eta = beta / (1.0 + 2.0 * alpha * r2);
                let cos_theta = 1.0 - (eta - 1.0) / alpha;
                if r3 <= 0.5 * (cos_theta * cos_theta + 1.0 / eta) {
                    break eta;
                }
            }
        };
        self.energy / eta
    }
}
