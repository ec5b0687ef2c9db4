use crate::compton::KleinNishina;
use crate::photon::{Direction, Photon};
use crate::physics::{Calibration, ANNIHILATION_ENERGY, CENTIMETER, ELECTRON_MASS, PAIR_THRESHOLD};
use crate::random::{Exponential, Normal, PRng};
use rand::prelude::{Distribution, Rng};
use rand::SeedableRng;

#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub enum SpecificationError {
    #[display(fmt = "initial energy must be positive and finite, got {}", _0)]
    InitialEnergy(f64),
    #[display(fmt = "slab thickness must be positive and finite, got {}", _0)]
    Thickness(f64),
    #[display(fmt = "calibration constant `{}` is out of range, got {}", _0, _1)]
    Calibration(&'static str, f64),
}

#[cfg(feature = "std")]
impl std::error::Error for SpecificationError {}

/// Photon source energy and slab thickness, the slab spans `[0, z_max]`.
#[derive(Debug, Copy, Clone, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "(E0 = {}, z_max = {})", initial_energy, z_max)]
pub struct SlabSpecification {
    pub initial_energy: f64,
    pub z_max:          f64,
    #[serde(default)]
    pub calibration:    Calibration,
}

impl Default for SlabSpecification {
    fn default() -> Self { Self::new(8.0 * ELECTRON_MASS, 3.0 * CENTIMETER) }
}

impl SlabSpecification {
    pub fn new(initial_energy: f64, z_max: f64) -> Self {
        Self {
            initial_energy,
            z_max,
            calibration: Calibration::default(),
        }
    }

    pub fn validate(&self) -> Result<(), SpecificationError> {
        if !(self.initial_energy.is_finite() && self.initial_energy > 0.0) {
            return Err(SpecificationError::InitialEnergy(self.initial_energy));
        }
        if !(self.z_max.is_finite() && self.z_max > 0.0) {
            return Err(SpecificationError::Thickness(self.z_max));
        }
        let c = &self.calibration;
        for &(name, value) in &[
            ("photo_effect", c.photo_effect),
            ("compton", c.compton),
            ("pair_production", c.pair_production),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SpecificationError::Calibration(name, value));
            }
        }
        if !(c.resolution.is_finite() && c.resolution >= 0.0) {
            return Err(SpecificationError::Calibration("resolution", c.resolution));
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Interaction {
    PhotoEffect,
    Compton,
    PairProduction,
}

/// Bookkeeping for a single event.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EventTally {
    pub photo_effect:    u32,
    pub compton:         u32,
    pub pair_production: u32,
    pub escaped:         u32,
    /// Deepest generation of secondary photons traced, the primary is 0.
    pub max_generation:  u32,
}

impl EventTally {
    pub fn interactions(&self) -> u32 { self.photo_effect + self.compton + self.pair_production }

    fn record(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::PhotoEffect => self.photo_effect += 1,
            Interaction::Compton => self.compton += 1,
            Interaction::PairProduction => self.pair_production += 1,
        }
    }
}

/// Picks the process whose sampled depth comes first.
///
/// Pair production is checked before the other two and only counts above
/// threshold; between photo effect and Compton scattering ties go to the
/// photo effect.
fn competing_interaction(photo_effect: f64, compton: f64, pair_production: f64, energy: f64) -> (Interaction, f64) {
    if pair_production < photo_effect && pair_production < compton && energy >= PAIR_THRESHOLD {
        (Interaction::PairProduction, pair_production)
    } else if photo_effect <= compton {
        (Interaction::PhotoEffect, photo_effect)
    } else {
        (Interaction::Compton, compton)
    }
}

/// Single photon gamma spectroscopy with a slab detector.
///
/// The simulator owns its generator. Repeated calls to [`Simulator::run`]
/// continue the same random stream, use [`Simulator::reseed`] or separate
/// instances for independent trials.
#[derive(Debug, Clone)]
pub struct Simulator<R = PRng> {
    spec: SlabSpecification,
    rng:  R,
}

impl<R: Rng + SeedableRng> Simulator<R> {
    pub fn seeded(spec: SlabSpecification, seed: u64) -> Result<Self, SpecificationError> {
        Self::new(spec, R::seed_from_u64(seed))
    }

    pub fn reseed(&mut self, seed: u64) { self.rng = R::seed_from_u64(seed); }
}

impl<R: Rng> Simulator<R> {
    pub fn new(spec: SlabSpecification, rng: R) -> Result<Self, SpecificationError> {
        spec.validate()?;
        Ok(Self { spec, rng })
    }

    pub fn rng_mut(&mut self) -> &mut R { &mut self.rng }

    /// Energy seen by the photomultiplier for one primary photon.
    ///
    /// The result is Gaussian smeared and can be negative.
    pub fn run(&mut self) -> f64 { self.run_tallied(&mut EventTally::default()) }

    pub fn run_tallied(&mut self, tally: &mut EventTally) -> f64 {
        let primary = Photon::new(self.spec.initial_energy, 0.0, Direction::Forward);
        let deposited = self.trace_photon(primary, 0, tally);
        let std_dev = self.spec.calibration.resolution(deposited);
        let observed = Normal::new(deposited, std_dev).sample(&mut self.rng);
        debug!(
            "event deposited {} observed {} after {} interactions",
            deposited,
            observed,
            tally.interactions()
        );
        observed
    }

    /// Follows `photon` and all of its secondaries until they are absorbed or
    /// leave the slab, returning the energy deposited without smearing.
    pub fn trace(&mut self, photon: Photon, tally: &mut EventTally) -> f64 { self.trace_photon(photon, 0, tally) }

    fn in_detector(&self, photon: &Photon) -> bool { photon.position >= 0.0 && photon.position <= self.spec.z_max }

    /// Samples one depth per process, in the order photo effect, Compton, pair
    /// production, and returns the process that comes first.
    fn sample_interaction(&mut self, energy: f64) -> (Interaction, f64) {
        let mu = self.spec.calibration.attenuation(energy);
        let z_photo: f64 = Exponential::new(mu.photo_effect).sample(&mut self.rng);
        let z_compton: f64 = Exponential::new(mu.compton).sample(&mut self.rng);
        let z_pair: f64 = Exponential::new(mu.pair_production).sample(&mut self.rng);
        competing_interaction(z_photo, z_compton, z_pair, energy)
    }

    fn trace_photon(&mut self, mut photon: Photon, generation: u32, tally: &mut EventTally) -> f64 {
        tally.max_generation = tally.max_generation.max(generation);
        let mut deposited = 0.0;
        while photon.alive {
            let (interaction, dz) = self.sample_interaction(photon.energy);

            photon.advance(dz);
            if !self.in_detector(&photon) {
                trace!("{} escaped before {}", photon, interaction);
                photon.alive = false;
                tally.escaped += 1;
                continue;
            }

            tally.record(interaction);
            let de = match interaction {
                Interaction::PhotoEffect => self.interact_photo_effect(&mut photon),
                Interaction::Compton => self.interact_compton(&mut photon),
                Interaction::PairProduction => self.interact_pair_production(&mut photon, generation, tally),
            };
            trace!("{} deposited {} by {}", photon, de, interaction);
            deposited += de;
        }
        deposited
    }

    fn interact_photo_effect(&mut self, photon: &mut Photon) -> f64 {
        photon.alive = false;
        photon.energy
    }

    fn interact_compton(&mut self, photon: &mut Photon) -> f64 {
        let scattered = KleinNishina::new(photon.energy).sample(&mut self.rng);
        let de = photon.energy - scattered;
        photon.energy = scattered;
        de
    }

    fn interact_pair_production(&mut self, photon: &mut Photon, generation: u32, tally: &mut EventTally) -> f64 {
        // the pair's kinetic energy stays in the slab, the rest mass leaves as
        // two back to back annihilation photons
        let mut de = photon.energy - PAIR_THRESHOLD;
        for &direction in &[photon.direction(), photon.direction().reversed()] {
            let secondary = Photon::new(ANNIHILATION_ENERGY, photon.position, direction);
            de += self.trace_photon(secondary, generation + 1, tally);
        }
        photon.alive = false;
        de
    }
}
