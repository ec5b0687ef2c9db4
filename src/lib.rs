#![cfg_attr(not(any(test, feature = "std")), no_std)]
#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

mod utils;
mod random;
pub use crate::random::{norminv, Exponential, Normal, PRng};
mod physics;
pub use crate::physics::{Attenuation, Calibration, ANNIHILATION_ENERGY, CENTIMETER, ELECTRON_MASS, PAIR_THRESHOLD};
mod compton;
pub use crate::compton::{scattered_energy, KleinNishina};
mod photon;
pub use crate::photon::{Direction, Photon};
mod simulator;
pub use crate::simulator::{EventTally, Interaction, Simulator, SlabSpecification, SpecificationError};
