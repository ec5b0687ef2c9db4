use crate::utils::BoolExt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 { matches!(self, Direction::Forward).if_else(1.0, -1.0) }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A photon moving along the depth axis of the slab.
///
/// The direction is fixed when the photon is created; scattering only changes
/// its energy.
#[derive(Debug, Copy, Clone, PartialEq, Display)]
#[display(fmt = "photon(E = {}, z = {}, {:?})", energy, position, direction)]
pub struct Photon {
    pub alive:    bool,
    direction:    Direction,
    pub energy:   f64,
    pub position: f64,
}

impl Photon {
    pub const fn new(energy: f64, position: f64, direction: Direction) -> Self {
        Self {
            alive: true,
            direction,
            energy,
            position,
        }
    }

    pub fn direction(&self) -> Direction { self.direction }

    /// Moves the photon `dz` along its direction of travel.
    pub fn advance(&mut self, dz: f64) { self.position += dz * self.direction.sign(); }
}
