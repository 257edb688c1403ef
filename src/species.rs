use crate::Float;

/// Charge and mass of one particle species, in units of the elementary
/// charge `q_e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    pub charge: Float,
    pub mass: Float,
}

impl Species {
    pub fn new(charge: Float, mass: Float) -> Species {
        Species { charge, mass }
    }

    pub fn electron(q_e: Float) -> Species {
        Species::new(-q_e, q_e)
    }

    pub fn positron(q_e: Float) -> Species {
        Species::new(q_e, q_e)
    }

    pub fn ion(q_e: Float, ion_mass: Float) -> Species {
        Species::new(q_e, q_e * ion_mass)
    }

    pub fn q_over_m(&self) -> Float {
        self.charge / self.mass
    }

    /// The coupling coefficient handed to the pushers, `q dt / (2 m)`.
    pub fn qdt_over_2m(&self, dt: Float) -> Float {
        self.q_over_m() * 0.5 * dt
    }
}
