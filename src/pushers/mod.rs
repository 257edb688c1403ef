use anyhow::{anyhow, Error};
use num_traits::Float;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

mod boris;
mod higuera;
mod vay;

pub use boris::BorisPusher;
pub use higuera::HigueraCaryPusher;
pub use vay::VayPusher;

// Momentum is per unit rest mass with c = 1. gamma must satisfy
// gamma^2 = 1 + p^2 on entry (unchecked) and does again on exit.
// qdt_over_2m = q dt / (2 m); dt is not read by any current scheme.
// Nothing is signalled, bad inputs just propagate NaN.
pub trait MomentumPusher: Copy + Send + Sync {
    #[allow(clippy::too_many_arguments)]
    fn push<F: Float>(
        self,
        p1: &mut F,
        p2: &mut F,
        p3: &mut F,
        gamma: &mut F,
        e1: F,
        e2: F,
        e3: F,
        b1: F,
        b2: F,
        b3: F,
        qdt_over_2m: F,
        dt: F,
    );
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pusher {
    Boris,
    Vay,
    Higuera,
}

impl Pusher {
    pub const ALL: [Pusher; 3] = [Pusher::Boris, Pusher::Vay, Pusher::Higuera];

    pub fn name(self) -> &'static str {
        match self {
            Pusher::Boris => "boris",
            Pusher::Vay => "vay",
            Pusher::Higuera => "higuera",
        }
    }
}

impl Default for Pusher {
    fn default() -> Self {
        Pusher::Higuera
    }
}

impl fmt::Display for Pusher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pusher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pusher::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s.trim().to_lowercase())
            .ok_or_else(|| anyhow!("Unknown pusher '{}', expected boris, vay or higuera", s))
    }
}

// F::from(2.0) would need an unwrap
#[inline(always)]
pub(crate) fn two<F: Float>() -> F {
    F::one() + F::one()
}

#[inline(always)]
pub(crate) fn four<F: Float>() -> F {
    two::<F>() * two::<F>()
}
