use crate::pushers::{BorisPusher, HigueraCaryPusher, MomentumPusher, Pusher, VayPusher};
use crate::species::Species;
use crate::{Float, PRTL_CHUNK_SIZE};
use itertools::izip;
use rand::prelude::*;
use rand_distr::Standard;
use rand_distr::StandardNormal;
use rayon::prelude::*;

pub struct Prtls {
    pub px: Vec<Float>,
    pub py: Vec<Float>,
    pub pz: Vec<Float>,
    pub psa: Vec<Float>, // Lorentz Factors
    pub species: Species,
}

pub struct FldSamples {
    // one entry per prtl, already interpolated to its position
    pub e_x: Vec<Float>,
    pub e_y: Vec<Float>,
    pub e_z: Vec<Float>,
    pub b_x: Vec<Float>,
    pub b_y: Vec<Float>,
    pub b_z: Vec<Float>,
}

impl FldSamples {
    pub fn uniform(prtl_num: usize, e: [Float; 3], b: [Float; 3]) -> FldSamples {
        FldSamples {
            e_x: vec![e[0]; prtl_num],
            e_y: vec![e[1]; prtl_num],
            e_z: vec![e[2]; prtl_num],
            b_x: vec![b[0]; prtl_num],
            b_y: vec![b[1]; prtl_num],
            b_z: vec![b[2]; prtl_num],
        }
    }

    pub fn len(&self) -> usize {
        self.e_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.e_x.is_empty()
    }
}

impl Prtls {
    // all prtls start at rest
    pub fn new(species: Species, prtl_num: usize) -> Prtls {
        Prtls {
            px: vec![0.0; prtl_num],
            py: vec![0.0; prtl_num],
            pz: vec![0.0; prtl_num],
            psa: vec![1.0; prtl_num],
            species,
        }
    }

    pub fn len(&self) -> usize {
        self.px.len()
    }

    pub fn is_empty(&self) -> bool {
        self.px.is_empty()
    }

    pub fn initialize_velocities<R: Rng>(&mut self, vth: Float, gamma_inj: Float, rng: &mut R) {
        let beta_inj = Float::sqrt(1. - gamma_inj.powi(-2));
        for (px, py, pz, psa) in izip!(&mut self.px, &mut self.py, &mut self.pz, &mut self.psa) {
            *px = rng.sample(StandardNormal);
            *px *= vth;
            *py = rng.sample(StandardNormal);
            *py *= vth;
            *pz = rng.sample(StandardNormal);
            *pz *= vth;
            *psa = (1.0 + *px * *px + *py * *py + *pz * *pz).sqrt();

            // Flip the px according to zenitani 2015
            let mut ux = *px;
            let rand: Float = rng.sample(Standard);
            if -beta_inj * ux > rand * *psa {
                ux *= -1.
            }
            *px = gamma_inj * (ux + beta_inj * *psa);
            *psa = (1.0 + *px * *px + *py * *py + *pz * *pz).sqrt();
        }
    }

    pub fn push(&mut self, pusher: Pusher, flds: &FldSamples, dt: Float) {
        // pick the kernel once, outside the prtl loop
        match pusher {
            Pusher::Boris => self.push_with(BorisPusher, flds, dt),
            Pusher::Vay => self.push_with(VayPusher, flds, dt),
            Pusher::Higuera => self.push_with(HigueraCaryPusher, flds, dt),
        }
    }

    pub fn push_with<P: MomentumPusher>(&mut self, pusher: P, flds: &FldSamples, dt: Float) {
        if !cfg!(feature = "unchecked") {
            assert_eq!(self.px.len(), self.py.len());
            assert_eq!(self.px.len(), self.pz.len());
            assert_eq!(self.px.len(), self.psa.len());
            for fld in &[
                &flds.e_x, &flds.e_y, &flds.e_z, &flds.b_x, &flds.b_y, &flds.b_z,
            ] {
                assert_eq!(self.px.len(), fld.len());
            }
        }
        let qdt_over_2m = self.species.qdt_over_2m(dt);
        (
            &mut self.px,
            &mut self.py,
            &mut self.pz,
            &mut self.psa,
            &flds.e_x,
            &flds.e_y,
            &flds.e_z,
            &flds.b_x,
            &flds.b_y,
            &flds.b_z,
        )
            .into_par_iter()
            .with_min_len(PRTL_CHUNK_SIZE)
            .for_each(|(px, py, pz, psa, ext, eyt, ezt, bxt, byt, bzt)| {
                pusher.push(
                    px,
                    py,
                    pz,
                    psa,
                    *ext,
                    *eyt,
                    *ezt,
                    *bxt,
                    *byt,
                    *bzt,
                    qdt_over_2m,
                    dt,
                )
            });
    }

    // max over finite prtls of |psa^2 - 1 - p^2| / psa^2
    pub fn gamma_residual(&self) -> Float {
        izip!(&self.px, &self.py, &self.pz, &self.psa)
            .map(|(px, py, pz, psa)| {
                let g2 = psa * psa;
                ((g2 - 1.0 - (px * px + py * py + pz * pz)) / g2).abs()
            })
            .filter(|r| r.is_finite())
            .fold(0.0, Float::max)
    }

    pub fn mean_gamma(&self) -> Float {
        self.psa.iter().sum::<Float>() / self.psa.len() as Float
    }

    pub fn kinetic_energy(&self) -> Float {
        self.psa.iter().map(|psa| psa - 1.0).sum::<Float>() * self.species.mass
    }

    pub fn non_finite(&self) -> usize {
        izip!(&self.px, &self.py, &self.pz, &self.psa)
            .filter(|(px, py, pz, psa)| {
                !(px.is_finite() && py.is_finite() && pz.is_finite() && psa.is_finite())
            })
            .count()
    }
}
