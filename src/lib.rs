use rand::prelude::*;
use serde::Deserialize;
use std::fs;

use anyhow::{Context, Result};
use log::{debug, info, warn};

pub mod prtls;
pub mod pushers;
mod save;
pub mod species;

pub use prtls::{FldSamples, Prtls};
pub use pushers::{BorisPusher, HigueraCaryPusher, MomentumPusher, Pusher, VayPusher};
pub use species::Species;

// We use a type alias for f64/Float to easily support
// double and single precision.
#[cfg(feature = "dprec")]
pub type Float = f64;

#[cfg(not(feature = "dprec"))]
pub type Float = f32;

// Minimum number of particles a rayon task pushes.
pub const PRTL_CHUNK_SIZE: usize = 1024;

#[derive(Deserialize)]
pub struct Config {
    pub params: Params,
    pub fields: Fields,
    pub setup: Setup,
    pub output: Output,
}

#[derive(Deserialize)]
pub struct Setup {
    pub t_final: u32,
    #[serde(default)]
    pub pusher: Pusher,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Deserialize)]
pub struct Output {
    pub write_output: bool,
    pub output_interval: u32,
    pub stride: usize,
}

#[derive(Deserialize)]
pub struct Params {
    pub dt: Float,
    pub prtl_num: usize, // per species
    pub q_e: Float,
    pub ion_mass: Float,
    pub vth: Float,
    pub gamma_inj: Float, // Speed of upstream flow
}

/// Uniform field every particle sees.
#[derive(Deserialize)]
pub struct Fields {
    pub e: [Float; 3],
    pub b: [Float; 3],
}

impl Config {
    pub fn new() -> Result<Config> {
        Config::from_file("config.toml")
    }

    pub fn from_file(path: &str) -> Result<Config> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("Could not open the {} file", path))?;
        Config::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Config> {
        let cfg: Config = toml::from_str(contents).with_context(|| "Could not parse Config file")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.params.dt > 0.0) {
            return Err(anyhow::Error::msg("dt must be positive"));
        }
        if self.params.prtl_num == 0 {
            return Err(anyhow::Error::msg("prtl_num must be at least 1"));
        }
        if !(self.params.q_e > 0.0) || !(self.params.ion_mass > 0.0) {
            return Err(anyhow::Error::msg("q_e and ion_mass must be positive"));
        }
        if !(self.params.gamma_inj >= 1.0) {
            return Err(anyhow::Error::msg("gamma_inj must be at least 1"));
        }
        if self.output.output_interval == 0 {
            return Err(anyhow::Error::msg("output_interval must be at least 1"));
        }
        if self.output.stride == 0 {
            return Err(anyhow::Error::msg("stride must be at least 1"));
        }
        Ok(())
    }
}

fn log_diagnostics(t: u32, name: &str, prtls: &Prtls, energy0: Float) {
    let energy = prtls.kinetic_energy();
    let drift = if energy0 > 0.0 {
        (energy - energy0) / energy0
    } else {
        energy - energy0
    };
    info!(
        "t = {:>6} {:>4}: <gamma> = {:.6}, energy drift = {:.3e}, gamma residual = {:.3e}",
        t,
        name,
        prtls.mean_gamma(),
        drift,
        prtls.gamma_residual(),
    );
    let bad = prtls.non_finite();
    if bad > 0 {
        warn!("t = {}: {} {} prtls have non-finite momenta", t, bad, name);
    }
}

/// Pushes an electron and an ion population through the configured uniform
/// field and reports how well energy and `gamma^2 = 1 + p^2` hold up.
pub fn run(cfg: Config) -> Result<Vec<Prtls>> {
    cfg.validate()?;
    let params = &cfg.params;
    let pusher = cfg.setup.pusher;
    info!("using the {} pusher", pusher);

    let mut rng = StdRng::seed_from_u64(cfg.setup.seed);
    debug!("initializing prtls");
    let mut lecs = Prtls::new(Species::electron(params.q_e), params.prtl_num);
    lecs.initialize_velocities(params.vth, params.gamma_inj, &mut rng);
    let mut ions = Prtls::new(Species::ion(params.q_e, params.ion_mass), params.prtl_num);
    ions.initialize_velocities(params.vth, params.gamma_inj, &mut rng);

    let flds = FldSamples::uniform(params.prtl_num, cfg.fields.e, cfg.fields.b);
    let energy0 = [lecs.kinetic_energy(), ions.kinetic_energy()];

    for t in 0..=cfg.setup.t_final {
        if t > 0 {
            lecs.push(pusher, &flds, params.dt);
            ions.push(pusher, &flds, params.dt);
        }
        if t % cfg.output.output_interval == 0 {
            log_diagnostics(t, "lecs", &lecs, energy0[0]);
            log_diagnostics(t, "ions", &ions, energy0[1]);
            if cfg.output.write_output {
                save::save_output(t, &cfg, &[("lecs", &lecs), ("ions", &ions)])?;
            }
        }
    }

    Ok(vec![lecs, ions])
}
