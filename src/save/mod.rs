use crate::{prtls::Prtls, Config, Float};
use anyhow::{Context, Result};
use log::debug;

pub(crate) fn save_prtls(prtls: &Prtls, name: &str, outdir: &str, stride: usize) -> Result<()> {
    let u: Vec<Float> = prtls.px.iter().step_by(stride).copied().collect();
    npy::to_file(format!("{}/{}_u.npy", outdir, name), u)
        .context(format!("Could not save {} u data to file", name))?;

    let gam: Vec<Float> = prtls.psa.iter().step_by(stride).copied().collect();
    npy::to_file(format!("{}/{}_gam.npy", outdir, name), gam)
        .context(format!("Error saving {} lorentz factor to file", name))?;

    Ok(())
}

pub(crate) fn save_output(t: u32, cfg: &Config, species: &[(&str, &Prtls)]) -> Result<()> {
    let output_prefix = format!("output/dat_{:05}", t / cfg.output.output_interval);
    std::fs::create_dir_all(&output_prefix).context("Unable to create output directory")?;
    debug!("saving prtls to {}", output_prefix);
    for (name, prtls) in species {
        save_prtls(prtls, name, &output_prefix, cfg.output.stride)?;
    }
    Ok(())
}
