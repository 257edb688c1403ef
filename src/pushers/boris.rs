use super::{two, MomentumPusher};
use num_traits::Float;

/// The classic Boris scheme: half electric kick, magnetic rotation with the
/// mid-step Lorentz factor, second half electric kick.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorisPusher;

impl MomentumPusher for BorisPusher {
    #[inline(always)]
    fn push<F: Float>(
        self,
        px: &mut F,
        py: &mut F,
        pz: &mut F,
        psa: &mut F,
        ext: F,
        eyt: F,
        ezt: F,
        bxt: F,
        byt: F,
        bzt: F,
        qdt_over_2m: F,
        _dt: F,
    ) {
        let ext = ext * qdt_over_2m;
        let eyt = eyt * qdt_over_2m;
        let ezt = ezt * qdt_over_2m;

        // First half of the electric push
        let ux = *px + ext;
        let uy = *py + eyt;
        let uz = *pz + ezt;
        let gt = qdt_over_2m / (F::one() + ux * ux + uy * uy + uz * uz).sqrt();

        let bxt = bxt * gt;
        let byt = byt * gt;
        let bzt = bzt * gt;

        let boris = two::<F>() / (F::one() + bxt * bxt + byt * byt + bzt * bzt);

        let uxt = ux + uy * bzt - uz * byt;
        let uyt = uy + uz * bxt - ux * bzt;
        let uzt = uz + ux * byt - uy * bxt;

        // Finish the rotation and add the second half of the electric push
        *px = ux + boris * (uyt * bzt - uzt * byt) + ext;
        *py = uy + boris * (uzt * bxt - uxt * bzt) + eyt;
        *pz = uz + boris * (uxt * byt - uyt * bxt) + ezt;

        *psa = (F::one() + *px * *px + *py * *py + *pz * *pz).sqrt();
    }
}
