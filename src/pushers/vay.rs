use super::{four, two, MomentumPusher};
use num_traits::Float;

/// Vay (2008) pusher. The rotation is written in terms of the final Lorentz
/// factor, which is found from a closed form quadratic instead of a fixed
/// point iteration. A particle drifting at exactly E x B / B^2 feels no
/// force under this scheme, which Boris does not reproduce.
#[derive(Debug, Clone, Copy, Default)]
pub struct VayPusher;

impl MomentumPusher for VayPusher {
    #[inline(always)]
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
        _dt: F,
    ) {
        let e1 = e1 * qdt_over_2m;
        let e2 = e2 * qdt_over_2m;
        let e3 = e3 * qdt_over_2m;
        let b1 = b1 * qdt_over_2m;
        let b2 = b2 * qdt_over_2m;
        let b3 = b3 * qdt_over_2m;

        // uses the incoming gamma
        let up1 = *p1 + two::<F>() * e1 + (*p2 * b3 - *p3 * b2) / *gamma;
        let up2 = *p2 + two::<F>() * e2 + (*p3 * b1 - *p1 * b3) / *gamma;
        let up3 = *p3 + two::<F>() * e3 + (*p1 * b2 - *p2 * b1) / *gamma;

        let tt = b1 * b1 + b2 * b2 + b3 * b3;
        let ut = up1 * b1 + up2 * b2 + up3 * b3;

        let sigma = F::one() + up1 * up1 + up2 * up2 + up3 * up3 - tt;
        // positive root only
        let inv_gamma2 =
            two::<F>() / (sigma + (sigma * sigma + four::<F>() * (tt + ut * ut)).sqrt());
        let s = F::one() / (F::one() + inv_gamma2 * tt);
        *gamma = F::one() / inv_gamma2.sqrt();

        *p1 = (up1 + b1 * ut * inv_gamma2 + (up2 * b3 - up3 * b2) / *gamma) * s;
        *p2 = (up2 + b2 * ut * inv_gamma2 + (up3 * b1 - up1 * b3) / *gamma) * s;
        *p3 = (up3 + b3 * ut * inv_gamma2 + (up1 * b2 - up2 * b1) / *gamma) * s;
    }
}
