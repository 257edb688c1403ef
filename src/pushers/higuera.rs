use super::{four, two, MomentumPusher};
use num_traits::Float;

/// Higuera & Cary (2017) pusher.
///
/// Same kick-rotate-kick split as Boris, but the rotation uses a Lorentz
/// factor solved algebraically from the half-kicked momentum, so it stays
/// accurate when `|qdt_over_2m * B|` is large. This is the default pusher.
#[derive(Debug, Clone, Copy, Default)]
pub struct HigueraCaryPusher;

impl MomentumPusher for HigueraCaryPusher {
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
        let half = F::one() / two::<F>();

        let pm1 = *p1 + e1 * qdt_over_2m;
        let pm2 = *p2 + e2 * qdt_over_2m;
        let pm3 = *p3 + e3 * qdt_over_2m;
        let gm2 = F::one() + pm1 * pm1 + pm2 * pm2 + pm3 * pm3;
        let b_dot_p = (b1 * pm1 + b2 * pm2 + b3 * pm3) * qdt_over_2m;
        let b_sqr = (b1 * b1 + b2 * b2 + b3 * b3) * qdt_over_2m * qdt_over_2m;

        let gm2_minus_b = gm2 - b_sqr;
        let gamma_new = (half
            * (gm2_minus_b
                + (gm2_minus_b * gm2_minus_b + four::<F>() * (b_sqr + b_dot_p * b_dot_p)).sqrt()))
        .sqrt();

        let t_sqr = b_sqr / (gamma_new * gamma_new);
        let coef = qdt_over_2m / gamma_new;
        let pt1 = (pm2 * b3 - pm3 * b2) * coef + pm1;
        let pt2 = (pm3 * b1 - pm1 * b3) * coef + pm2;
        let pt3 = (pm1 * b2 - pm2 * b1) * coef + pm3;

        let rot = two::<F>() / (F::one() + t_sqr) * coef;
        *p1 = pm1 + e1 * qdt_over_2m + (pt2 * b3 - pt3 * b2) * rot;
        *p2 = pm2 + e2 * qdt_over_2m + (pt3 * b1 - pt1 * b3) * rot;
        *p3 = pm3 + e3 * qdt_over_2m + (pt1 * b2 - pt2 * b1) * rot;
        *gamma = (F::one() + *p1 * *p1 + *p2 * *p2 + *p3 * *p3).sqrt();
    }
}
