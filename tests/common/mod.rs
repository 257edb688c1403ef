#![allow(dead_code)]
use num_traits::Float;
use pusher_rs::{Config, MomentumPusher};
use rand::prelude::*;

/// One particle state: (p1, p2, p3, gamma).
pub type State<F> = [F; 4];

pub fn at_rest<F: Float>() -> State<F> {
    [F::zero(), F::zero(), F::zero(), F::one()]
}

pub fn with_momentum<F: Float>(p1: F, p2: F, p3: F) -> State<F> {
    [p1, p2, p3, (F::one() + p1 * p1 + p2 * p2 + p3 * p3).sqrt()]
}

pub fn step<P: MomentumPusher, F: Float>(
    pusher: P,
    state: State<F>,
    e: [F; 3],
    b: [F; 3],
    qdt_over_2m: F,
) -> State<F> {
    let [mut p1, mut p2, mut p3, mut gamma] = state;
    pusher.push(
        &mut p1,
        &mut p2,
        &mut p3,
        &mut gamma,
        e[0],
        e[1],
        e[2],
        b[0],
        b[1],
        b[2],
        qdt_over_2m,
        qdt_over_2m + qdt_over_2m,
    );
    [p1, p2, p3, gamma]
}

pub fn norm<F: Float>(s: &State<F>) -> F {
    (s[0] * s[0] + s[1] * s[1] + s[2] * s[2]).sqrt()
}

/// Relative violation of gamma^2 = 1 + p^2.
pub fn gamma_residual<F: Float>(s: &State<F>) -> F {
    let g2 = s[3] * s[3];
    ((g2 - F::one() - norm(s) * norm(s)) / g2).abs()
}

/// Random momentum in [-pmax, pmax)^3 with a consistent gamma, plus random
/// E and B in [-1, 1)^3.
pub fn random_sample(rng: &mut StdRng, pmax: f64) -> (State<f64>, [f64; 3], [f64; 3]) {
    let mut v = || rng.gen_range(-1.0..1.0);
    let p = with_momentum(pmax * v(), pmax * v(), pmax * v());
    let e = [v(), v(), v()];
    let b = [v(), v(), v()];
    (p, e, b)
}

pub fn to_f32(s: [f64; 4]) -> [f32; 4] {
    [s[0] as f32, s[1] as f32, s[2] as f32, s[3] as f32]
}

pub fn vec_f32(v: [f64; 3]) -> [f32; 3] {
    [v[0] as f32, v[1] as f32, v[2] as f32]
}

pub fn setup_config(pusher: &str) -> Config {
    // A small run that finishes quickly in tests.
    let contents = format!(
        r#"
[params]
dt = 0.1
prtl_num = 3000
q_e = 1.0
ion_mass = 16.0
vth = 0.2
gamma_inj = 1.0

[fields]
e = [0.0, 0.0, 0.0]
b = [0.3, 0.0, 1.0]

[setup]
t_final = 40
pusher = "{}"
seed = 3

[output]
write_output = false
output_interval = 10
stride = 4
"#,
        pusher
    );
    Config::parse(&contents).unwrap()
}
