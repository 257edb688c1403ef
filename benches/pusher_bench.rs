#[macro_use]
extern crate criterion;

use criterion::Criterion;
use pusher_rs::{FldSamples, Prtls, Pusher, Species};
use rand::prelude::*;

const PRTL_NUM: usize = 1_000_000;

fn setup() -> (Prtls, FldSamples) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut prtls = Prtls::new(Species::electron(1.0), PRTL_NUM);
    prtls.initialize_velocities(0.1, 5.0, &mut rng);
    let flds = FldSamples::uniform(PRTL_NUM, [0.0, 0.1, 0.0], [0.0, 0.0, 1.0]);
    (prtls, flds)
}

fn criterion_benchmark(c: &mut Criterion) {
    for pusher in Pusher::ALL.iter().copied() {
        let (mut prtls, flds) = setup();
        c.bench_function(&format!("{} push 1M prtls", pusher), move |b| {
            b.iter(|| prtls.push(pusher, &flds, 0.1))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
