use anyhow::Result;
use pusher_rs::{run, Config};

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let cfg = Config::new()?;
    run(cfg)?;
    Ok(())
}
