use lut_noise::{LutNoise, FILE_NAME, SIDE};

use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::process;

fn main() {
    env_logger::init();

    let rng = Xoshiro256Plus::from_entropy();
    let mut lut_noise = LutNoise::new(SIDE, rng);
    lut_noise.init();

    if let Err(err) = lut_noise.write_noise_png(FILE_NAME) {
        log::error!("{}", err);
        process::exit(1);
    }

    log::info!("wrote {0}x{0} noise texture to {1}", SIDE, FILE_NAME);
}
