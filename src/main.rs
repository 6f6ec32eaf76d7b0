// What you SEE:
// • Stars stream out of the window center, brightening as they fly toward the edges.
// • Up arrow speeds the field up, Down slows it (keep pressing and it runs backwards).
// • ESC or closing the window quits.

mod config;
mod draw;
mod error;
mod frame;
mod pixels;
mod rng;
mod stars;
mod types;

use clap::Parser;
use config::Config;
use draw::Drawer;
use error::Error;
use pixels::PixelBuffer;
use rng::SeededRandom;
use stars::StarField;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const TITLE: &str = "Starfield Simulation";

fn main() -> Result<(), Error> {
    let cfg = Config::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cfg.validate()?;
    let viewport = cfg.viewport();
    info!(
        width = viewport.width,
        height = viewport.height,
        stars = cfg.stars,
        seed = ?cfg.seed,
        warp = cfg.warp,
        "starting starfield"
    );

    /* --- Window ---
       Visual: a black window opens. Dropped (closed) on every way out of main. */
    let mut drawer = Drawer::new(TITLE, viewport.width, viewport.height)?;

    /* --- Field ---
       Visual: nothing yet; stars exist but are still black at the center. */
    let rng = match cfg.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    let mut field = StarField::new(viewport, cfg.stars, cfg.warp, rng);

    // Run the field for a while so the first frame is already full of moving, lit stars.
    for _ in 0..cfg.warmup {
        field.update(0.0);
    }
    debug!(steps = cfg.warmup, "warm-up done");

    let mut screen = PixelBuffer::new(viewport.width, viewport.height);
    let exit = frame::run(&mut drawer, &mut field, &mut screen, cfg.frame_period())?;
    info!(?exit, speed = field.speed_multiplier(), "starfield closed");

    Ok(())
}
