// Command-line knobs. Defaults reproduce the classic 800x600, 300-star field.

use crate::error::Error;
use crate::pixels::BYTES_PER_PIXEL;
use crate::types::Viewport;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "starfield",
    about = "Stars streaming out of the screen center. Up/Down: speed, Esc: quit"
)]
pub struct Config {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Number of stars in the field
    #[arg(long, default_value_t = 300)]
    pub stars: usize,

    /// Seed for a reproducible field (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulation steps to run before the first frame
    #[arg(long, default_value_t = 2000)]
    pub warmup: u32,

    /// Initial speed multiplier
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub warp: f64,

    /// Minimum frame period in milliseconds
    #[arg(long = "frame-ms", default_value_t = 16)]
    pub frame_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Reject values that can't drive a starfield.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let frame_bytes = self
            .width
            .checked_mul(self.height)
            .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
            .filter(|&n| n <= isize::MAX as usize);
        if frame_bytes.is_none() {
            return Err(Error::Config(format!(
                "viewport {}x{} is too large for a frame buffer",
                self.width, self.height
            )));
        }
        if self.stars == 0 {
            return Err(Error::Config("need at least one star".into()));
        }
        if self.frame_ms == 0 {
            return Err(Error::Config("frame period must be at least 1 ms".into()));
        }
        if !self.warp.is_finite() {
            return Err(Error::Config(format!("warp must be a finite number, got {}", self.warp)));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("starfield").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_the_classic_field() {
        let cfg = parse(&[]);
        assert_eq!(cfg.viewport(), Viewport::new(800, 600));
        assert_eq!(cfg.stars, 300);
        assert_eq!(cfg.warmup, 2000);
        assert_eq!(cfg.warp, 0.05);
        assert_eq!(cfg.frame_period(), Duration::from_millis(16));
        assert_eq!(cfg.seed, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = parse(&[
            "--width", "320",
            "--height", "200",
            "--seed", "7",
            "--warp", "-0.02",
            "--frame-ms", "33",
        ]);
        assert_eq!(cfg.viewport(), Viewport::new(320, 200));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.warp, -0.02);
        assert_eq!(cfg.frame_ms, 33);
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let cfg = parse(&["--width", "0"]);
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn oversized_viewport_is_rejected() {
        let max = usize::MAX.to_string();
        let cfg = parse(&["--width", &max, "--height", "2"]);
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
        let half = (usize::MAX / 2).to_string();
        let cfg = parse(&["--width", &half, "--height", "1"]);
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn zero_stars_and_zero_period_are_rejected() {
        assert!(parse(&["--stars", "0"]).validate().is_err());
        assert!(parse(&["--frame-ms", "0"]).validate().is_err());
    }
}
