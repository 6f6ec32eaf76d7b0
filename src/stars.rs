// The starfield: a fixed population of stars flying out from the screen center.
// Visual outcomes:
// - Stars appear near the center as black dots and brighten as they travel outward.
// - A star that leaves the window is reborn near the center, black again.
// - Up/Down change how fast everything moves (even backwards, past zero).

use crate::pixels::PixelBuffer;
use crate::rng::RandomSource;
use crate::types::{Point, Star, Viewport};
use std::f64::consts::PI;

/// Brightness gained per on-screen tick.
pub const FADE_IN_STEP: u8 = 5;
/// How much one Up/Down press changes the speed multiplier.
pub const WARP_STEP: f64 = 0.01;
/// Speed of the fastest possible star, before the multiplier.
const MAX_SPEED: f64 = 255.0;

/// Build one star near the center of `viewport`, heading straight out.
///
/// Speed is `255 * t^2` with `t` uniform in `[0.3, 1.0)`, so most stars start slow
/// and a few start fast. The star begins at an integer distance `1..=round(width/8)`
/// from the center along its direction of travel.
pub fn create_star(viewport: Viewport, rng: &mut impl RandomSource) -> Star {
    let angle = rng.uniform(-PI, PI);
    let speed = MAX_SPEED * rng.uniform(0.3, 1.0).powi(2);

    let dx = angle.cos();
    let dy = angle.sin();

    let d = (rng.uniform_int(viewport.spawn_radius()) + 1) as f64;

    let c = viewport.center();
    Star {
        pos: Point::new(c.x + dx * d, c.y + dy * d),
        velocity: Point::new(dx * speed, dy * speed),
        brightness: 0,
    }
}

/// Owns every star and the one knob the user can turn.
pub struct StarField<R: RandomSource> {
    viewport: Viewport,
    stars: Box<[Star]>, // fixed length; stars are only ever replaced in place
    speed_multiplier: f64,
    rng: R,
}

impl<R: RandomSource> StarField<R> {
    /// `count` fresh stars, all built by `create_star`.
    pub fn new(viewport: Viewport, count: usize, speed_multiplier: f64, mut rng: R) -> Self {
        let stars = (0..count).map(|_| create_star(viewport, &mut rng)).collect();
        Self { viewport, stars, speed_multiplier, rng }
    }

    /// Start from stars the caller already built.
    #[cfg(test)]
    pub fn with_stars(viewport: Viewport, stars: Vec<Star>, speed_multiplier: f64, rng: R) -> Self {
        Self { viewport, stars: stars.into_boxed_slice(), speed_multiplier, rng }
    }

    #[cfg(test)]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Up key. Unbounded.
    pub fn speed_up(&mut self) {
        self.speed_multiplier += WARP_STEP;
    }

    /// Down key. May go negative, which sends the stars back toward the center.
    pub fn slow_down(&mut self) {
        self.speed_multiplier -= WARP_STEP;
    }

    /// Advance every star by one fixed step.
    ///
    /// `_elapsed_ms` is the previous frame's duration. Displacement does not scale
    /// with it: one call is one step, however long the frame took.
    pub fn update(&mut self, _elapsed_ms: f32) {
        let k = self.speed_multiplier;
        for star in self.stars.iter_mut() {
            star.pos.x += star.velocity.x * k;
            star.pos.y += star.velocity.y * k;

            if !self.viewport.contains(star.pos) {
                *star = create_star(self.viewport, &mut self.rng);
            } else if star.brightness < u8::MAX {
                star.brightness = star.brightness.saturating_add(FADE_IN_STEP);
            }
        }
    }

    /// Plot every star as one grey pixel at its floored position.
    /// Later stars overwrite earlier ones on the same pixel.
    pub fn draw(&self, buffer: &mut PixelBuffer) {
        for star in self.stars.iter() {
            buffer.set_pixel(star.pos.x.floor() as i64, star.pos.y.floor() as i64, star.brightness);
        }
    }
}
