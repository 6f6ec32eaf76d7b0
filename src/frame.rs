// The frame loop: input -> simulate -> draw -> present -> clear -> wait.
// One thread, strictly in that order, every frame.

use crate::draw::Surface;
use crate::error::Error;
use crate::pixels::PixelBuffer;
use crate::rng::RandomSource;
use crate::stars::StarField;
use crate::types::{InputEvent, Key};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Quit,   // window closed
    Escape, // ESC pressed
}

/// Apply one poll's worth of events to the field.
/// Returns `Some` as soon as an event asks the loop to stop; later events are dropped.
pub fn handle_events<R: RandomSource>(
    field: &mut StarField<R>,
    events: impl IntoIterator<Item = InputEvent>,
) -> Option<Exit> {
    for event in events {
        match event {
            InputEvent::Quit => return Some(Exit::Quit),
            InputEvent::KeyDown(Key::Escape) => return Some(Exit::Escape),
            InputEvent::KeyDown(Key::Up) => {
                field.speed_up();
                debug!(speed = field.speed_multiplier(), "speed up");
            }
            InputEvent::KeyDown(Key::Down) => {
                field.slow_down();
                debug!(speed = field.speed_multiplier(), "slow down");
            }
            InputEvent::KeyDown(Key::Other) | InputEvent::KeyUp(_) => {}
        }
    }
    None
}

/// Sleep out whatever is left of `period` since `frame_start`.
/// A frame that already ran long is left alone. Returns the full frame time.
pub fn pace(frame_start: Instant, period: Duration) -> Duration {
    let elapsed = frame_start.elapsed();
    if elapsed < period {
        thread::sleep(period - elapsed);
        return frame_start.elapsed();
    }
    elapsed
}

/// Counts presented frames and reports a rate once per second.
pub struct FpsCounter {
    since: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { since: now, frames: 0 }
    }

    /// Record one frame at `now`. Returns the rate when a full second has gone by.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let window = now.duration_since(self.since);
        if window < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / window.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(fps)
    }
}

/// Drive frames until the user quits. Only a failed present ends it early.
pub fn run<S: Surface, R: RandomSource>(
    surface: &mut S,
    field: &mut StarField<R>,
    frame: &mut PixelBuffer,
    period: Duration,
) -> Result<Exit, Error> {
    let mut elapsed_ms = 0.0f32;
    let mut fps = FpsCounter::new(Instant::now());

    loop {
        let frame_start = Instant::now();

        if let Some(exit) = handle_events(field, surface.poll_events()) {
            return Ok(exit);
        }

        field.update(elapsed_ms);
        field.draw(frame);
        surface.present(frame)?;
        frame.clear();

        if let Some(rate) = fps.tick(Instant::now()) {
            debug!("FPS: {rate:.1}");
        }

        elapsed_ms = pace(frame_start, period).as_secs_f32() * 1000.0;
    }
}
