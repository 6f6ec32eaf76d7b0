// Core types shared by the simulation, the rasterizer and the frame loop.

/// A 2D float pair. Used both for where a star is and how far it moves per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One point of light.
/// Visual: a single grey pixel that starts black near the center and lights up as it flies out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Star {
    pub pos: Point,       // free-floating, never clamped
    pub velocity: Point,  // pixels per tick before the speed multiplier
    pub brightness: u8,   // 0 = black, 255 = white
}

/// Fixed rendering surface size. Stars live in `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Screen center, using integer halves of the size.
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// True when `p` is still on screen.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.x < self.width as f64 && p.y >= 0.0 && p.y < self.height as f64
    }

    /// Radius of the disk new stars spawn in: `round(width / 8)`, at least 1.
    pub fn spawn_radius(&self) -> u32 {
        ((self.width as f64 / 8.0).round() as u32).max(1)
    }
}

/// The keys the frame loop reacts to. Anything else arrives as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Up,
    Down,
    Other,
}

/// One discrete event from the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_integer_halves() {
        assert_eq!(Viewport::new(800, 600).center(), Point::new(400.0, 300.0));
        assert_eq!(Viewport::new(5, 3).center(), Point::new(2.0, 1.0));
    }

    #[test]
    fn contains_is_half_open() {
        let vp = Viewport::new(10, 10);
        assert!(vp.contains(Point::new(0.0, 0.0)));
        assert!(vp.contains(Point::new(9.99, 9.99)));
        assert!(!vp.contains(Point::new(10.0, 5.0)));
        assert!(!vp.contains(Point::new(5.0, -0.01)));
    }

    #[test]
    fn spawn_radius_rounds_and_never_hits_zero() {
        assert_eq!(Viewport::new(800, 600).spawn_radius(), 100);
        assert_eq!(Viewport::new(12, 12).spawn_radius(), 2); // 1.5 rounds away from zero
        assert_eq!(Viewport::new(2, 2).spawn_radius(), 1);
    }
}
