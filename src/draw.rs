// Window + input.
// Visual effects provided here:
// 1) A black window that shows whatever the starfield drew this frame.
// 2) Key presses and window close turned into the loop's input events.

use crate::error::Error;
use crate::pixels::PixelBuffer;
use crate::types::{InputEvent, Key};
use minifb::{KeyRepeat, Window, WindowOptions};

/// What the frame loop needs from a display: drain input, show a frame.
pub trait Surface {
    /// Everything that happened since the last poll. Never blocks.
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Upload `frame` and show it.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Error>;
}

pub struct Drawer {
    window: Window,      // the on-screen window you see
    staging: Vec<u32>,   // frame repacked as 0x00RRGGBB, reused every present
}

impl Drawer {
    /// Create a resizable window of the viewport size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, staging: Vec::with_capacity(width * height) })
    }
}

impl Surface for Drawer {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !self.window.is_open() {
            events.push(InputEvent::Quit);
        }
        events.extend(
            self.window
                .get_keys_pressed(KeyRepeat::No)
                .into_iter()
                .map(|k| InputEvent::KeyDown(map_key(k))),
        );
        events.extend(
            self.window
                .get_keys_released()
                .into_iter()
                .map(|k| InputEvent::KeyUp(map_key(k))),
        );
        events
    }

    /// Visual: the window immediately displays the new frame.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Error> {
        frame.pack_rgb32(&mut self.staging);
        self.window
            .update_with_buffer(&self.staging, frame.width(), frame.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}

fn map_key(key: minifb::Key) -> Key {
    match key {
        minifb::Key::Escape => Key::Escape,
        minifb::Key::Up => Key::Up,
        minifb::Key::Down => Key::Down,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loop_keys_are_named() {
        assert_eq!(map_key(minifb::Key::Escape), Key::Escape);
        assert_eq!(map_key(minifb::Key::Up), Key::Up);
        assert_eq!(map_key(minifb::Key::Down), Key::Down);
        assert_eq!(map_key(minifb::Key::Space), Key::Other);
        assert_eq!(map_key(minifb::Key::Left), Key::Other);
    }
}
