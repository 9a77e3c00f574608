// Window shell: a minifb window that presents the raster and turns polled
// mouse/key state into translated input events.
// Visual effects provided here:
// 1) The window that shows the paint surface.
// 2) Every click, drag, scroll, and key press the surface reacts to.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::input::InputEvent;
use crate::raster::Raster;

pub struct Screen {
    window: Window,
    // Edge detection state between polls
    was_down: bool,
    last_pos: Option<(f32, f32)>,
    was_inside: bool,
}

impl Screen {
    /// Open a window sized to the surface.
    /// Visual: an empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self {
            window,
            was_down: false,
            last_pos: None,
            was_inside: false,
        })
    }

    /// Push the raster to the screen.
    /// Visual: the window immediately shows the current surface content.
    pub fn present(&mut self, raster: &Raster) -> Result<(), Error> {
        self.window
            .update_with_buffer(raster.pixels(), raster.width(), raster.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Translate the window state since the last poll into input events,
    /// in the order the surface should see them.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // Pointer position; None means the cursor is off the surface.
        let pos = self.window.get_mouse_pos(MouseMode::Discard);
        let inside = pos.is_some();
        if self.was_inside && !inside {
            events.push(InputEvent::PointerLeave);
        }
        self.was_inside = inside;

        // Button edges and drag movement
        let down = self.window.get_mouse_down(MouseButton::Left);
        if let Some((x, y)) = pos {
            if down && !self.was_down {
                events.push(InputEvent::PointerDown { x, y });
            } else if down && self.last_pos != Some((x, y)) {
                events.push(InputEvent::PointerMove { x, y });
            }
            self.last_pos = Some((x, y));
        }
        if !down && self.was_down {
            events.push(InputEvent::PointerUp);
        }
        self.was_down = down;

        // Wheel: minifb reports positive y for scroll up, which grows the
        // brush. Shift is the larger-step modifier.
        if let Some((_, wheel_y)) = self.window.get_scroll_wheel() {
            if wheel_y != 0.0 {
                let fast = self.window.is_key_down(Key::LeftShift)
                    || self.window.is_key_down(Key::RightShift);
                events.push(InputEvent::Wheel { delta: wheel_y, fast });
            }
        }

        // Key presses, no auto-repeat
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            if let Some(ch) = key_to_char(key) {
                events.push(InputEvent::Key(ch));
            }
        }

        events
    }
}

/// Map the minifb keys we bind to the characters the key map is written in.
/// Unlisted keys stay None and are dropped, matching the no-op default.
fn key_to_char(key: Key) -> Option<char> {
    Some(match key {
        Key::Key1 => '1',
        Key::Key2 => '2',
        Key::Key3 => '3',
        Key::Key4 => '4',
        Key::Key5 => '5',
        Key::Key6 => '6',
        Key::Key7 => '7',
        Key::Key8 => '8',
        Key::Key9 => '9',
        Key::Key0 => '0',
        Key::R => 'r',
        Key::P => 'p',
        Key::D => 'd',
        Key::Space => ' ',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_map_to_keymap_characters() {
        assert_eq!(key_to_char(Key::Key1), Some('1'));
        assert_eq!(key_to_char(Key::Key0), Some('0'));
        assert_eq!(key_to_char(Key::R), Some('r'));
        assert_eq!(key_to_char(Key::Space), Some(' '));
        assert_eq!(key_to_char(Key::Escape), None);
    }
}
