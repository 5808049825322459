// Window host: shows the pixel surface and reports mouse/keyboard input.
// Visual: a window the size of the surface; whatever the scene composes
// appears when `present` is called.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::input::{PointerEvent, PointerTracker};
use crate::surface::{PixelSurface, Present};
use crate::types::{FigureKind, Point};

/// Keyboard shortcuts for the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Figure(FigureKind),
    Color(&'static str),
    Snapshot,
}

pub struct Drawer {
    window: Window,              // the on-screen window you see
    pointer: PointerTracker,     // turns polled mouse state into events
    scratch: Vec<u32>,           // RGBA surface repacked as 0x00RRGGBB
}

impl Drawer {
    /// Create a window sized to the surface.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self {
            window,
            pointer: PointerTracker::new(),
            scratch: Vec::with_capacity(width * height),
        })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Pointer events since the last call, in surface coordinates.
    pub fn pointer_events(&mut self) -> Vec<PointerEvent> {
        let pos = self
            .window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point::new(x as f64, y as f64));
        let down = self.window.get_mouse_down(MouseButton::Left);
        self.pointer.update(pos, down)
    }

    /// Shortcut keys pressed this frame (not repeats).
    pub fn key_commands(&self) -> Vec<KeyCommand> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(key_command)
            .collect()
    }

    /// Process window events without pushing a new frame.
    pub fn pump(&mut self) {
        self.window.update();
    }
}

impl Present for Drawer {
    /// Push the pixels for this frame to the screen.
    fn present(&mut self, surface: &PixelSurface) -> Result<(), Error> {
        surface.write_rgb_u32(&mut self.scratch);
        self.window
            .update_with_buffer(&self.scratch, surface.width(), surface.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}

fn key_command(key: Key) -> Option<KeyCommand> {
    match key {
        Key::Key1 => Some(KeyCommand::Figure(FigureKind::Line)),
        Key::Key2 => Some(KeyCommand::Figure(FigureKind::RectOutline)),
        Key::Key3 => Some(KeyCommand::Figure(FigureKind::RectFilled)),
        Key::R => Some(KeyCommand::Color("red")),
        Key::Y => Some(KeyCommand::Color("yellow")),
        Key::G => Some(KeyCommand::Color("green")),
        Key::K => Some(KeyCommand::Color("black")),
        Key::S => Some(KeyCommand::Snapshot),
        _ => None,
    }
}
