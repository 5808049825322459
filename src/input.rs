// Pointer events and the handler contract the scene dispatches through.
// The host only tells us "where is the mouse, is the button down" each frame;
// `PointerTracker` turns that polled state into discrete down/move/up events.

use std::time::Instant;

use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

impl PointerEvent {
    pub fn point(&self) -> Point {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Ignored,
    /// Event targeted this handler; a consumed `Down` does not start a drag.
    Consumed,
    /// Press and release both landed on this handler.
    Clicked,
}

/// Anything that reacts to pointer input: widgets and the drawing session.
pub trait PointerHandler {
    fn on_pointer(&mut self, event: PointerEvent, now: Instant) -> Handled;
}

/// Edge detector over polled mouse state.
#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    last_pos: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's mouse position (None if unknown) and left-button state.
    pub fn update(&mut self, pos: Option<Point>, down: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let moved = pos.is_some() && pos != self.last_pos;

        if down && !self.was_down {
            if let Some(p) = pos {
                events.push(PointerEvent::Down(p));
                self.was_down = true;
            }
        } else if moved {
            if let Some(p) = pos {
                events.push(PointerEvent::Move(p));
            }
        }

        if !down && self.was_down {
            if let Some(p) = pos.or(self.last_pos) {
                events.push(PointerEvent::Up(p));
            }
            self.was_down = false;
        }

        if pos.is_some() {
            self.last_pos = pos;
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release_becomes_three_kinds_of_event() {
        let mut t = PointerTracker::new();
        let a = Point::new(1.0, 1.0);
        let b = Point::new(5.0, 3.0);

        assert_eq!(t.update(Some(a), false), vec![PointerEvent::Move(a)]);
        assert_eq!(t.update(Some(a), true), vec![PointerEvent::Down(a)]);
        assert_eq!(t.update(Some(a), true), vec![]);
        assert_eq!(t.update(Some(b), true), vec![PointerEvent::Move(b)]);
        assert_eq!(t.update(Some(b), false), vec![PointerEvent::Up(b)]);
        assert_eq!(t.update(Some(b), false), vec![]);
    }

    #[test]
    fn release_outside_the_window_uses_last_known_position() {
        let mut t = PointerTracker::new();
        let a = Point::new(2.0, 2.0);
        t.update(Some(a), true);
        assert_eq!(t.update(None, false), vec![PointerEvent::Up(a)]);
    }

    #[test]
    fn press_without_a_position_waits() {
        let mut t = PointerTracker::new();
        assert!(t.update(None, true).is_empty());
        let a = Point::new(3.0, 4.0);
        assert_eq!(t.update(Some(a), true), vec![PointerEvent::Down(a)]);
    }

    #[test]
    fn moved_release_reports_move_then_up() {
        let mut t = PointerTracker::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(9.0, 9.0);
        t.update(Some(a), true);
        assert_eq!(
            t.update(Some(b), false),
            vec![PointerEvent::Move(b), PointerEvent::Up(b)]
        );
    }
}
