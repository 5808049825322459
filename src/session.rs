// The drag-to-draw state machine: Idle -> (down) -> Dragging -> (up) -> Idle.
// Visual: while the button is held the figure follows the cursor on every
// preview tick; on release it is committed and stays on screen.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::input::{Handled, PointerEvent, PointerHandler};
use crate::shapes::{Shape, ShapeLog};
use crate::surface::PixelSurface;
use crate::ticker::RepeatingTask;
use crate::types::{Color, FigureKind, Point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { start: Point, end: Option<Point> },
}

pub struct InteractionSession {
    kind: FigureKind,
    color: Color,
    state: DragState,
    log: ShapeLog,
    preview: RepeatingTask,
}

impl InteractionSession {
    /// `tick` is the live-preview period while a drag is in progress.
    pub fn new(tick: Duration) -> Self {
        Self {
            kind: FigureKind::default(),
            color: Color::black(),
            state: DragState::Idle,
            log: ShapeLog::new(),
            preview: RepeatingTask::new(tick),
        }
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn log(&self) -> &ShapeLog {
        &self.log
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn tick_running(&self) -> bool {
        self.preview.is_running()
    }

    pub fn select_figure_kind(&mut self, kind: FigureKind) {
        self.kind = kind;
    }

    pub fn select_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn pointer_down(&mut self, at: Point, now: Instant) {
        if self.is_dragging() {
            debug!("pointer down while dragging; restarting drag");
        }
        self.state = DragState::Dragging { start: at, end: None };
        self.preview.start(now);
        debug!(kind = %self.kind, x = at.x, y = at.y, "drag started");
    }

    /// Only records the endpoint; drawing happens on the preview tick.
    pub fn pointer_move(&mut self, at: Point) {
        if let DragState::Dragging { end, .. } = &mut self.state {
            *end = Some(at);
        }
    }

    /// Commit the figure and stop the preview tick. Ignored while idle.
    pub fn pointer_up(&mut self, at: Point) -> Option<Shape> {
        let DragState::Dragging { start, .. } = self.state else {
            return None;
        };
        let shape = Shape::new(self.kind, start, at, self.color);
        self.log.record(shape);
        self.state = DragState::Idle;
        self.preview.cancel();
        info!(kind = %self.kind, total = self.log.len(), "shape committed");
        Some(shape)
    }

    /// The figure as it would be committed right now, if both ends are known.
    pub fn live_shape(&self) -> Option<Shape> {
        match self.state {
            DragState::Dragging { start, end: Some(end) } => {
                Some(Shape::new(self.kind, start, end, self.color))
            }
            _ => None,
        }
    }

    /// True when a preview frame is due: tick elapsed and both ends known.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        self.preview.poll(now) && self.live_shape().is_some()
    }

    /// Draw the in-progress figure, then replay the committed ones on top.
    pub fn draw(&self, surface: &mut PixelSurface) {
        if let Some(shape) = self.live_shape() {
            shape.draw(surface);
        }
        self.log.replay(surface);
    }

    /// Drop any in-progress drag and stop the tick.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        if self.preview.cancel() {
            debug!("in-progress drag abandoned");
        }
    }
}

impl PointerHandler for InteractionSession {
    fn on_pointer(&mut self, event: PointerEvent, now: Instant) -> Handled {
        match event {
            PointerEvent::Down(p) => {
                self.pointer_down(p, now);
                Handled::Consumed
            }
            PointerEvent::Move(p) => {
                self.pointer_move(p);
                if self.is_dragging() { Handled::Consumed } else { Handled::Ignored }
            }
            PointerEvent::Up(p) => match self.pointer_up(p) {
                Some(_) => Handled::Consumed,
                None => Handled::Ignored,
            },
        }
    }
}

impl Drop for InteractionSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
