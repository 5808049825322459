// The command surface: figure/color selection, widgets, event dispatch and
// frame composition. One scene drives one surface from one thread.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::Error;
use crate::input::{Handled, PointerEvent, PointerHandler};
use crate::session::InteractionSession;
use crate::surface::{PixelSurface, Present};
use crate::ticker::RepeatingTask;
use crate::types::{Color, ColorName, FigureKind};
use crate::widget::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

pub struct Scene {
    background: Color,
    session: InteractionSession,
    widgets: Vec<(WidgetId, Box<dyn Widget>)>,
    next_widget: u64,
    redraw: RepeatingTask,
}

impl Scene {
    /// `tick` paces the drag preview, `redraw` the idle widget loop.
    pub fn new(background: Color, tick: Duration, redraw: Duration, now: Instant) -> Self {
        let mut redraw = RepeatingTask::new(redraw);
        redraw.start(now);
        Self {
            background,
            session: InteractionSession::new(tick),
            widgets: Vec::new(),
            next_widget: 0,
            redraw,
        }
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn select_figure_kind(&mut self, kind: FigureKind) {
        info!(kind = %kind, "figure selected");
        self.session.select_figure_kind(kind);
    }

    /// Accepts red, yellow, green (plus black and white). Unknown names leave
    /// the current color untouched.
    pub fn select_color(&mut self, name: &str) -> Result<(), Error> {
        let color = name.parse::<ColorName>().inspect_err(|e| warn!("{e}"))?.color();
        info!(color = name, "color selected");
        self.session.select_color(color);
        Ok(())
    }

    pub fn add_widget(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = WidgetId(self.next_widget);
        self.next_widget += 1;
        self.widgets.push((id, widget));
        debug!(?id, "widget added");
        id
    }

    /// Stop dispatching to and drawing a widget. Returns whether it existed.
    pub fn remove_widget(&mut self, id: WidgetId) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|(wid, _)| *wid != id);
        self.widgets.len() != before
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Route one pointer event: widgets first, then the drawing session.
    /// A press that lands on a widget does not start a drag.
    /// Returns the widget that was clicked, if any.
    pub fn dispatch(&mut self, event: PointerEvent, now: Instant) -> Option<WidgetId> {
        let mut clicked = None;
        let mut consumed = false;
        for (id, widget) in &mut self.widgets {
            match widget.on_pointer(event, now) {
                Handled::Clicked => clicked = Some(*id),
                Handled::Consumed => consumed = true,
                Handled::Ignored => {}
            }
        }

        if !(consumed && matches!(event, PointerEvent::Down(_))) {
            self.session.on_pointer(event, now);
        }
        clicked
    }

    /// Clear, draw the live figure, replay committed shapes, draw widgets.
    pub fn compose(&self, surface: &mut PixelSurface) {
        surface.clear(self.background);
        self.session.draw(surface);
        for (_, widget) in &self.widgets {
            widget.draw(surface);
        }
    }

    /// Compose and present if the redraw loop or the drag preview is due.
    /// Returns whether a frame was presented.
    pub fn update(
        &mut self,
        now: Instant,
        surface: &mut PixelSurface,
        host: &mut dyn Present,
    ) -> Result<bool, Error> {
        let idle_frame = self.redraw.poll(now);
        let preview_frame = self.session.poll_tick(now);
        if !(idle_frame || preview_frame) {
            return Ok(false);
        }
        self.compose(surface);
        host.present(surface)?;
        Ok(true)
    }

    /// Stop both scheduled tasks and drop any half-finished drag.
    pub fn shutdown(&mut self) {
        self.session.cancel();
        self.redraw.cancel();
        info!(shapes = self.session.log().len(), "scene shut down");
    }
}
