// What you SEE:
// • A white canvas with one button in the top-left corner.
// • Hold Left Mouse and drag: the current figure follows the cursor.
//   Release: it is committed and stays.
// • 1 / 2 / 3 pick line / rectangle / filled rectangle.
// • R / Y / G / K pick red / yellow / green / black.
// • S saves a PNG snapshot. ESC quits.

use std::time::Instant;

use pixel_sketch::config::Config;
use pixel_sketch::draw::{Drawer, KeyCommand};
use pixel_sketch::scene::Scene;
use pixel_sketch::widget::Button;
use pixel_sketch::{logging, snapshot, Error, PixelSurface, Point, Size};
use tracing::{info, warn};

fn main() -> Result<(), Error> {
    /* --- Config + logging --- */
    let config = Config::from_args(std::env::args().skip(1))?;
    logging::init(config.debug);

    /* --- Window + surface setup ---
       Visual: window opens, blank until the first frame is presented. */
    let mut drawer = Drawer::new(
        &config.title,
        config.width,
        config.height,
        config.target_fps as usize,
    )?;
    let mut surface = PixelSurface::new(config.width, config.height, config.background)?;

    /* --- Scene ---
       Visual: redraws every frame; previews a drag every tick. */
    let mut scene = Scene::new(
        config.background,
        config.tick_period(),
        config.redraw_period(),
        Instant::now(),
    );
    scene.add_widget(Box::new(Button::new(Point::new(10.0, 10.0), Size::new(60.0, 24.0))));
    info!(width = config.width, height = config.height, "canvas ready");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Keyboard commands */
        for command in drawer.key_commands() {
            match command {
                KeyCommand::Figure(kind) => scene.select_figure_kind(kind),
                KeyCommand::Color(name) => scene.select_color(name)?,
                KeyCommand::Snapshot => {
                    if let Err(e) = snapshot::save_png(&surface, &config.snapshot_path) {
                        warn!("{e}");
                    }
                }
            }
        }

        /* 2) Pointer events: widgets first, then the drag session */
        for event in drawer.pointer_events() {
            if let Some(id) = scene.dispatch(event, now) {
                info!(?id, "click");
            }
        }

        /* 3) Compose + present when a tick is due; otherwise just pump events */
        if !scene.update(now, &mut surface, &mut drawer)? {
            drawer.pump();
        }
    }

    scene.shutdown();
    Ok(())
}
