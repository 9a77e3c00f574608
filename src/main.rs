// What you SEE:
// • A white canvas. Hold Left Mouse: you paint a stroke in the current color.
// • Keys 1-9 and 0 pick palette colors, R is rainbow, P pulses the width.
// • Scroll resizes the brush (Shift scrolls faster), Space clears, D pauses
//   the drift, ESC quits.
// • The whole image drifts one pixel sideways every frame, and two gray
//   guide dots blink back onto the bottom edge twice a second.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use drift_paint::config::SurfaceConfig;
use drift_paint::error::Error;
use drift_paint::input::ShellRequest;
use drift_paint::screen::Screen;
use drift_paint::surface::PaintSurface;
use drift_paint::ticker::Ticker;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drift_paint=info".into()),
        )
        .init();

    /* --- Surface + window setup ---
       Visual: window opens showing a blank white canvas. Construction
       fails fast here if the config is broken. */
    let config = SurfaceConfig::default();
    let (width, height) = (config.width, config.height);
    let decoration_period = config.decoration_period;
    let mut surface = PaintSurface::new(config)?;
    let mut screen = Screen::new("Drift Paint", width, height)?;
    info!(width, height, "paint surface ready");

    /* --- Repeating tasks ---
       Both loops are owned handles: the drift runs every frame until the
       D key pauses it, the decoration fires on its timer. Both are
       stopped explicitly before main returns. */
    let mut drift = Ticker::every_frame();
    let mut decoration = Ticker::new(decoration_period);

    /* --- FPS accounting (logged once per second) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while screen.is_open() && !screen.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs: translate the window state into events and feed the
           surface. The only thing it hands back is the drift toggle. */
        for event in screen.poll() {
            if let Some(ShellRequest::ToggleDrift) = surface.handle(event) {
                drift.toggle();
                info!(running = drift.is_running(), "drift loop toggled");
            }
        }

        /* 2) Drift pass: the image creeps one step per presented frame. */
        if drift.tick(now) {
            surface.drift_pass();
        }

        /* 3) Decoration pass: guide dots reappear on their own cadence. */
        if decoration.tick(now) {
            surface.decoration_pass();
        }

        /* 4) Present to the window (this is when the screen updates). */
        screen.present(surface.raster())?;

        /* 5) FPS counter */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!(fps = f64::from(frames_this_second as f32 / secs), "frame rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    drift.stop();
    decoration.stop();
    info!("shutting down");
    Ok(())
}
