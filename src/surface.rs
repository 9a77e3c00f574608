// The paint surface: owns the raster and the brush, runs the idle/stroking
// state machine, and applies the drift and decoration passes.
// Visual outcomes:
// - Dragging with the button held paints a stroke; a bare click paints a dot.
// - Every frame the whole image creeps one drift step sideways.
// - Twice a second, two gray guide dots reappear along the bottom edge.

use tracing::debug;

use crate::brush::Brush;
use crate::config::{ConfigError, KeyAction, SurfaceConfig};
use crate::input::{InputEvent, ShellRequest};
use crate::raster::Raster;

/// Spacing of the decoration slots along the bottom edge, in pixels.
const DECORATION_SLOT: usize = 50;
/// Diameter of one guide dot.
const DECORATION_DOT: i32 = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum StrokeState {
    Idle,
    Stroking,
}

pub struct PaintSurface {
    config: SurfaceConfig,
    raster: Raster,
    brush: Brush,
    state: StrokeState,
    last_x: f32,
    last_y: f32,
}

impl PaintSurface {
    /// Build a surface from a validated config. An incomplete palette,
    /// inverted width range, or empty surface fails here, before any
    /// event is ever handled.
    pub fn new(config: SurfaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let raster = Raster::new(config.width, config.height, config.background);
        let brush = Brush::new(config.default_width, config.width_range);
        Ok(Self {
            config,
            raster,
            brush,
            state: StrokeState::Idle,
            last_x: 0.0,
            last_y: 0.0,
        })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn is_stroking(&self) -> bool {
        self.state == StrokeState::Stroking
    }

    /// Feed one translated input event through the state machine. Unbound
    /// keys and out-of-range lookups are silent no-ops; the only non-local
    /// effect is a request handed back to the shell.
    pub fn handle(&mut self, event: InputEvent) -> Option<ShellRequest> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.state = StrokeState::Stroking;
                self.last_x = x;
                self.last_y = y;
                // The press itself paints, so a click with no drag still
                // leaves a dot.
                self.stroke_to(x, y);
            }
            InputEvent::PointerMove { x, y } => {
                if self.state == StrokeState::Stroking {
                    self.stroke_to(x, y);
                }
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.state = StrokeState::Idle;
            }
            InputEvent::Wheel { delta, fast } => {
                let multiplier = if fast { self.config.fast_multiplier } else { 1 };
                self.brush
                    .adjust_width(delta, self.config.wheel_step, multiplier);
                debug!(width = self.brush.width(), "brush width adjusted");
            }
            InputEvent::Key(key) => return self.handle_key(key),
        }
        None
    }

    fn handle_key(&mut self, key: char) -> Option<ShellRequest> {
        match self.config.keymap.action(key)? {
            KeyAction::SelectColor(index) => {
                self.brush.select_fixed(index, &self.config.palette);
                debug!(color = self.config.palette.name(index), "palette color selected");
            }
            KeyAction::SelectRainbow => {
                // Only the brush changes; entering rainbow never clears
                // the surface.
                self.brush.select_rainbow();
            }
            KeyAction::TogglePulse => self.brush.toggle_pulse(),
            KeyAction::ClearSurface => self.clear(),
            KeyAction::ToggleDrift => return Some(ShellRequest::ToggleDrift),
        }
        None
    }

    /// Blank the raster to background, wiping all painted content.
    pub fn clear(&mut self) {
        self.raster.fill(self.config.background);
    }

    /// Commit one stroke segment from the last recorded position to (x,y)
    /// and advance the recorded position. A segment of zero length is
    /// rendered as a dot so it still leaves a visible mark.
    fn stroke_to(&mut self, x: f32, y: f32) {
        let color = self.brush.segment_color(&self.config.palette);
        let width = self.brush.width();
        if x == self.last_x && y == self.last_y {
            let radius = ((width / 2) as i32).max(1);
            self.raster.fill_disc(x as i32, y as i32, radius, color);
        } else {
            self.raster
                .stroke_line(self.last_x, self.last_y, x, y, width, color);
        }
        self.last_x = x;
        self.last_y = y;
    }

    /// One drift pass: the whole raster content moves by the configured
    /// vector, vacated pixels become background. Called once per presented
    /// frame while the drift task is running.
    pub fn drift_pass(&mut self) {
        let (dx, dy) = self.config.drift;
        self.raster.shift(dx, dy, self.config.background);
    }

    /// One decoration pass: gray guide dots in the first and last 50-pixel
    /// slots along the bottom edge, independent of brush state.
    pub fn decoration_pass(&mut self) {
        let slots = self.config.width.div_ceil(DECORATION_SLOT);
        if slots == 0 {
            return;
        }
        let y = self.config.height as i32 - DECORATION_DOT / 2 - 1;
        let radius = DECORATION_DOT / 2;
        for slot in [0, slots - 1] {
            let x = (slot * DECORATION_SLOT + DECORATION_SLOT / 2) as i32;
            self.raster
                .fill_disc(x, y, radius, self.config.decoration_color);
        }
    }
}
