// Brush state: which color paints, how wide, and where the rainbow is on
// the hue wheel. Mutated by key and wheel input, read per stroke segment.

use crate::palette::{rainbow_color, Palette, Rgb};

/// What the brush paints with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BrushMode {
    /// One of the ten palette entries, by position.
    Fixed(usize),
    /// Cycle through the hue wheel, one degree per segment.
    Rainbow,
}

pub struct Brush {
    mode: BrushMode,
    width: u32,
    width_range: (u32, u32),
    /// Hue in degrees, 0..360. Only meaningful in rainbow mode.
    hue: u16,
    /// Width oscillation: when on, the width walks one step per segment and
    /// reverses at the clamp bounds.
    pulse: bool,
    pulse_growing: bool,
}

impl Brush {
    pub fn new(width: u32, width_range: (u32, u32)) -> Self {
        Self {
            mode: BrushMode::Fixed(0),
            width: width.clamp(width_range.0, width_range.1),
            width_range,
            hue: 0,
            pulse: false,
            pulse_growing: true,
        }
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn pulse(&self) -> bool {
        self.pulse
    }

    /// Select a fixed palette color by position. Out-of-range positions are
    /// ignored; the brush keeps its current mode.
    pub fn select_fixed(&mut self, index: usize, palette: &Palette) {
        if palette.color(index).is_some() {
            self.mode = BrushMode::Fixed(index);
        }
    }

    /// Enter rainbow mode. The hue restarts at 0 on every entry, so a
    /// detour through a fixed color never leaves a stale hue behind.
    pub fn select_rainbow(&mut self) {
        self.mode = BrushMode::Rainbow;
        self.hue = 0;
    }

    pub fn toggle_pulse(&mut self) {
        self.pulse = !self.pulse;
    }

    /// Wheel adjustment: `step` per tick (scroll up grows), five steps with
    /// the modifier held, always clamped to the configured range.
    pub fn adjust_width(&mut self, delta: f32, step: u32, fast_multiplier: u32) {
        if delta == 0.0 {
            return;
        }
        let magnitude = step * fast_multiplier.max(1);
        let (min, max) = self.width_range;
        self.width = if delta > 0.0 {
            (self.width + magnitude).min(max)
        } else {
            self.width.saturating_sub(magnitude).max(min)
        };
    }

    /// Resolve the color for one stroke segment and advance per-segment
    /// state: the rainbow hue steps by one degree (wrapping at 360) and a
    /// pulsing brush walks its width one step.
    pub fn segment_color(&mut self, palette: &Palette) -> Rgb {
        let color = match self.mode {
            BrushMode::Fixed(i) => palette.color(i).unwrap_or(Rgb::new(0, 0, 0)),
            BrushMode::Rainbow => {
                let c = rainbow_color(self.hue);
                self.hue = (self.hue + 1) % 360;
                c
            }
        };
        if self.pulse {
            self.step_pulse();
        }
        color
    }

    fn step_pulse(&mut self) {
        let (min, max) = self.width_range;
        if self.pulse_growing {
            self.width += 1;
            if self.width >= max {
                self.width = max;
                self.pulse_growing = false;
            }
        } else {
            self.width -= 1;
            if self.width <= min {
                self.width = min;
                self.pulse_growing = true;
            }
        }
    }
}
