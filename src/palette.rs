// Colors: packed 0x00RRGGBB pixels for minifb, the fixed ten-entry palette,
// and the HSL conversion used by the rainbow brush.

/// An sRGB color. Packs to the 0x00RRGGBB layout minifb expects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// The ten named colors a digit key can select, in key order (1..9 then 0).
/// Visual: pressing "3" paints in red, "0" in brown, and so on.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<(&'static str, Rgb)>,
}

impl Palette {
    pub fn new(entries: Vec<(&'static str, Rgb)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color at `index`, or None for an out-of-range lookup (callers treat
    /// that as a silent no-op rather than an error).
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.entries.get(index).map(|(_, c)| *c)
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|(n, _)| *n)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            ("black", Rgb::new(0x00, 0x00, 0x00)),
            ("gray", Rgb::new(0x50, 0x50, 0x50)),
            ("red", Rgb::new(0xef, 0x13, 0x0b)),
            ("orange", Rgb::new(0xff, 0x71, 0x00)),
            ("yellow", Rgb::new(0xff, 0xe4, 0x00)),
            ("green", Rgb::new(0x00, 0xcc, 0x00)),
            ("blue", Rgb::new(0x00, 0xb2, 0xff)),
            ("purple", Rgb::new(0xa3, 0x00, 0xba)),
            ("pink", Rgb::new(0xdf, 0x69, 0xa7)),
            ("brown", Rgb::new(0xa0, 0x52, 0x2d)),
        ])
    }
}

/// Convert HSL to RGB. The rainbow brush always calls this with s=1.0,
/// l=0.5, i.e. the fully saturated hue wheel.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r1), to_u8(g1), to_u8(b1))
}

/// Stroke color for the rainbow brush at `hue` degrees: hsl(hue, 100%, 50%).
pub fn rainbow_color(hue: u16) -> Rgb {
    hsl_to_rgb(hue as f32, 1.0, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_is_00rrggbb() {
        assert_eq!(Rgb::new(0xef, 0x13, 0x0b).pack(), 0x00ef_130b);
        assert_eq!(Rgb::new(0, 0, 0).pack(), 0);
        assert_eq!(Rgb::new(255, 255, 255).pack(), 0x00ff_ffff);
    }

    #[test]
    fn default_palette_has_ten_entries_in_key_order() {
        let p = Palette::default();
        assert_eq!(p.len(), 10);
        assert_eq!(p.name(0), Some("black"));
        assert_eq!(p.name(2), Some("red"));
        assert_eq!(p.color(2), Some(Rgb::new(0xef, 0x13, 0x0b)));
        assert_eq!(p.name(9), Some("brown"));
        assert_eq!(p.color(10), None);
    }

    #[test]
    fn hue_wheel_hits_primaries() {
        assert_eq!(rainbow_color(0), Rgb::new(255, 0, 0));
        assert_eq!(rainbow_color(120), Rgb::new(0, 255, 0));
        assert_eq!(rainbow_color(240), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hue_just_below_wrap_is_reddish() {
        let c = rainbow_color(359);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert!(c.b <= 5);
    }
}
