// Surface configuration: color table, brush bounds, drift vector, and
// timer cadence as explicit constructor input, plus the static
// key-to-action table. All of it is validated once at construction so a
// bad setup fails at startup instead of mid-session.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::palette::{Palette, Rgb};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("surface must have a nonzero area, got {width}x{height}")]
    EmptySurface { width: usize, height: usize },
    #[error("brush width range is inverted or zero: [{min},{max}]")]
    BadWidthRange { min: u32, max: u32 },
    #[error("default brush width {width} outside [{min},{max}]")]
    DefaultWidthOutOfRange { width: u32, min: u32, max: u32 },
    #[error("key '{key}' selects palette slot {index}, but the palette has {len} entries")]
    UnboundPaletteSlot { key: char, index: usize, len: usize },
    #[error("palette slot {index} has no key bound to it")]
    UnreachablePaletteSlot { index: usize },
    #[error("drift vector ({dx},{dy}) is a no-op")]
    ZeroDrift { dx: i32, dy: i32 },
}

/// What a bound key does when pressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyAction {
    /// Select the palette entry at this position.
    SelectColor(usize),
    /// Enter rainbow mode (hue restarts at 0). Does not clear the surface.
    SelectRainbow,
    /// Toggle width oscillation.
    TogglePulse,
    /// Blank the raster to background.
    ClearSurface,
    /// Ask the shell to pause or resume the drift loop.
    ToggleDrift,
}

/// Static key-to-action table, resolved once instead of per event.
#[derive(Clone, Debug)]
pub struct KeyMap {
    entries: HashMap<char, KeyAction>,
}

impl KeyMap {
    pub fn new(entries: HashMap<char, KeyAction>) -> Self {
        Self { entries }
    }

    /// Action bound to `key`, or None (unbound keys are silent no-ops).
    pub fn action(&self, key: char) -> Option<KeyAction> {
        self.entries.get(&key).copied()
    }

    /// Every color-selection binding must point inside the palette, and
    /// every palette slot must be reachable from some key.
    fn validate(&self, palette: &Palette) -> Result<(), ConfigError> {
        let mut reachable = vec![false; palette.len()];
        for (&key, &action) in &self.entries {
            if let KeyAction::SelectColor(index) = action {
                if index >= palette.len() {
                    return Err(ConfigError::UnboundPaletteSlot {
                        key,
                        index,
                        len: palette.len(),
                    });
                }
                reachable[index] = true;
            }
        }
        if let Some(index) = reachable.iter().position(|&r| !r) {
            return Err(ConfigError::UnreachablePaletteSlot { index });
        }
        Ok(())
    }
}

impl Default for KeyMap {
    /// Digits 1..9 then 0 pick the ten palette slots in order, `r` enters
    /// rainbow, `p` toggles pulse, `d` pauses drift, space clears.
    fn default() -> Self {
        let mut entries = HashMap::new();
        for (i, key) in "1234567890".chars().enumerate() {
            entries.insert(key, KeyAction::SelectColor(i));
        }
        entries.insert('r', KeyAction::SelectRainbow);
        entries.insert('p', KeyAction::TogglePulse);
        entries.insert('d', KeyAction::ToggleDrift);
        entries.insert(' ', KeyAction::ClearSurface);
        Self { entries }
    }
}

/// Full configuration for one paint surface.
#[derive(Clone, Debug)]
pub struct SurfaceConfig {
    pub width: usize,
    pub height: usize,
    pub background: Rgb,
    pub palette: Palette,
    pub keymap: KeyMap,
    /// Brush width clamp bounds, inclusive.
    pub width_range: (u32, u32),
    pub default_width: u32,
    /// Width change per wheel tick.
    pub wheel_step: u32,
    /// Step multiplier while the modifier key is held.
    pub fast_multiplier: u32,
    /// Content displacement per drift pass, in pixels.
    pub drift: (i32, i32),
    /// Cadence of the guide-dot decoration pass.
    pub decoration_period: Duration,
    pub decoration_color: Rgb,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Rgb::new(255, 255, 255),
            palette: Palette::default(),
            keymap: KeyMap::default(),
            width_range: (5, 75),
            default_width: 10,
            wheel_step: 10,
            fast_multiplier: 5,
            drift: (1, 0),
            decoration_period: Duration::from_millis(500),
            decoration_color: Rgb::new(0x50, 0x50, 0x50),
        }
    }
}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }
        let (min, max) = self.width_range;
        if min == 0 || min > max {
            return Err(ConfigError::BadWidthRange { min, max });
        }
        if !(min..=max).contains(&self.default_width) {
            return Err(ConfigError::DefaultWidthOutOfRange {
                width: self.default_width,
                min,
                max,
            });
        }
        if self.drift == (0, 0) {
            return Err(ConfigError::ZeroDrift { dx: 0, dy: 0 });
        }
        self.keymap.validate(&self.palette)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert_eq!(SurfaceConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_keymap_covers_all_ten_slots() {
        let km = KeyMap::default();
        assert_eq!(km.action('1'), Some(KeyAction::SelectColor(0)));
        assert_eq!(km.action('9'), Some(KeyAction::SelectColor(8)));
        assert_eq!(km.action('0'), Some(KeyAction::SelectColor(9)));
        assert_eq!(km.action('r'), Some(KeyAction::SelectRainbow));
        assert_eq!(km.action(' '), Some(KeyAction::ClearSurface));
        assert_eq!(km.action('x'), None);
    }

    #[test]
    fn empty_surface_is_rejected() {
        let cfg = SurfaceConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptySurface { .. })));
    }

    #[test]
    fn inverted_width_range_is_rejected() {
        let cfg = SurfaceConfig {
            width_range: (75, 5),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::BadWidthRange { .. })));
    }

    #[test]
    fn default_width_outside_range_is_rejected() {
        let cfg = SurfaceConfig {
            default_width: 80,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DefaultWidthOutOfRange { .. })
        ));
    }

    #[test]
    fn binding_past_palette_end_is_rejected() {
        let mut entries = HashMap::new();
        for (i, key) in "1234567890".chars().enumerate() {
            entries.insert(key, KeyAction::SelectColor(i));
        }
        entries.insert('x', KeyAction::SelectColor(10));
        let cfg = SurfaceConfig {
            keymap: KeyMap::new(entries),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnboundPaletteSlot { index: 10, .. })
        ));
    }

    #[test]
    fn unreachable_palette_slot_is_rejected() {
        let mut entries = HashMap::new();
        for (i, key) in "123456789".chars().enumerate() {
            entries.insert(key, KeyAction::SelectColor(i));
        }
        let cfg = SurfaceConfig {
            keymap: KeyMap::new(entries),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnreachablePaletteSlot { index: 9 })
        );
    }
}
