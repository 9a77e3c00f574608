// Backend-independent input events. The minifb shell produces these from
// polled window state; the paint surface consumes them. Keeping the enum
// free of minifb types is what lets every engine test run headless.

/// One translated input event.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputEvent {
    /// Primary button pressed at surface coordinates (x,y).
    PointerDown { x: f32, y: f32 },
    /// Pointer moved to (x,y). Only meaningful to a stroke while the
    /// button is held; the surface ignores it otherwise.
    PointerMove { x: f32, y: f32 },
    /// Primary button released.
    PointerUp,
    /// Pointer left the surface. Ends a stroke just like a release.
    PointerLeave,
    /// Wheel tick: positive `delta` grows the brush, negative shrinks it.
    /// `fast` is the held-modifier larger step.
    Wheel { delta: f32, fast: bool },
    /// A character key, looked up in the configured key map.
    Key(char),
}

/// Things the surface cannot do for itself and hands back to whoever owns
/// the loops (currently just pausing the drift task).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShellRequest {
    ToggleDrift,
}
