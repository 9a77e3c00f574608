// A drifting paint surface: strokes in palette or rainbow colors on a
// raster that creeps sideways one pixel per frame. The engine here is
// window-free; the binary wires it to a minifb window.

pub mod brush;
pub mod config;
pub mod error;
pub mod input;
pub mod palette;
pub mod raster;
pub mod screen;
pub mod surface;
pub mod ticker;
