// Subsurface stacking demo
//
// Minimal Wayland client that builds a fixed tree of colored rectangles
// (one toplevel, three nested subsurfaces, one of them two levels deep)
// to visually verify that a compositor honors subsurface positioning and
// place_below ordering.

pub mod core;
pub mod util;

#[cfg(test)]
mod tests;
