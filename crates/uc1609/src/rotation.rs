//! Logical to physical coordinate mapping
//!
//! Drawing code works in logical coordinates, whose axes follow the current
//! [`Rotation`]. The framebuffer always stores pixels in the panel's native
//! (physical) layout, so every logical pixel is mapped before it is stored.
//! The flip constants are the native panel width and height, never the
//! rotated ones.

use crate::config::{Dimensions, Rotation};

/// Map a logical pixel to its physical position
///
/// `x` and `y` must already be inside the logical canvas for `rotation`
/// (see [`logical_dimensions`](crate::config::logical_dimensions)).
/// `dimensions` are the native panel dimensions.
pub fn apply_rotation(x: u16, y: u16, dimensions: Dimensions, rotation: Rotation) -> (u16, u16) {
    let width = dimensions.cols();
    let height = dimensions.rows();

    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (y, height - 1 - x),
        Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
        Rotation::Rotate270 => (width - 1 - y, x),
    }
}
