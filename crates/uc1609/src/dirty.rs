//! Dirty rectangle tracking
//!
//! Records the smallest rectangle, in physical coordinates, that covers every
//! pixel written since the last successful flush. Only that rectangle is
//! sent to the controller.

use crate::config::{Dimensions, PAGE_HEIGHT};

/// Inclusive rectangle in physical pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
}

impl Rect {
    /// Rectangle covering a single pixel
    pub fn point(x: u16, y: u16) -> Self {
        Self {
            x_min: x,
            x_max: x,
            y_min: y,
            y_max: y,
        }
    }

    /// Rectangle covering the whole panel
    pub fn full(dimensions: Dimensions) -> Self {
        Self {
            x_min: 0,
            x_max: dimensions.cols() - 1,
            y_min: 0,
            y_max: dimensions.rows() - 1,
        }
    }

    /// Smallest rectangle covering both `self` and `other`
    pub fn union(self, other: Rect) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// First and last controller page touched, inclusive
    pub fn pages(&self) -> core::ops::RangeInclusive<u16> {
        self.y_min / PAGE_HEIGHT..=self.y_max / PAGE_HEIGHT
    }

    /// Number of columns covered
    pub fn width(&self) -> u16 {
        self.x_max - self.x_min + 1
    }
}

/// Region of the framebuffer not yet sent to the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirtyRegion {
    /// Controller RAM matches the framebuffer
    #[default]
    Empty,
    /// Pixels inside the rectangle may differ from controller RAM
    Dirty(Rect),
}

impl DirtyRegion {
    /// Grow the region to include the rectangle spanned by two corners
    ///
    /// The corners may be given in any order.
    pub fn extend(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        self.include(Rect {
            x_min: x0.min(x1),
            x_max: x0.max(x1),
            y_min: y0.min(y1),
            y_max: y0.max(y1),
        });
    }

    /// Grow the region to include a single pixel
    pub fn include_point(&mut self, x: u16, y: u16) {
        self.include(Rect::point(x, y));
    }

    /// Grow the region to include `rect`
    pub fn include(&mut self, rect: Rect) {
        *self = match *self {
            DirtyRegion::Empty => DirtyRegion::Dirty(rect),
            DirtyRegion::Dirty(current) => DirtyRegion::Dirty(current.union(rect)),
        };
    }

    /// Mark the whole panel dirty
    pub fn mark_all(&mut self, dimensions: Dimensions) {
        *self = DirtyRegion::Dirty(Rect::full(dimensions));
    }

    /// Current rectangle, if any
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            DirtyRegion::Empty => None,
            DirtyRegion::Dirty(rect) => Some(*rect),
        }
    }

    /// Whether nothing is waiting to be flushed
    pub fn is_empty(&self) -> bool {
        matches!(self, DirtyRegion::Empty)
    }

    /// Return the current rectangle and reset the region to empty
    pub fn take(&mut self) -> Option<Rect> {
        core::mem::take(self).bounds()
    }
}
