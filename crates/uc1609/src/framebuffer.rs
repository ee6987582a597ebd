//! Packed 1-bit framebuffer in controller page layout
//!
//! The buffer mirrors the UC1609 display RAM: one byte per column per page,
//! where a page is a band of 8 rows. Byte `x + page * cols` holds the pixels
//! `(x, page * 8 + bit)`, with bit 0 at the top of the band.

use alloc::vec::Vec;

use crate::config::{Dimensions, PAGE_HEIGHT};

/// Framebuffer in physical coordinates
#[derive(Clone, Debug)]
pub struct Framebuffer {
    dimensions: Dimensions,
    bytes: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a zeroed framebuffer for `dimensions`
    ///
    /// Returns `None` if the allocation cannot be satisfied.
    pub fn try_new(dimensions: Dimensions) -> Option<Self> {
        let size = dimensions.buffer_size();
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(size).ok()?;
        bytes.resize(size, 0);
        Some(Self { dimensions, bytes })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn location(&self, x: u16, y: u16) -> Option<(usize, u8)> {
        if x >= self.dimensions.cols() || y >= self.dimensions.rows() {
            return None;
        }
        let page = (y / PAGE_HEIGHT) as usize;
        let index = x as usize + page * self.dimensions.cols() as usize;
        Some((index, 1 << (y % PAGE_HEIGHT)))
    }

    /// Set or clear one physical pixel
    ///
    /// Returns `false` (and changes nothing) when the pixel is off the panel.
    pub fn set(&mut self, x: u16, y: u16, on: bool) -> bool {
        let Some((index, bit)) = self.location(x, y) else {
            return false;
        };
        if on {
            self.bytes[index] |= bit;
        } else {
            self.bytes[index] &= !bit;
        }
        true
    }

    /// Read one physical pixel
    pub fn get(&self, x: u16, y: u16) -> Option<bool> {
        self.location(x, y)
            .map(|(index, bit)| self.bytes[index] & bit != 0)
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Set every pixel
    pub fn fill(&mut self) {
        self.bytes.fill(0xFF);
    }

    /// Bytes of `page` for columns `x_min..=x_max`
    pub fn page_run(&self, page: u16, x_min: u16, x_max: u16) -> &[u8] {
        let start = page as usize * self.dimensions.cols() as usize;
        &self.bytes[start + x_min as usize..=start + x_max as usize]
    }

    /// Raw buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
