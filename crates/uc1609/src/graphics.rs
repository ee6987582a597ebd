//! Framebuffer, dirty tracking and graphics support
//!
//! This module provides the [`GraphicDisplay`] struct which wraps [`Display`](crate::display::Display)
//! with an in-memory framebuffer. Pixel writes only touch memory and grow the
//! dirty rectangle; [`GraphicDisplay::flush`] sends the dirty pages to the
//! controller. With the `graphics` feature it implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem, which provides lines, shapes and text.
//!
//! ## Example
//!
//! ```rust,ignore
//! use uc1609::{Builder, Dimensions, Display, GraphicDisplay, Interface};
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//!
//! let config = Builder::new().dimensions(Dimensions::default()).build()?;
//! let mut display = GraphicDisplay::new(Display::new(Interface::new(spi, dc, rst), config));
//! display.begin(&mut delay)?;
//!
//! Circle::new(Point::new(10, 10), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display)?;
//!
//! Text::new("Hello, UC1609!", Point::new(60, 30),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On))
//!     .draw(&mut display)?;
//!
//! // Only the pages under the circle and the text are sent
//! display.flush()?;
//! ```

use embedded_hal::delay::DelayNs;

use crate::config::{Dimensions, Rotation, logical_dimensions};
use crate::dirty::{DirtyRegion, Rect};
use crate::display::Display;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::rotation::apply_rotation;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

/// Display with a framebuffer and dirty rectangle tracking
///
/// The framebuffer is allocated by the first [`begin`](Self::begin) and
/// freed when the `GraphicDisplay` is dropped.
pub struct GraphicDisplay<I>
where
    I: DisplayInterface,
{
    /// The underlying display driver
    display: Display<I>,
    /// Pixels in physical layout, allocated on first `begin`
    framebuffer: Option<Framebuffer>,
    /// Area changed since the last successful flush
    dirty: DirtyRegion,
    /// Set once `begin` has completed
    initialized: bool,
}

impl<I> GraphicDisplay<I>
where
    I: DisplayInterface,
{
    /// Create a new GraphicDisplay
    ///
    /// Nothing is sent and no memory is allocated until [`begin`](Self::begin).
    pub fn new(display: Display<I>) -> Self {
        Self {
            display,
            framebuffer: None,
            dirty: DirtyRegion::Empty,
            initialized: false,
        }
    }

    /// Allocate the framebuffer, configure the controller and blank the panel
    ///
    /// Can be called again after a failure, or to recover a panel that lost
    /// its configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::Allocation`] if the framebuffer cannot be allocated
    /// - [`Error::Interface`] if the controller cannot be reached
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.initialized = false;

        if self.framebuffer.is_none() {
            let dimensions = self.display.dimensions();
            let framebuffer = Framebuffer::try_new(dimensions).ok_or_else(|| {
                log::warn!(
                    "[UC1609] cannot allocate {} byte framebuffer",
                    dimensions.buffer_size()
                );
                Error::Allocation
            })?;
            self.framebuffer = Some(framebuffer);
        }

        self.display.init(delay)?;
        self.blank();
        self.sync()?;
        self.display.set_enabled(true)?;

        self.initialized = true;
        log::debug!("[UC1609] display ready");
        Ok(())
    }

    /// Whether [`begin`](Self::begin) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn ensure_initialized(&self) -> GraphicsResult<I> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send every dirty page to the controller
    ///
    /// For each page under the dirty rectangle this selects the page and the
    /// first dirty column, then streams the page bytes up to the last dirty
    /// column. Whole pages are sent even when only some of their rows changed.
    ///
    /// # Errors
    ///
    /// On [`Error::Interface`] the dirty rectangle is kept, so calling
    /// `flush` again resends everything that may not have arrived.
    pub fn flush(&mut self) -> GraphicsResult<I> {
        self.ensure_initialized()?;
        self.sync()
    }

    fn sync(&mut self) -> GraphicsResult<I> {
        let Some(framebuffer) = self.framebuffer.as_ref() else {
            return Err(Error::NotInitialized);
        };
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        if let Err(error) = write_rect(&mut self.display, framebuffer, rect) {
            self.dirty.include(rect);
            log::warn!("[UC1609] flush of {rect:?} failed, region kept for retry");
            return Err(error);
        }
        Ok(())
    }

    /// Set or clear a pixel in logical coordinates
    ///
    /// Coordinates outside the rotated canvas are ignored, as are writes
    /// before a successful [`begin`](Self::begin).
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if !self.initialized {
            return;
        }
        let Some((px, py)) = self.to_physical(x, y) else {
            return;
        };
        let Some(framebuffer) = self.framebuffer.as_mut() else {
            return;
        };

        if framebuffer.set(px, py, on) {
            self.dirty.include_point(px, py);
        }
    }

    /// Read a pixel in logical coordinates
    ///
    /// `None` when off the canvas or before a successful [`begin`](Self::begin).
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        if !self.initialized {
            return None;
        }
        let (px, py) = self.to_physical(x, y)?;
        self.framebuffer.as_ref()?.get(px, py)
    }

    fn to_physical(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let logical = self.logical_dimensions();
        if x < 0 || y < 0 || x >= logical.cols() as i32 || y >= logical.rows() as i32 {
            return None;
        }
        Some(apply_rotation(
            x as u16,
            y as u16,
            self.display.dimensions(),
            self.rotation(),
        ))
    }

    /// Zero the framebuffer and mark the whole panel dirty
    pub fn clear_buffer(&mut self) -> GraphicsResult<I> {
        self.ensure_initialized()?;
        self.blank();
        Ok(())
    }

    fn blank(&mut self) {
        if let Some(framebuffer) = self.framebuffer.as_mut() {
            framebuffer.clear();
            self.dirty.mark_all(framebuffer.dimensions());
        }
    }

    /// Set the contrast
    ///
    /// Before [`begin`](Self::begin) the value is only stored, and `begin`
    /// sends it with the rest of the configuration.
    pub fn set_contrast(&mut self, value: u8) -> GraphicsResult<I> {
        if self.initialized {
            self.display.set_contrast(value)
        } else {
            self.display.config_mut().contrast = value;
            Ok(())
        }
    }

    /// Contrast that is, or will be, programmed into the controller
    pub fn contrast(&self) -> u8 {
        self.display.contrast()
    }

    /// Invert the panel in hardware; the framebuffer is untouched
    pub fn invert(&mut self, inverted: bool) -> GraphicsResult<I> {
        self.ensure_initialized()?;
        self.display.invert(inverted)
    }

    /// Turn the panel on or off
    pub fn set_enabled(&mut self, on: bool) -> GraphicsResult<I> {
        self.ensure_initialized()?;
        self.display.set_enabled(on)
    }

    /// Force every pixel on regardless of RAM contents
    pub fn set_all_pixels_on(&mut self, on: bool) -> GraphicsResult<I> {
        self.ensure_initialized()?;
        self.display.set_all_pixels_on(on)
    }

    /// Hardware scroll: show RAM row `line` at the top of the panel
    pub fn set_scroll_line(&mut self, line: u8) -> GraphicsResult<I> {
        self.ensure_initialized()?;
        self.display.set_scroll_line(line)
    }

    /// Change how logical coordinates map onto the panel
    ///
    /// Pixels already in the framebuffer stay where they are.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.display.config_mut().rotation = rotation;
    }

    /// Current logical rotation
    pub fn rotation(&self) -> Rotation {
        self.display.config().rotation
    }

    /// Canvas size as seen by drawing code under the current rotation
    pub fn logical_dimensions(&self) -> Dimensions {
        logical_dimensions(self.display.dimensions(), self.rotation())
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.logical_dimensions().cols()
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.logical_dimensions().rows()
    }

    /// Physical rectangle waiting to be flushed
    pub fn dirty_region(&self) -> Option<Rect> {
        self.dirty.bounds()
    }

    /// Raw framebuffer bytes in controller page layout
    pub fn framebuffer(&self) -> Option<&[u8]> {
        self.framebuffer.as_ref().map(Framebuffer::as_bytes)
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Commands sent this way bypass the framebuffer and dirty tracking.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Drop the framebuffer and return the interface
    pub fn release(self) -> I {
        self.display.release()
    }
}

fn write_rect<I: DisplayInterface>(
    display: &mut Display<I>,
    framebuffer: &Framebuffer,
    rect: Rect,
) -> GraphicsResult<I> {
    for page in rect.pages() {
        display.set_address(page, rect.x_min)?;
        display.write_ram(framebuffer.page_run(page, rect.x_min, rect.x_max))?;
    }
    log::trace!(
        "[UC1609] synced pages {:?} columns {}..={}",
        rect.pages(),
        rect.x_min,
        rect.x_max
    );
    Ok(())
}

#[cfg(feature = "graphics")]
mod draw_target {
    use embedded_graphics_core::{
        Pixel,
        draw_target::DrawTarget,
        geometry::{OriginDimensions, Point, Size},
        pixelcolor::BinaryColor,
    };

    use super::GraphicDisplay;
    use crate::error::Error;
    use crate::interface::DisplayInterface;

    impl<I> DrawTarget for GraphicDisplay<I>
    where
        I: DisplayInterface,
    {
        type Color = BinaryColor;
        type Error = Error<I>;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.ensure_initialized()?;

            for Pixel(Point { x, y }, color) in pixels {
                self.set_pixel(x, y, color.is_on());
            }

            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.ensure_initialized()?;
            let Some(framebuffer) = self.framebuffer.as_mut() else {
                return Err(Error::NotInitialized);
            };

            if color.is_on() {
                framebuffer.fill();
            } else {
                framebuffer.clear();
            }
            self.dirty.mark_all(framebuffer.dimensions());
            Ok(())
        }
    }

    impl<I> OriginDimensions for GraphicDisplay<I>
    where
        I: DisplayInterface,
    {
        fn size(&self) -> Size {
            let logical = self.logical_dimensions();
            Size::new(logical.cols() as u32, logical.rows() as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::display::tests::{MockDelay, MockError, MockInterface, Op};
    use alloc::vec;
    use alloc::vec::Vec;
    use quickcheck_macros::quickcheck;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::Rotate0,
        Rotation::Rotate90,
        Rotation::Rotate180,
        Rotation::Rotate270,
    ];

    fn test_display(rotation: Rotation) -> GraphicDisplay<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(64, 192).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        GraphicDisplay::new(Display::new(MockInterface::default(), config))
    }

    /// A display past `begin`, with the recorded traffic discarded
    fn started(rotation: Rotation) -> GraphicDisplay<MockInterface> {
        let mut display = test_display(rotation);
        display.begin(&mut MockDelay).unwrap();
        interface(&mut display).ops.clear();
        display
    }

    fn interface(display: &mut GraphicDisplay<MockInterface>) -> &mut MockInterface {
        display.display_mut().interface_mut()
    }

    /// Expected traffic for one page run
    fn page_ops(page: u8, column: u8, data: Vec<u8>) -> Vec<Op> {
        vec![
            Op::Command(0xB0 | page),
            Op::Command(column & 0x0F),
            Op::Command(0x10 | (column >> 4)),
            Op::Data(data),
        ]
    }

    fn full_sync(value: u8) -> Vec<Op> {
        (0..8)
            .flat_map(|page| page_ops(page, 0, vec![value; 192]))
            .collect()
    }

    #[test]
    fn test_begin_configures_blanks_and_enables() {
        let mut display = test_display(Rotation::Rotate0);
        display.begin(&mut MockDelay).unwrap();
        assert!(display.is_initialized());

        let ops = &interface(&mut display).ops;
        // Configuration script, then a full blank sync, then display on
        assert_eq!(ops.len(), 11 + 8 * 4 + 1);
        assert_eq!(&ops[11..11 + 32], full_sync(0).as_slice());
        assert_eq!(ops.last(), Some(&Op::Command(0xAF)));

        assert_eq!(display.framebuffer().map(<[u8]>::len), Some(192 * 8));
        assert_eq!(display.dirty_region(), None);
    }

    #[test]
    fn test_operations_before_begin() {
        let mut display = test_display(Rotation::Rotate0);

        assert!(matches!(display.flush(), Err(Error::NotInitialized)));
        assert!(matches!(display.clear_buffer(), Err(Error::NotInitialized)));
        assert!(matches!(display.invert(true), Err(Error::NotInitialized)));
        assert!(matches!(display.set_enabled(true), Err(Error::NotInitialized)));
        assert!(matches!(display.set_scroll_line(1), Err(Error::NotInitialized)));

        display.set_pixel(1, 1, true);
        assert_eq!(display.pixel(1, 1), None);
        assert_eq!(display.dirty_region(), None);
        assert!(interface(&mut display).ops.is_empty());
    }

    #[test]
    fn test_failed_begin_can_be_retried() {
        let mut display = test_display(Rotation::Rotate0);
        interface(&mut display).fail_after = Some(3);
        assert!(matches!(
            display.begin(&mut MockDelay),
            Err(Error::Interface(MockError))
        ));
        assert!(!display.is_initialized());
        assert!(matches!(display.flush(), Err(Error::NotInitialized)));

        // The framebuffer survives the failure but stays out of reach
        assert!(display.framebuffer().is_some());
        display.set_pixel(1, 1, true);
        assert_eq!(display.pixel(1, 1), None);
        assert_eq!(display.dirty_region(), None);

        interface(&mut display).fail_after = None;
        interface(&mut display).ops.clear();
        display.begin(&mut MockDelay).unwrap();
        assert!(display.is_initialized());
    }

    #[test]
    fn test_flush_sends_only_dirty_pages() {
        let mut display = started(Rotation::Rotate0);
        display.set_pixel(2, 9, true);
        display.set_pixel(5, 20, true);
        assert_eq!(
            display.dirty_region(),
            Some(Rect {
                x_min: 2,
                x_max: 5,
                y_min: 9,
                y_max: 20
            })
        );

        display.flush().unwrap();

        let mut expected = page_ops(1, 2, vec![0x02, 0x00, 0x00, 0x00]);
        expected.extend(page_ops(2, 2, vec![0x00, 0x00, 0x00, 0x10]));
        assert_eq!(interface(&mut display).ops, expected);
    }

    #[test]
    fn test_second_flush_is_silent() {
        let mut display = started(Rotation::Rotate0);
        display.set_pixel(100, 40, true);
        display.flush().unwrap();
        assert_eq!(display.dirty_region(), None);

        interface(&mut display).ops.clear();
        display.flush().unwrap();
        assert!(interface(&mut display).ops.is_empty());
    }

    #[test]
    fn test_column_high_nibble() {
        let mut display = started(Rotation::Rotate0);
        display.set_pixel(0xB5, 0, true);
        display.flush().unwrap();
        assert_eq!(
            interface(&mut display).ops,
            page_ops(0, 0xB5, vec![0x01])
        );
    }

    #[test]
    fn test_clear_syncs_every_cell_once_with_zero() {
        let mut display = started(Rotation::Rotate0);
        display.set_pixel(7, 7, true);
        display.flush().unwrap();
        interface(&mut display).ops.clear();

        display.clear_buffer().unwrap();
        display.flush().unwrap();
        assert_eq!(interface(&mut display).ops, full_sync(0));
    }

    #[test]
    fn test_failed_flush_keeps_region_for_retry() {
        let mut display = started(Rotation::Rotate0);
        display.set_pixel(2, 9, true);
        display.set_pixel(5, 20, true);
        let region = display.dirty_region();

        // Page 1 goes out, page 2 fails on its column high nibble
        interface(&mut display).fail_after = Some(6);
        assert!(matches!(display.flush(), Err(Error::Interface(MockError))));
        assert_eq!(display.dirty_region(), region);

        interface(&mut display).fail_after = None;
        interface(&mut display).ops.clear();
        display.flush().unwrap();

        let mut expected = page_ops(1, 2, vec![0x02, 0x00, 0x00, 0x00]);
        expected.extend(page_ops(2, 2, vec![0x00, 0x00, 0x00, 0x10]));
        assert_eq!(interface(&mut display).ops, expected);
        assert_eq!(display.dirty_region(), None);
    }

    #[test]
    fn test_writes_after_failed_flush_are_merged() {
        let mut display = started(Rotation::Rotate0);
        display.set_pixel(10, 0, true);
        interface(&mut display).fail_after = Some(0);
        assert!(display.flush().is_err());

        display.set_pixel(20, 30, true);
        assert_eq!(
            display.dirty_region(),
            Some(Rect {
                x_min: 10,
                x_max: 20,
                y_min: 0,
                y_max: 30
            })
        );
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut display = started(Rotation::Rotate0);
        let before = display.framebuffer().unwrap().to_vec();

        display.set_pixel(-1, 0, true);
        display.set_pixel(0, -1, true);
        display.set_pixel(192, 0, true);
        display.set_pixel(0, 64, true);

        // Inside the physical panel but outside the rotated canvas
        display.set_rotation(Rotation::Rotate90);
        display.set_pixel(64, 0, true);
        display.set_pixel(0, 192, true);

        assert_eq!(display.framebuffer().unwrap(), before.as_slice());
        assert_eq!(display.dirty_region(), None);
    }

    #[test]
    fn test_logical_origin_lands_on_rotated_corner() {
        // (rotation, framebuffer index, bit)
        let cases = [
            (Rotation::Rotate0, 0, 0x01),
            (Rotation::Rotate90, 7 * 192, 0x80),
            (Rotation::Rotate180, 7 * 192 + 191, 0x80),
            (Rotation::Rotate270, 191, 0x01),
        ];

        for (rotation, index, bit) in cases {
            let mut display = started(rotation);
            display.set_pixel(0, 0, true);
            display.flush().unwrap();

            let framebuffer = display.framebuffer().unwrap();
            assert_eq!(framebuffer[index], bit, "{rotation:?}");
            assert_eq!(
                framebuffer.iter().filter(|b| **b != 0).count(),
                1,
                "{rotation:?}"
            );
            assert_eq!(
                interface(&mut display).ops.last(),
                Some(&Op::Data(vec![bit])),
                "{rotation:?}"
            );
        }
    }

    #[test]
    fn test_all_logical_corners_fill_all_physical_corners() {
        for rotation in ROTATIONS {
            let mut display = started(rotation);
            let (w, h) = (display.width() as i32, display.height() as i32);
            for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                display.set_pixel(x, y, true);
            }
            display.flush().unwrap();

            let framebuffer = display.framebuffer().unwrap();
            assert_eq!(framebuffer[0], 0x01, "{rotation:?}");
            assert_eq!(framebuffer[191], 0x01, "{rotation:?}");
            assert_eq!(framebuffer[7 * 192], 0x80, "{rotation:?}");
            assert_eq!(framebuffer[7 * 192 + 191], 0x80, "{rotation:?}");
            assert_eq!(display.dirty_region(), None);
        }
    }

    #[test]
    fn test_rotation_swaps_logical_size() {
        let mut display = test_display(Rotation::Rotate0);
        assert_eq!((display.width(), display.height()), (192, 64));
        display.set_rotation(Rotation::Rotate270);
        assert_eq!((display.width(), display.height()), (64, 192));
    }

    #[test]
    fn test_contrast_before_begin_is_sent_by_begin() {
        let mut display = test_display(Rotation::Rotate0);
        display.set_contrast(0x30).unwrap();
        assert!(interface(&mut display).ops.is_empty());
        assert_eq!(display.contrast(), 0x30);

        display.begin(&mut MockDelay).unwrap();
        let commands = interface(&mut display).commands();
        assert_eq!(&commands[4..6], &[0x81, 0x30]);
    }

    #[test]
    fn test_contrast_after_begin_is_sent_immediately() {
        let mut display = started(Rotation::Rotate0);
        display.set_contrast(0x55).unwrap();
        assert_eq!(
            interface(&mut display).ops,
            vec![Op::Command(0x81), Op::Command(0x55)]
        );
        assert_eq!(display.contrast(), 0x55);
    }

    #[test]
    fn test_begin_twice_keeps_framebuffer_and_resyncs() {
        let mut display = started(Rotation::Rotate0);
        display.set_pixel(3, 3, true);
        display.begin(&mut MockDelay).unwrap();
        assert_eq!(display.pixel(3, 3), Some(false));
        assert_eq!(&interface(&mut display).ops[11..11 + 32], full_sync(0).as_slice());
    }

    #[test]
    fn test_invert_and_scroll_do_not_touch_framebuffer() {
        let mut display = started(Rotation::Rotate0);
        display.invert(true).unwrap();
        display.set_scroll_line(8).unwrap();
        display.set_all_pixels_on(false).unwrap();
        assert_eq!(interface(&mut display).commands(), vec![0xA7, 0x48, 0xA4]);
        assert_eq!(display.dirty_region(), None);
    }

    #[quickcheck]
    fn prop_pixel_round_trip(x: u16, y: u16, rotation: u8, on: bool) -> bool {
        let rotation = ROTATIONS[rotation as usize % 4];
        let mut display = started(rotation);
        if !on {
            // Start from a lit panel so clearing is observable
            for py in 0..display.height() as i32 {
                for px in 0..display.width() as i32 {
                    display.set_pixel(px, py, true);
                }
            }
        }
        let x = (x % display.width()) as i32;
        let y = (y % display.height()) as i32;

        display.set_pixel(x, y, on);
        display.pixel(x, y) == Some(on)
    }

    #[quickcheck]
    fn prop_dirty_region_is_bounding_box_of_physical_writes(
        points: Vec<(u8, u8)>,
        rotation: u8,
    ) -> bool {
        let rotation = ROTATIONS[rotation as usize % 4];
        let mut display = started(rotation);
        let dims = display.display().dimensions();
        let (w, h) = (display.width(), display.height());

        let mut expected = DirtyRegion::Empty;
        for &(x, y) in &points {
            let (x, y) = (x as u16 % w, y as u16 % h);
            display.set_pixel(x as i32, y as i32, true);
            let (px, py) = apply_rotation(x, y, dims, rotation);
            expected.include_point(px, py);
        }
        display.dirty_region() == expected.bounds()
    }

    #[quickcheck]
    fn prop_out_of_range_is_a_no_op(x: i32, y: i32, rotation: u8) -> bool {
        let rotation = ROTATIONS[rotation as usize % 4];
        let mut display = started(rotation);
        let (w, h) = (display.width() as i32, display.height() as i32);
        if (0..w).contains(&x) && (0..h).contains(&y) {
            return true;
        }

        display.set_pixel(x, y, true);
        display.dirty_region().is_none() && display.framebuffer().unwrap().iter().all(|b| *b == 0)
    }

    #[cfg(feature = "graphics")]
    mod draw_target {
        use super::*;
        use embedded_graphics_core::{
            Pixel,
            draw_target::DrawTarget,
            geometry::{OriginDimensions, Point, Size},
            pixelcolor::BinaryColor,
        };

        #[test]
        fn test_size_follows_rotation() {
            let mut display = test_display(Rotation::Rotate0);
            assert_eq!(display.size(), Size::new(192, 64));
            display.set_rotation(Rotation::Rotate90);
            assert_eq!(display.size(), Size::new(64, 192));
        }

        #[test]
        fn test_draw_before_begin_fails() {
            let mut display = test_display(Rotation::Rotate0);
            let result = display.draw_iter([Pixel(Point::new(0, 0), BinaryColor::On)]);
            assert!(matches!(result, Err(Error::NotInitialized)));
        }

        #[test]
        fn test_draw_after_failed_begin_fails() {
            let mut display = test_display(Rotation::Rotate0);
            interface(&mut display).fail_after = Some(0);
            assert!(display.begin(&mut MockDelay).is_err());

            let result = display.draw_iter([Pixel(Point::new(1, 1), BinaryColor::On)]);
            assert!(matches!(result, Err(Error::NotInitialized)));
            assert!(matches!(
                DrawTarget::clear(&mut display, BinaryColor::On),
                Err(Error::NotInitialized)
            ));
            assert_eq!(display.pixel(1, 1), None);
            assert!(display.framebuffer().unwrap().iter().all(|b| *b == 0));
        }

        #[test]
        fn test_draw_iter_clips_and_sets() {
            let mut display = started(Rotation::Rotate0);
            display
                .draw_iter([
                    Pixel(Point::new(4, 4), BinaryColor::On),
                    Pixel(Point::new(-4, 4), BinaryColor::On),
                    Pixel(Point::new(4, 400), BinaryColor::On),
                ])
                .unwrap();
            assert_eq!(display.pixel(4, 4), Some(true));
            assert_eq!(display.dirty_region(), Some(Rect::point(4, 4)));
        }

        #[test]
        fn test_clear_on_fills_and_marks_everything() {
            let mut display = started(Rotation::Rotate0);
            DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
            display.flush().unwrap();
            assert_eq!(interface(&mut display).ops, full_sync(0xFF));
        }
    }
}
