//! UC1609 LCD Driver
//!
//! A driver for the UC1609 monochrome dot-matrix LCD controller, found on
//! 192x64 pixel modules.
//!
//! ## Features
//!
//! - `no_std` compatible (needs `alloc` for the framebuffer)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Dirty rectangle tracking: a flush only sends the pages that changed
//! - Rotation support
//! - Contrast, inversion and hardware scroll control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use uc1609::{Builder, Dimensions, Display, GraphicDisplay, Interface, Rotation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let dims = match Dimensions::new(64, 192) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate180).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = GraphicDisplay::new(Display::new(interface, config));
//! if display.begin(&mut delay).is_err() {
//!     return;
//! }
//! display.set_pixel(10, 10, true);
//! let _ = display.flush();
//! ```

#![no_std]

extern crate alloc;

/// UC1609 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Dirty rectangle tracking
pub mod dirty;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Packed 1-bit framebuffer
pub mod framebuffer;
/// Framebuffer-backed display and embedded-graphics support
pub mod graphics;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;

pub use config::{
    AddressRegisters, Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, PAGE_HEIGHT, Rotation,
    ScanMirror,
};
pub use dirty::{DirtyRegion, Rect};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use graphics::GraphicDisplay;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
