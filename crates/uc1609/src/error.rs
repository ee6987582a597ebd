//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Pixel writes outside the canvas are not errors; they are dropped silently.
//!
//! ## Example
//!
//! ```
//! use uc1609::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(64, 500); // Too many columns
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum common outputs (rows) supported by the UC1609 controller
pub const MAX_ROWS: u16 = 64;

/// Maximum segment outputs (columns) supported by the UC1609 controller
pub const MAX_COLUMNS: u16 = 192;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying transport error from the [`DisplayInterface`]
    /// implementation. A failed flush keeps its dirty region, so the same
    /// call can simply be retried.
    Interface(I::Error),
    /// The framebuffer could not be allocated
    Allocation,
    /// The operation needs a successful `begin` first
    NotInitialized,
}

// Only the interface error needs Debug, not the interface itself
impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Error::Allocation => f.write_str("Allocation"),
            Error::NotInitialized => f.write_str("NotInitialized"),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::Allocation => write!(f, "Framebuffer allocation failed"),
            Error::NotInitialized => write!(f, "Display not initialized"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::MissingDimensions => write!(f, "Dimensions must be specified"),
            BuilderError::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_ROWS}x{MAX_COLUMNS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
