//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

use crate::command::{
    AC_AUTO_INCREMENT, BIAS_RATIO_DEFAULT, DEFAULT_VBIAS_POT, FRAME_RATE_95HZ, PC_INTERNAL_VLCD,
    SET_COLUMN_LSB, SET_COLUMN_MSB, SET_PAGE_ADDRESS, TC_DEFAULT,
};

/// Rows per controller page
pub const PAGE_HEIGHT: u16 = 8;

/// Display dimensions
///
/// Only obtainable through [`Dimensions::new`] or [`Default`], so every
/// value fits the controller's address range:
///
/// ```compile_fail
/// let dims = uc1609::Dimensions { rows: 0, cols: 192 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    rows: u16,
    cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows is 0 or rows > MAX_ROWS
    /// - cols is 0 or cols > MAX_COLUMNS
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (height in pixels, corresponds to common outputs)
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of 8-row pages, rounding a partial last page up
    pub fn pages(&self) -> u16 {
        self.rows.div_ceil(PAGE_HEIGHT)
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.cols as usize * self.pages() as usize
    }
}

impl Default for Dimensions {
    /// The 192x64 panel the controller is usually sold with
    fn default() -> Self {
        Self {
            rows: MAX_ROWS,
            cols: MAX_COLUMNS,
        }
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Segment/common scan direction written to the LCD mapping register
///
/// The panel's natural orientation depends on how the glass is bonded to the
/// controller; most 192x64 modules want [`ScanMirror::Y`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ScanMirror {
    /// MX = 0, MY = 0
    None = 0x00,
    /// MX = 1
    X = 0x02,
    /// MY = 1
    #[default]
    Y = 0x04,
    /// MX = 1, MY = 1
    XY = 0x06,
}

/// Opcodes of the three RAM addressing registers
///
/// Each register takes its argument in the low nibble of the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressRegisters {
    /// Page address opcode (PA[3:0])
    pub page: u8,
    /// Column address low nibble opcode (CA[3:0])
    pub column_low: u8,
    /// Column address high nibble opcode (CA[7:4])
    pub column_high: u8,
}

impl Default for AddressRegisters {
    fn default() -> Self {
        Self {
            page: SET_PAGE_ADDRESS,
            column_low: SET_COLUMN_LSB,
            column_high: SET_COLUMN_MSB,
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the UC1609 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Initial display rotation
    pub rotation: Rotation,
    /// Initial contrast (VBIAS potentiometer value)
    pub contrast: u8,
    /// Temperature compensation bits TC[1:0]
    pub temp_compensation: u8,
    /// Power control bits PC[2:0]
    pub power_control: u8,
    /// Bias ratio bits BR[1:0]
    pub bias_ratio: u8,
    /// RAM address control bits AC[2:0]
    pub address_control: u8,
    /// Frame rate bits LC[4:3]
    pub frame_rate: u8,
    /// LCD mapping (MX/MY)
    pub scan_mirror: ScanMirror,
    /// RAM addressing register opcodes
    pub addressing: AddressRegisters,
}

impl Config {
    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        logical_dimensions(self.dimensions, self.rotation)
    }
}

/// Dimensions as seen by drawing code under `rotation`
///
/// Quarter turns swap the axes, so the result may have more than
/// [`MAX_ROWS`] rows.
pub fn logical_dimensions(dimensions: Dimensions, rotation: Rotation) -> Dimensions {
    match rotation {
        Rotation::Rotate0 | Rotation::Rotate180 => dimensions,
        Rotation::Rotate90 | Rotation::Rotate270 => Dimensions {
            rows: dimensions.cols,
            cols: dimensions.rows,
        },
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use uc1609::{Builder, Dimensions, Rotation};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::new(64, 192).unwrap())
///     .rotation(Rotation::Rotate180)
///     .contrast(0x40)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.contrast, 0x40);
/// ```
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    rotation: Rotation,
    contrast: u8,
    temp_compensation: u8,
    power_control: u8,
    bias_ratio: u8,
    address_control: u8,
    frame_rate: u8,
    scan_mirror: ScanMirror,
    addressing: AddressRegisters,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            dimensions: None,
            rotation: Rotation::Rotate0,
            contrast: DEFAULT_VBIAS_POT,
            temp_compensation: TC_DEFAULT,
            // Internal charge pump
            power_control: PC_INTERNAL_VLCD,
            bias_ratio: BIAS_RATIO_DEFAULT,
            // Column autoincrement within a page; the sync protocol depends on it
            address_control: AC_AUTO_INCREMENT,
            frame_rate: FRAME_RATE_95HZ,
            scan_mirror: ScanMirror::Y,
            addressing: AddressRegisters::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set initial contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set temperature compensation (TC[1:0])
    pub fn temp_compensation(mut self, value: u8) -> Self {
        self.temp_compensation = value & 0x03;
        self
    }

    /// Set power control (PC[2:0])
    pub fn power_control(mut self, value: u8) -> Self {
        self.power_control = value & 0x07;
        self
    }

    /// Set bias ratio (BR[1:0])
    pub fn bias_ratio(mut self, value: u8) -> Self {
        self.bias_ratio = value & 0x03;
        self
    }

    /// Set RAM address control (AC[2:0])
    pub fn address_control(mut self, value: u8) -> Self {
        self.address_control = value & 0x07;
        self
    }

    /// Set frame rate (LC[4:3])
    pub fn frame_rate(mut self, value: u8) -> Self {
        self.frame_rate = value & 0x03;
        self
    }

    /// Set LCD mapping
    pub fn scan_mirror(mut self, mirror: ScanMirror) -> Self {
        self.scan_mirror = mirror;
        self
    }

    /// Override the RAM addressing opcodes
    pub fn addressing(mut self, registers: AddressRegisters) -> Self {
        self.addressing = registers;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            contrast: self.contrast,
            temp_compensation: self.temp_compensation,
            power_control: self.power_control,
            bias_ratio: self.bias_ratio,
            address_control: self.address_control,
            frame_rate: self.frame_rate,
            scan_mirror: self.scan_mirror,
            addressing: self.addressing,
        })
    }
}
