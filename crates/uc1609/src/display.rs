//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    ADDRESS_CONTROL, ALL_PIXEL_ON, BIAS_RATIO, DISPLAY_ENABLE, FRAME_RATE, INVERSE_DISPLAY,
    LCD_MAPPING, POWER_CONTROL, SCROLL_LINE, SET_VBIAS_POT, SYSTEM_RESET, TEMP_COMPENSATION,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the UC1609
///
/// This struct provides low-level operations for the UC1609 controller.
/// For a framebuffer with dirty tracking, use
/// [`GraphicDisplay`](crate::graphics::GraphicDisplay).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Perform hardware reset and run the configuration script
    ///
    /// Safe to call again; the controller ends up in the same state.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay);

        let config = &self.config;
        let script = [
            TEMP_COMPENSATION | config.temp_compensation,
            SCROLL_LINE,
            POWER_CONTROL | config.power_control,
            BIAS_RATIO | config.bias_ratio,
            SET_VBIAS_POT,
            config.contrast,
            ADDRESS_CONTROL | config.address_control,
            FRAME_RATE | config.frame_rate,
            LCD_MAPPING | config.scan_mirror as u8,
            INVERSE_DISPLAY,
            ALL_PIXEL_ON,
        ];

        for command in script {
            self.send_command(command)?;
        }

        log::debug!(
            "[UC1609] configured {}x{} panel",
            self.config.dimensions.cols(),
            self.config.dimensions.rows()
        );
        Ok(())
    }

    /// Issue a system reset and wait for the controller to settle
    ///
    /// Registers return to their power-on values; [`init`](Self::init)
    /// must run again afterwards.
    pub fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SYSTEM_RESET)?;
        delay.delay_ms(5);
        Ok(())
    }

    /// Write the VBIAS potentiometer (contrast)
    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        // Both bytes go out on the command channel
        self.send_command(SET_VBIAS_POT)?;
        self.send_command(value)?;
        self.config.contrast = value;
        Ok(())
    }

    /// Contrast last written or configured
    pub fn contrast(&self) -> u8 {
        self.config.contrast
    }

    /// Turn the panel on or off; display RAM is kept
    pub fn set_enabled(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(DISPLAY_ENABLE | on as u8)
    }

    /// Invert every pixel in hardware
    pub fn invert(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(INVERSE_DISPLAY | inverted as u8)
    }

    /// Force every pixel on, ignoring display RAM
    pub fn set_all_pixels_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(ALL_PIXEL_ON | on as u8)
    }

    /// Set the first RAM row shown at the top of the panel
    ///
    /// Lines past the panel height wrap around.
    pub fn set_scroll_line(&mut self, line: u8) -> DisplayResult<I> {
        let line = (line as u16 % self.config.dimensions.rows()) as u8;
        self.send_command(SCROLL_LINE | (line & 0x3F))
    }

    /// Point the RAM address at `page`, column `column`
    pub fn set_address(&mut self, page: u16, column: u16) -> DisplayResult<I> {
        let registers = self.config.addressing;
        self.send_command(registers.page | (page as u8 & 0x0F))?;
        self.send_command(registers.column_low | (column as u8 & 0x0F))?;
        self.send_command(registers.column_high | ((column as u8 & 0xF0) >> 4))?;
        Ok(())
    }

    /// Stream bytes into display RAM at the current address
    pub fn write_ram(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.send_data(data)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}
