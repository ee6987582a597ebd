// UC1609 command definitions
//
// Most commands carry their argument in the low bits of the opcode itself,
// so callers OR the value in before sending.

// Reset and power
pub const SYSTEM_RESET: u8 = 0xE2; // System reset
pub const POWER_CONTROL: u8 = 0x28; // Power control, PC[2:0]
pub const PC_INTERNAL_VLCD: u8 = 0x06; // Internal VLCD (7x charge pump), 1.4mA

// RAM addressing
pub const ADDRESS_CONTROL: u8 = 0x88; // RAM address control, AC[2:0]
pub const AC_AUTO_INCREMENT: u8 = 0x02; // Column first, then page; increment by one
pub const SET_PAGE_ADDRESS: u8 = 0xB0; // Page address PA[3:0]
pub const SET_COLUMN_LSB: u8 = 0x00; // Column address CA[3:0]
pub const SET_COLUMN_MSB: u8 = 0x10; // Column address CA[7:4]

// Panel driving
pub const TEMP_COMPENSATION: u8 = 0x24; // Temperature compensation, TC[1:0]
pub const TC_DEFAULT: u8 = 0x03; // TC[1:0] = 11b
pub const FRAME_RATE: u8 = 0xA0; // Frame rate, LC[4:3]
pub const FRAME_RATE_95HZ: u8 = 0x01; // 95 fps
pub const BIAS_RATIO: u8 = 0xE8; // Bias ratio, BR[1:0]
pub const BIAS_RATIO_DEFAULT: u8 = 0x03; // 11b
pub const SET_VBIAS_POT: u8 = 0x81; // VBIAS potentiometer (double-byte command)
pub const DEFAULT_VBIAS_POT: u8 = 0x49; // Contrast used when none is configured

// Display control
pub const LCD_MAPPING: u8 = 0xC0; // LCD mapping control, low bits MY MX LC0
pub const DISPLAY_ENABLE: u8 = 0xAE; // Display enable, bit 0
pub const ALL_PIXEL_ON: u8 = 0xA4; // Force all pixels on, bit 0
pub const INVERSE_DISPLAY: u8 = 0xA6; // Inverse display, bit 0
pub const SCROLL_LINE: u8 = 0x40; // Scroll line SL[5:0]
