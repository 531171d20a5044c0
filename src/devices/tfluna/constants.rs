//! Constants for the Benewake TF-Luna (register map and UART protocol)

// I2C defaults
pub const DEFAULT_I2C_BUS: u8 = 1;
pub const DEFAULT_I2C_ADDR: u16 = 0x10;

// Register map (per Benewake TF-Luna manual)
pub const REG_DIST_LOW: u8 = 0x00; // Distance low byte (cm)
pub const REG_DIST_HIGH: u8 = 0x01; // Distance high byte
pub const REG_AMP_LOW: u8 = 0x02; // Signal amplitude low byte
pub const REG_AMP_HIGH: u8 = 0x03; // Signal amplitude high byte
pub const REG_TEMP_LOW: u8 = 0x04; // Temperature low byte
pub const REG_TEMP_HIGH: u8 = 0x05; // Temperature high byte

// UART data frames: [0x59 0x59] [DIST_L DIST_H] [AMP_L AMP_H] [TEMP_L TEMP_H] [SUM]
pub const FRAME_HEADER: u8 = 0x59;
pub const FRAME_LEN: usize = 9;

// UART command frames: [0x5A] [LEN] [ID] [PAYLOAD] [SUM]
pub const CMD_HEADER: u8 = 0x5A;
pub const CMD_ID_VERSION: u8 = 0x01;
pub const CMD_ID_SAMPLE_RATE: u8 = 0x03;
pub const VERSION_REPLY_LEN: usize = 7;

// UART defaults and limits
pub const DEFAULT_BAUD_RATE: u32 = 115200;
pub const DEFAULT_SAMPLE_RATE_HZ: u16 = 100;
pub const SAMPLE_RATE_MIN_HZ: u16 = 1;
pub const SAMPLE_RATE_MAX_HZ: u16 = 250;

// Parser buffer cap
pub const MAX_BUFFER_SIZE: usize = 4096;
