//! GPIO / peripheral pin assignments for the M5StickC.
//!
//! Single source of truth: `main` references this module rather than
//! hard-coding pin numbers.  The esp-idf-hal pin objects are still taken
//! by field name; these constants document and log the wiring.

// ---------------------------------------------------------------------------
// Buttons (active-low, external pull-up, input-only pads)
// ---------------------------------------------------------------------------

/// Button A, front face: cycles views.
pub const BUTTON_A_GPIO: i32 = 37;
/// Button B, right side: completes the routine.
pub const BUTTON_B_GPIO: i32 = 39;

// ---------------------------------------------------------------------------
// Indicator LED (red, active low)
// ---------------------------------------------------------------------------

pub const LED_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Internal I²C bus: MPU6886 IMU + AXP192 PMIC
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 22;
pub const I2C_FREQ_HZ: u32 = 400_000;

// ---------------------------------------------------------------------------
// ST7735S LCD (SPI, write-only)
// ---------------------------------------------------------------------------

pub const LCD_MOSI_GPIO: i32 = 15;
pub const LCD_SCLK_GPIO: i32 = 13;
pub const LCD_DC_GPIO: i32 = 23;
pub const LCD_CS_GPIO: i32 = 5;
pub const LCD_RST_GPIO: i32 = 18;
pub const LCD_SPI_FREQ_HZ: u32 = 27_000_000;

/// Native panel size (portrait).
pub const LCD_WIDTH: u16 = 80;
pub const LCD_HEIGHT: u16 = 160;
/// Panel RAM offset of the visible 80×160 window.
pub const LCD_OFFSET_X: u16 = 26;
pub const LCD_OFFSET_Y: u16 = 1;
