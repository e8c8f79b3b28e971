//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and menu limits
//! live here so they can be tuned in one place.

// Timing

/// Hardware tick period (microseconds). One SysTick interrupt = 1 ms.
pub const TICK_PERIOD_US: u32 = 1_000;

/// Number of drained ticks between two menu evaluation steps.
/// 500 ticks × 1 ms = one evaluation every 500 ms.
pub const MENU_EVAL_PERIOD_TICKS: u32 = 500;

// Menu limits

/// Number of motors the menu can address.
pub const MOTOR_COUNT: usize = 2;

/// Highest motor selection index (motor 1 = 0, motor 2 = 1).
pub const MOTOR_SELECT_MAX: u8 = 1;

/// Highest parameter selection index (power = 0, speed = 1, spin = 2).
pub const PARAM_SELECT_MAX: u8 = 2;

/// Power is on/off.
pub const POWER_MAX: u8 = 1;

/// Speed steps 0..=9.
pub const SPEED_MAX: u8 = 9;

/// Spin direction (0 = forward, 1 = reverse).
pub const SPIN_MAX: u8 = 1;

// Input

/// Maximum number of UI events buffered between the button tasks and the menu.
pub const EVENT_QUEUE_CAPACITY: usize = 16;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// Display

/// HD44780 16x2 character LCD.
pub const DISPLAY_COLUMNS: u8 = 16;
pub const DISPLAY_ROWS: u8 = 2;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// picked in `main.rs`.  Adjust for your custom board.
//
//   Button NEXT    → P0.11
//   Button ENTER   → P0.12
//   Button ESCAPE  → P0.24
//   LCD RS         → P1.01
//   LCD EN         → P1.02
//   LCD D4..D7     → P1.03, P1.04, P1.05, P1.06
//   Status LED     → P0.13
