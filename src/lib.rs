//! Interactive motor menu for a 16x2 character LCD.
//!
//! This library holds all of the menu logic - tick gate, event queue,
//! state machine, rendering - as plain `no_std` code that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test` (host), `cargo build --release --features embedded`
//! (firmware).
//!
//! Note: The embedded binary in main.rs adds board bring-up, the SysTick
//! tick source, the HD44780 driver and the button tasks on top of this
//! crate.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod menu;
pub mod motor;
pub mod task;
pub mod tick;

pub use display::{CharDisplay, TextDisplay};
pub use error::Error;
pub use event::{EventQueue, EventSource, MenuEvent};
pub use menu::{MenuContext, MenuState};
pub use motor::{MotorParam, MotorRecord, MotorStore};
pub use task::MenuTask;
pub use tick::{EvalTimer, TickCounter};
