//! Unified error type for motor-menu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! The menu core itself is total and never returns these; they only
//! surface at the collaborator edges (event producers, display drivers).

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Input
    /// The event queue is at capacity; the event was dropped.
    EventQueueFull,

    // Display
    /// A write addressed a character cell outside the display grid.
    CursorOutOfRange { column: u8, row: u8 },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EventQueueFull => f.write_str("event queue full"),
            Error::CursorOutOfRange { column, row } => {
                write!(f, "cursor ({}, {}) outside display", column, row)
            }
        }
    }
}
