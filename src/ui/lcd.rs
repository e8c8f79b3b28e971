//! HD44780 16x2 character LCD on a 4-bit GPIO bus.
//!
//! Only writes are used (R/W tied to ground), so busy-flag polling is
//! replaced by the datasheet's worst-case delays.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use motor_menu::display::{check_cursor, CharDisplay};

// Commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INC: u8 = 0x06; // increment cursor, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off, blink off
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28; // 4-bit bus, 2 lines, 5x8 dots
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first cell of row 1.
const ROW1_OFFSET: u8 = 0x40;

pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    /// Run the 4-bit initialisation-by-instruction sequence.
    pub fn init(&mut self) {
        self.delay.delay_ms(50);

        // Three 8-bit "function set" nibbles, then switch to 4-bit.
        self.write_nibble(0x03, false);
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false);
        self.delay.delay_us(100);
        self.write_nibble(0x03, false);
        self.delay.delay_us(100);
        self.write_nibble(0x02, false);
        self.delay.delay_us(100);

        self.command(CMD_FUNCTION_4BIT_2LINE);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_ENTRY_MODE_INC);
        self.command(CMD_CLEAR);
        self.delay.delay_ms(2);
        self.command(CMD_SET_DDRAM);
    }

    fn command(&mut self, cmd: u8) {
        self.write_byte(cmd, false);
    }

    fn write_byte(&mut self, byte: u8, rs: bool) {
        self.write_nibble(byte >> 4, rs);
        self.write_nibble(byte & 0x0F, rs);
        // Longest non-clear instruction takes 37 µs.
        self.delay.delay_us(50);
    }

    fn write_nibble(&mut self, nibble: u8, rs: bool) {
        drive(&mut self.rs, rs.into());
        for (bit, pin) in self.data.iter_mut().enumerate() {
            drive(pin, (nibble & (1 << bit) != 0).into());
        }

        drive(&mut self.en, PinState::High);
        self.delay.delay_us(1);
        drive(&mut self.en, PinState::Low);
        self.delay.delay_us(1);
    }
}

/// GPIO writes on the nRF cannot fail.
fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, state: PinState) {
    match pin.set_state(state) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

impl<P, D> CharDisplay for Hd44780<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    fn set_cursor(&mut self, column: u8, row: u8) {
        if let Err(e) = check_cursor(column, row) {
            defmt::warn!("LCD: {}", e);
            return;
        }
        let offset = if row == 0 { 0 } else { ROW1_OFFSET };
        self.command(CMD_SET_DDRAM | (offset + column));
    }

    fn write_text(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_byte(byte, true);
        }
    }

    fn clear(&mut self) {
        self.command(CMD_CLEAR);
        self.delay.delay_ms(2);
    }
}
