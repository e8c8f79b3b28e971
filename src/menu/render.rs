//! Screen layouts for the 16x2 display.
//!
//! ```text
//!   0         1
//!   0123456789012345
//!  +----------------+
//! 0|Motor 1:  P S D |  main menu: power, speed, spin per motor
//! 1|Motor 2:  P S D |
//!  +----------------+
//! 0|Enter/Next/Esc:N|  sub-menus: key hint + selected motor id
//! 1|Speed           |  item label or edited value
//!  +----------------+
//! ```

use core::fmt::Write;

use heapless::String;

use crate::display::CharDisplay;
use crate::motor::{MotorParam, MotorRecord};

const HINT_MOTOR_SELECT: &str = "Enter/Next/Esc";
const HINT_SUBMENU: &str = "Enter/Next/Esc:";

/// Main menu column of power; speed and spin follow two columns apart.
const FIRST_VALUE_COLUMN: u8 = 10;
const MOTOR_ID_COLUMN: u8 = 6;
const HEADER_ID_COLUMN: u8 = 15;

fn write_number<D: CharDisplay>(display: &mut D, column: u8, row: u8, value: u8) {
    let mut text: String<4> = String::new();
    // Three digits always fit.
    let _ = write!(text, "{}", value);
    display.set_cursor(column, row);
    display.write_text(&text);
}

fn write_at<D: CharDisplay>(display: &mut D, column: u8, row: u8, text: &str) {
    display.set_cursor(column, row);
    display.write_text(text);
}

fn submenu_header<D: CharDisplay>(display: &mut D, motor_id: u8) {
    write_at(display, 0, 0, HINT_SUBMENU);
    write_number(display, HEADER_ID_COLUMN, 0, motor_id);
}

/// Both motors, one per row.
pub fn main_menu<'a, D, I>(display: &mut D, motors: I)
where
    D: CharDisplay,
    I: IntoIterator<Item = &'a MotorRecord>,
{
    for (row, motor) in motors.into_iter().enumerate().take(2) {
        let row = row as u8;
        let mut label: String<10> = String::new();
        let _ = write!(label, "Motor {}:", row + 1);
        write_at(display, 0, row, &label);

        for param in MotorParam::ALL {
            let column = FIRST_VALUE_COLUMN + 2 * param.index();
            write_number(display, column, row, motor.get(param));
        }
    }
}

/// Motor picker.
pub fn motor_select<D: CharDisplay>(display: &mut D, motor_id: u8) {
    write_at(display, 0, 0, HINT_MOTOR_SELECT);
    write_at(display, 0, 1, "Motor");
    write_number(display, MOTOR_ID_COLUMN, 1, motor_id);
}

/// Parameter picker for the selected motor.
pub fn param_select<D: CharDisplay>(display: &mut D, motor_id: u8, param: MotorParam) {
    submenu_header(display, motor_id);
    write_at(display, 0, 1, param.label());
}

/// Value editor for the selected motor.
pub fn param_edit<D: CharDisplay>(display: &mut D, motor_id: u8, value: u8) {
    submenu_header(display, motor_id);
    write_number(display, 0, 1, value);
}
