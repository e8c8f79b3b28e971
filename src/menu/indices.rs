//! Cursor counters for the three nested menu levels.

use crate::config::{MOTOR_SELECT_MAX, PARAM_SELECT_MAX};
use crate::motor::MotorParam;

/// Motor selection, parameter selection and parameter value cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubMenuIndices {
    motor_select: u8,
    param_select: u8,
    param_value: u8,
}

impl SubMenuIndices {
    pub const fn new() -> Self {
        Self {
            motor_select: 0,
            param_select: 0,
            param_value: 0,
        }
    }

    pub fn motor_select(&self) -> u8 {
        self.motor_select
    }

    pub fn param_select(&self) -> u8 {
        self.param_select
    }

    /// Raw value cursor. May sit one past the selected parameter's ceiling
    /// between an advance and the next [`validate_value`](Self::validate_value).
    pub fn param_value(&self) -> u8 {
        self.param_value
    }

    /// Parameter under the selection cursor.
    pub fn param(&self) -> MotorParam {
        MotorParam::from_index(self.param_select).unwrap_or(MotorParam::Power)
    }

    pub fn advance_motor(&mut self) {
        self.motor_select += 1;
        if self.motor_select > MOTOR_SELECT_MAX {
            self.motor_select = 0;
        }
    }

    pub fn advance_param(&mut self) {
        self.param_select += 1;
        if self.param_select > PARAM_SELECT_MAX {
            self.param_select = 0;
        }
    }

    /// Step the value cursor. Wrapping is deferred to `validate_value`.
    pub fn advance_value(&mut self) {
        self.param_value = self.param_value.saturating_add(1);
    }

    /// Wrap the value cursor to 0 if it exceeds `param`'s ceiling and
    /// return the in-range value.
    pub fn validate_value(&mut self, param: MotorParam) -> u8 {
        if self.param_value > param.max() {
            self.param_value = 0;
        }
        self.param_value
    }

    /// Point the value cursor at `value`, e.g. the field about to be edited.
    pub fn seed_value(&mut self, value: u8) {
        self.param_value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motor_cursor_wraps_past_max() {
        let mut indices = SubMenuIndices::new();
        indices.advance_motor();
        assert_eq!(indices.motor_select(), 1);
        indices.advance_motor();
        assert_eq!(indices.motor_select(), 0);
    }

    #[test]
    fn param_cursor_cycles_power_speed_spin() {
        let mut indices = SubMenuIndices::new();
        assert_eq!(indices.param(), MotorParam::Power);
        indices.advance_param();
        assert_eq!(indices.param(), MotorParam::Speed);
        indices.advance_param();
        assert_eq!(indices.param(), MotorParam::Spin);
        indices.advance_param();
        assert_eq!(indices.param(), MotorParam::Power);
        assert_eq!(indices.param_select(), 0);
    }

    #[test]
    fn value_cursor_wraps_only_on_validate() {
        let mut indices = SubMenuIndices::new();
        indices.advance_value();
        indices.advance_value();
        assert_eq!(indices.param_value(), 2);
        assert_eq!(indices.validate_value(MotorParam::Power), 0);
        assert_eq!(indices.param_value(), 0);
    }

    #[test]
    fn value_ceiling_follows_selected_param() {
        let mut indices = SubMenuIndices::new();
        for _ in 0..9 {
            indices.advance_value();
        }
        assert_eq!(indices.validate_value(MotorParam::Speed), 9);
        indices.advance_value();
        assert_eq!(indices.validate_value(MotorParam::Speed), 0);

        indices.advance_value();
        assert_eq!(indices.validate_value(MotorParam::Spin), 1);
        indices.advance_value();
        assert_eq!(indices.validate_value(MotorParam::Spin), 0);
    }

    #[test]
    fn seeded_value_continues_from_there() {
        let mut indices = SubMenuIndices::new();
        indices.seed_value(7);
        assert_eq!(indices.validate_value(MotorParam::Speed), 7);
        indices.advance_value();
        assert_eq!(indices.validate_value(MotorParam::Speed), 8);
    }
}
