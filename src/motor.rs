//! Motor parameter store - one record per addressable motor.
//!
//! Records start zeroed with `id = 0` (unassigned). The menu assigns the id
//! the first time a motor is selected and writes parameters only from the
//! edit screen.

use crate::config::{MOTOR_COUNT, POWER_MAX, SPEED_MAX, SPIN_MAX};

/// Editable motor parameters, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorParam {
    Power,
    Speed,
    Spin,
}

impl MotorParam {
    pub const ALL: [MotorParam; 3] = [MotorParam::Power, MotorParam::Speed, MotorParam::Spin];

    /// Map a parameter-selection cursor to a parameter.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        match self {
            MotorParam::Power => 0,
            MotorParam::Speed => 1,
            MotorParam::Spin => 2,
        }
    }

    /// Largest value this parameter accepts.
    pub fn max(self) -> u8 {
        match self {
            MotorParam::Power => POWER_MAX,
            MotorParam::Speed => SPEED_MAX,
            MotorParam::Spin => SPIN_MAX,
        }
    }

    /// Label shown on the parameter selection screen.
    pub fn label(self) -> &'static str {
        match self {
            MotorParam::Power => "Power",
            MotorParam::Speed => "Speed",
            MotorParam::Spin => "Spin",
        }
    }
}

/// Identifier and settings of one motor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorRecord {
    /// 1-based motor id, 0 until first selected.
    pub id: u8,
    pub power: u8,
    pub speed: u8,
    pub spin: u8,
}

impl MotorRecord {
    /// Zeroed, unassigned record.
    pub const fn new() -> Self {
        Self {
            id: 0,
            power: 0,
            speed: 0,
            spin: 0,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.id != 0
    }

    pub fn get(&self, param: MotorParam) -> u8 {
        match param {
            MotorParam::Power => self.power,
            MotorParam::Speed => self.speed,
            MotorParam::Spin => self.spin,
        }
    }

    /// Store a value. The caller has already range-checked it.
    pub fn set(&mut self, param: MotorParam, value: u8) {
        match param {
            MotorParam::Power => self.power = value,
            MotorParam::Speed => self.speed = value,
            MotorParam::Spin => self.spin = value,
        }
    }
}

/// Fixed array of motor records indexed by the motor selection cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MotorStore {
    motors: [MotorRecord; MOTOR_COUNT],
}

impl MotorStore {
    pub const fn new() -> Self {
        Self {
            motors: [MotorRecord::new(); MOTOR_COUNT],
        }
    }

    pub fn get(&self, index: usize) -> Option<&MotorRecord> {
        self.motors.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MotorRecord> {
        self.motors.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotorRecord> {
        self.motors.iter()
    }

    /// Give the motor at `index` its 1-based id if it has none yet.
    ///
    /// Returns `true` when an id was assigned by this call.
    pub fn assign_id(&mut self, index: usize) -> bool {
        match self.motors.get_mut(index) {
            Some(motor) if !motor.is_assigned() => {
                motor.id = index as u8 + 1;
                info!("Motor {} assigned", motor.id);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_zeroed_and_unassigned() {
        let store = MotorStore::new();
        for motor in store.iter() {
            assert_eq!(*motor, MotorRecord::new());
            assert!(!motor.is_assigned());
        }
        assert_eq!(store.iter().count(), MOTOR_COUNT);
    }

    #[test]
    fn assign_id_is_one_based_and_sticky() {
        let mut store = MotorStore::new();
        assert!(store.assign_id(1));
        assert_eq!(store.get(1).unwrap().id, 2);
        assert!(!store.assign_id(1));
        assert_eq!(store.get(1).unwrap().id, 2);
        assert_eq!(store.get(0).unwrap().id, 0);
    }

    #[test]
    fn assign_id_out_of_range_is_ignored() {
        let mut store = MotorStore::new();
        assert!(!store.assign_id(MOTOR_COUNT));
    }

    #[test]
    fn param_set_and_get_touch_one_field() {
        let mut motor = MotorRecord::new();
        motor.set(MotorParam::Speed, 7);
        assert_eq!(motor.get(MotorParam::Speed), 7);
        assert_eq!(motor.power, 0);
        assert_eq!(motor.spin, 0);
    }

    #[test]
    fn param_index_round_trip_and_ceilings() {
        for param in MotorParam::ALL {
            assert_eq!(MotorParam::from_index(param.index()), Some(param));
        }
        assert_eq!(MotorParam::from_index(3), None);
        assert_eq!(MotorParam::Power.max(), 1);
        assert_eq!(MotorParam::Speed.max(), 9);
        assert_eq!(MotorParam::Spin.max(), 1);
    }
}
