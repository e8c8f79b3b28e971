//! Integration tests for motor-menu host-testable logic.
//!
//! Drives the public API the way the firmware does: ticks recorded on a
//! shared counter, presses queued, `MenuTask::update` polled.

use motor_menu::config::MENU_EVAL_PERIOD_TICKS;
use motor_menu::{EventQueue, MenuEvent, MenuState, MenuTask, TextDisplay, TickCounter};

struct Device {
    ticks: TickCounter,
    task: MenuTask,
    display: TextDisplay,
    events: EventQueue,
}

impl Device {
    fn boot() -> Self {
        let mut device = Self {
            ticks: TickCounter::new(),
            task: MenuTask::init(),
            display: TextDisplay::new(),
            events: EventQueue::new(),
        };
        // First drained tick draws the main menu.
        device.run_ticks(1);
        device
    }

    fn run_ticks(&mut self, n: u32) -> usize {
        for _ in 0..n {
            self.ticks.on_tick();
        }
        self.task
            .update(&self.ticks, &mut self.display, &mut self.events)
    }

    /// Press a button and let one evaluation period pass.
    fn press(&mut self, event: MenuEvent) {
        self.events.put(event).expect("queue has room");
        assert_eq!(self.run_ticks(MENU_EVAL_PERIOD_TICKS), 1);
    }
}

#[test]
fn boot_shows_main_menu() {
    let device = Device::boot();
    assert_eq!(device.display.row(0), "Motor 1:  0 0 0 ");
    assert_eq!(device.display.row(1), "Motor 2:  0 0 0 ");
    assert_eq!(device.task.menu().state(), MenuState::MainMenu);
}

#[test]
fn set_motor2_speed_and_power_then_return_home() {
    let mut device = Device::boot();

    device.press(MenuEvent::Confirm); // → motor select
    device.press(MenuEvent::NavigateNext); // motor 2
    device.press(MenuEvent::Confirm); // → param select
    device.press(MenuEvent::NavigateNext); // speed
    device.press(MenuEvent::Confirm); // → edit
    for _ in 0..3 {
        device.press(MenuEvent::NavigateNext);
    }
    device.run_ticks(MENU_EVAL_PERIOD_TICKS);
    assert_eq!(device.display.row(0), "Enter/Next/Esc:2");
    assert_eq!(device.display.row(1), "3               ");

    device.press(MenuEvent::Cancel); // → param select
    device.press(MenuEvent::NavigateNext); // spin
    device.press(MenuEvent::NavigateNext); // power
    device.press(MenuEvent::Confirm); // → edit
    device.press(MenuEvent::NavigateNext);
    device.press(MenuEvent::Confirm); // commit, → main menu
    device.run_ticks(MENU_EVAL_PERIOD_TICKS);

    assert_eq!(device.task.menu().state(), MenuState::MainMenu);
    assert!(!device.task.menu().has_pending_event());
    assert_eq!(device.display.row(0), "Motor 1:  0 0 0 ");
    assert_eq!(device.display.row(1), "Motor 2:  1 3 0 ");
}

#[test]
fn burst_of_ticks_is_caught_up_in_one_update() {
    let mut device = Device::boot();
    device.events.put(MenuEvent::Confirm).unwrap();
    device.events.put(MenuEvent::Confirm).unwrap();

    let steps = device.run_ticks(MENU_EVAL_PERIOD_TICKS * 2);
    assert_eq!(steps, 2);
    assert_eq!(device.task.menu().state(), MenuState::ParamSelect);
    assert_eq!(device.ticks.pending(), 0);
}
