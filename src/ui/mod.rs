//! User interface hardware - HD44780 LCD + physical buttons.
//!
//! ## Components
//!
//! - **Display**: HD44780 16×2 character LCD, 4-bit GPIO bus
//! - **Buttons**: 3 tactile switches with debouncing (NEXT, ENTER, ESCAPE)
//!
//! Buttons and the menu task talk through a bounded channel; the menu side
//! only ever polls it.

pub mod buttons;
pub mod lcd;

use embassy_nrf::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Delay;
use motor_menu::config::EVENT_QUEUE_CAPACITY;
use motor_menu::{EventSource, MenuEvent};

/// Concrete LCD driver on nRF GPIO.
pub type Lcd = lcd::Hd44780<Output<'static>, Delay>;

pub type EventChannel = Channel<CriticalSectionRawMutex, MenuEvent, EVENT_QUEUE_CAPACITY>;
pub type EventSender = Sender<'static, CriticalSectionRawMutex, MenuEvent, EVENT_QUEUE_CAPACITY>;
pub type EventReceiver =
    Receiver<'static, CriticalSectionRawMutex, MenuEvent, EVENT_QUEUE_CAPACITY>;

/// Button → menu event queue.
pub static EVENTS: EventChannel = Channel::new();

/// Non-blocking view of the event channel for the menu.
pub struct ChannelEvents(pub EventReceiver);

impl EventSource for ChannelEvents {
    fn try_dequeue(&mut self) -> Option<MenuEvent> {
        self.0.try_receive().ok()
    }
}
