//! GPIO button input with async debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - NEXT   - advance the cursor on the current menu level
//!   - ENTER  - open the selected item / commit and return home
//!   - ESCAPE - back one level
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and queues a `MenuEvent` for the menu task.

use defmt::{info, warn};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};
use motor_menu::config::BUTTON_DEBOUNCE_MS;
use motor_menu::{Error, MenuEvent};

use super::EventSender;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, queues the event,
/// then waits for release before repeating. Never blocks on a full queue:
/// the press is dropped instead.
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(pin: AnyPin, event: MenuEvent, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: {}", event);
            if tx.try_send(event).is_err() {
                warn!("Button: {}, dropping {}", Error::EventQueueFull, event);
            }

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
