//! Menu task - the cooperative glue between the tick gate and the menu.
//!
//! `update` is called from the firmware's polling loop as often as the
//! scheduler allows. It never waits: it drains whatever ticks the interrupt
//! has recorded, one at a time, and lets the menu evaluate when its
//! countdown expires.

use crate::display::CharDisplay;
use crate::event::EventSource;
use crate::menu::MenuContext;
use crate::tick::TickCounter;

pub struct MenuTask {
    menu: MenuContext,
    update_count: u32,
}

impl MenuTask {
    pub const NAME: &'static str = "Task Menu (Interactive Menu)";
    pub const KIND: &'static str = "Non-Blocking & Update By Time Code";

    /// Fresh menu in its initial state. Logs the startup banner.
    pub fn init() -> Self {
        let task = Self {
            menu: MenuContext::new(),
            update_count: 0,
        };

        info!("{} is running - {}", Self::NAME, Self::KIND);
        info!("  update_count = {}", task.update_count);
        info!(
            "  state = {}, event = {}, pending = {}",
            task.menu.state(),
            task.menu.pending_event(),
            task.menu.has_pending_event()
        );

        task
    }

    /// Drain all pending ticks. Returns how many evaluation steps ran.
    pub fn update<D, E>(&mut self, ticks: &TickCounter, display: &mut D, events: &mut E) -> usize
    where
        D: CharDisplay,
        E: EventSource,
    {
        self.update_count = self.update_count.wrapping_add(1);

        let mut steps = 0;
        while ticks.drain_one() {
            if self.menu.on_tick(display, events) {
                steps += 1;
            }
        }
        steps
    }

    /// Number of times `update` has been called.
    pub fn update_count(&self) -> u32 {
        self.update_count
    }

    pub fn menu(&self) -> &MenuContext {
        &self.menu
    }
}

impl Default for MenuTask {
    fn default() -> Self {
        Self::init()
    }
}
