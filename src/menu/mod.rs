//! Interactive motor menu - the tick-gated state machine.
//!
//! ## Flow
//!
//! ```text
//! MainMenu --Confirm--> MotorSelect --Confirm--> ParamSelect --Confirm--> ParamEdit
//!    ^                      |  ^                     |  ^                    |
//!    +-------Cancel---------+  +-------Cancel--------+  +-------Cancel-------+
//!    +----------------------------------Confirm----------------------------------+
//! ```
//!
//! Each evaluation step fetches at most one event, redraws the current
//! screen from the state it found, then applies the table entry for
//! `(state, pending event)`. `NavigateNext` advances the cursor of the
//! current level without leaving the screen.

pub mod indices;
pub mod render;
pub mod state;


pub use indices::SubMenuIndices;
pub use state::{transition, Action, MenuState};

use crate::display::CharDisplay;
use crate::event::{EventSource, MenuEvent};
use crate::motor::{MotorRecord, MotorStore};
use crate::tick::EvalTimer;

/// Complete menu state, owned by the menu task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuContext {
    state: MenuState,
    pending_event: MenuEvent,
    has_pending_event: bool,
    timer: EvalTimer,
    indices: SubMenuIndices,
    motors: MotorStore,
    /// Motor being configured, fixed when the parameter screens are entered.
    selected_motor: Option<usize>,
}

impl MenuContext {
    /// Main menu, no pending event, all motors zeroed.
    pub const fn new() -> Self {
        Self {
            state: MenuState::MainMenu,
            pending_event: MenuEvent::Idle,
            has_pending_event: false,
            timer: EvalTimer::new(),
            indices: SubMenuIndices::new(),
            motors: MotorStore::new(),
            selected_motor: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Last event taken from the queue, consumed or not.
    pub fn pending_event(&self) -> MenuEvent {
        self.pending_event
    }

    /// `true` while `pending_event` has not been acted on.
    pub fn has_pending_event(&self) -> bool {
        self.has_pending_event
    }

    pub fn ticks_until_eval(&self) -> u32 {
        self.timer.ticks_until_eval()
    }

    pub fn indices(&self) -> &SubMenuIndices {
        &self.indices
    }

    pub fn motors(&self) -> &MotorStore {
        &self.motors
    }

    /// Index of the motor being configured, if a parameter screen is open.
    pub fn selected_motor(&self) -> Option<usize> {
        self.selected_motor
    }

    /// Feed one drained tick. Runs an evaluation step when the countdown
    /// expires and returns whether it did.
    pub fn on_tick<D, E>(&mut self, display: &mut D, events: &mut E) -> bool
    where
        D: CharDisplay,
        E: EventSource,
    {
        if self.timer.on_tick() {
            self.step(display, events);
            true
        } else {
            false
        }
    }

    /// Run one evaluation step immediately.
    pub fn step<D, E>(&mut self, display: &mut D, events: &mut E)
    where
        D: CharDisplay,
        E: EventSource,
    {
        if let Some(event) = events.try_dequeue() {
            trace!("Menu: event {}", event);
            self.pending_event = event;
            self.has_pending_event = true;
        }

        self.refresh(display);

        if !self.has_pending_event {
            return;
        }
        match transition(self.state, self.pending_event) {
            Action::Ignore => {}
            Action::Advance => self.advance(display),
            Action::Goto(next) => self.enter(next, display),
        }
    }

    /// Draw the current screen. The edit screen also commits the value
    /// cursor to the selected motor here.
    fn refresh<D: CharDisplay>(&mut self, display: &mut D) {
        match self.state {
            MenuState::MainMenu => render::main_menu(display, self.motors.iter()),
            MenuState::MotorSelect => {
                let index = self.indices.motor_select() as usize;
                self.motors.assign_id(index);
                render::motor_select(display, self.motor_id(index));
            }
            MenuState::ParamSelect => {
                let id = self.motor_id(self.selected_index());
                render::param_select(display, id, self.indices.param());
            }
            MenuState::ParamEdit => {
                let index = self.selected_index();
                let param = self.indices.param();
                let value = self.indices.validate_value(param);
                if let Some(motor) = self.motors.get_mut(index) {
                    if motor.get(param) != value {
                        debug!("Motor {}: {} = {}", motor.id, param, value);
                    }
                    motor.set(param, value);
                }
                render::param_edit(display, self.motor_id(index), value);
            }
        }
    }

    fn advance<D: CharDisplay>(&mut self, display: &mut D) {
        self.has_pending_event = false;
        match self.state {
            MenuState::MainMenu => {}
            MenuState::MotorSelect => self.indices.advance_motor(),
            MenuState::ParamSelect => {
                self.indices.advance_param();
                display.clear();
            }
            MenuState::ParamEdit => {
                // Validated against the parameter's ceiling on the next step.
                self.indices.advance_value();
                display.clear();
            }
        }
    }

    fn enter<D: CharDisplay>(&mut self, next: MenuState, display: &mut D) {
        info!("Menu: {} -> {} on {}", self.state, next, self.pending_event);

        self.has_pending_event = false;
        match next {
            MenuState::MainMenu | MenuState::MotorSelect => self.selected_motor = None,
            MenuState::ParamSelect => {
                self.selected_motor = Some(self.indices.motor_select() as usize)
            }
            MenuState::ParamEdit => {
                // Start editing from the stored value so viewing is harmless.
                let param = self.indices.param();
                let current = self
                    .motors
                    .get(self.selected_index())
                    .map_or(0, |motor| motor.get(param));
                self.indices.seed_value(current);
            }
        }
        self.state = next;
        display.clear();
    }

    fn selected_index(&self) -> usize {
        self.selected_motor
            .unwrap_or(self.indices.motor_select() as usize)
    }

    fn motor_id(&self, index: usize) -> u8 {
        self.motors.get(index).map_or(0, |motor: &MotorRecord| motor.id)
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new()
    }
}
