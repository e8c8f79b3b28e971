//! Menu states and the (state × event) transition table.

use crate::event::MenuEvent;

/// Screens of the menu hierarchy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Overview of both motors. Initial state.
    #[default]
    MainMenu,
    /// Pick which motor to configure.
    MotorSelect,
    /// Pick power / speed / spin of the selected motor.
    ParamSelect,
    /// Change the selected parameter's value.
    ParamEdit,
}

impl MenuState {
    /// Screen one level up, reached with `Cancel`. `None` for the main menu.
    pub fn parent(self) -> Option<MenuState> {
        match self {
            MenuState::MainMenu => None,
            MenuState::MotorSelect => Some(MenuState::MainMenu),
            MenuState::ParamSelect => Some(MenuState::MotorSelect),
            MenuState::ParamEdit => Some(MenuState::ParamSelect),
        }
    }
}

/// What an event does in a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// The state does not react; the event stays pending.
    Ignore,
    /// Step the cursor of the current level. Consumes the event.
    Advance,
    /// Leave for another state. Consumes the event and clears the display.
    Goto(MenuState),
}

/// Transition table.
pub fn transition(state: MenuState, event: MenuEvent) -> Action {
    use MenuEvent::*;
    use MenuState::*;

    match (state, event) {
        (_, Idle) => Action::Ignore,

        (MainMenu, Confirm) => Action::Goto(MotorSelect),
        (MainMenu, NavigateNext | Cancel) => Action::Ignore,

        (MotorSelect, NavigateNext) => Action::Advance,
        (MotorSelect, Confirm) => Action::Goto(ParamSelect),

        (ParamSelect, NavigateNext) => Action::Advance,
        (ParamSelect, Confirm) => Action::Goto(ParamEdit),

        (ParamEdit, NavigateNext) => Action::Advance,
        (ParamEdit, Confirm) => Action::Goto(MainMenu),

        (MotorSelect | ParamSelect | ParamEdit, Cancel) => match state.parent() {
            Some(parent) => Action::Goto(parent),
            None => Action::Ignore,
        },
    }
}
