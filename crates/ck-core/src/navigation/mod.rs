use egui::{Key, Modifiers};

mod handler;
mod provider;

pub use handler::{HandlerState, KeyAction, NavigationHandler, NavigationHandlerBuilder};
pub use provider::KeyboardNavigationProvider;

/// Direction of travel, used both for panning and for entering a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn signum(self) -> f64 {
        match self {
            Direction::Backward => -1.0,
            Direction::Forward => 1.0,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Forward => Direction::Backward,
        }
    }
}

/// What a navigation handler did with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// Consumed; stay on the current control
    Success,
    /// Control exhausted backward; the sequencer moves to the previous control
    MoveFocusPrev,
    /// Control exhausted forward; the sequencer moves to the next control
    MoveFocusNext,
}

impl ResponseCode {
    /// Response for leaving a control in `direction`
    pub fn move_focus(direction: Direction) -> Self {
        match direction {
            Direction::Backward => ResponseCode::MoveFocusPrev,
            Direction::Forward => ResponseCode::MoveFocusNext,
        }
    }

    pub fn is_exit(self) -> bool {
        !matches!(self, ResponseCode::Success)
    }
}

/// A key event routed to a navigation handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn shifted(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }

    pub fn shift(&self) -> bool {
        self.modifiers.shift
    }

    /// Whether this press moves backward through controls: shift+tab, left or up
    pub fn is_backward(&self) -> bool {
        match self.key {
            Key::Tab => self.shift(),
            Key::ArrowLeft | Key::ArrowUp => true,
            _ => false,
        }
    }

    /// Direction of travel implied by [`KeyPress::is_backward`]
    pub fn direction(&self) -> Direction {
        if self.is_backward() {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_keys() {
        assert!(KeyPress::shifted(Key::Tab).is_backward());
        assert!(KeyPress::new(Key::ArrowLeft).is_backward());
        assert!(KeyPress::new(Key::ArrowUp).is_backward());
        assert!(!KeyPress::new(Key::Tab).is_backward());
        assert!(!KeyPress::new(Key::ArrowDown).is_backward());
        assert!(!KeyPress::new(Key::ArrowRight).is_backward());
        assert_eq!(KeyPress::new(Key::ArrowUp).direction(), Direction::Backward);
        assert_eq!(KeyPress::new(Key::Tab).direction(), Direction::Forward);
    }

    #[test]
    fn test_move_focus_response() {
        assert_eq!(ResponseCode::move_focus(Direction::Backward), ResponseCode::MoveFocusPrev);
        assert_eq!(ResponseCode::move_focus(Direction::Forward), ResponseCode::MoveFocusNext);
        assert!(!ResponseCode::Success.is_exit());
        assert_eq!(Direction::Forward.reverse(), Direction::Backward);
    }
}
