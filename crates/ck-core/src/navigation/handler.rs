//! Navigation handler implementation

use egui::Key;
use tracing::{debug, trace, warn};

use super::{Direction, KeyPress, ResponseCode};
use crate::error::{KeyNavError, Result};

/// Action invoked for a matching key press
pub type KeyAction = Box<dyn FnMut(KeyPress) -> ResponseCode + Send>;

type Validator = Box<dyn Fn() -> bool + Send>;
type InitFn = Box<dyn FnMut(Direction) + Send>;
type TerminateFn = Box<dyn FnMut() + Send>;

/// Whether the handler currently receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    Inactive,
    Active,
}

struct KeyBinding {
    keys: Vec<Key>,
    action: KeyAction,
}

/// Keyboard state machine for one control
pub struct NavigationHandler {
    name: &'static str,
    bindings: Vec<KeyBinding>,
    validate: Option<Validator>,
    init: Option<InitFn>,
    terminate: Option<TerminateFn>,
    state: HandlerState,
}

impl NavigationHandler {
    pub fn builder(name: &'static str) -> NavigationHandlerBuilder {
        NavigationHandlerBuilder {
            handler: NavigationHandler {
                name,
                bindings: Vec::new(),
                validate: None,
                init: None,
                terminate: None,
                state: HandlerState::Inactive,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> HandlerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == HandlerState::Active
    }

    /// Whether the control is usable right now
    pub fn validate(&self) -> bool {
        self.validate.as_ref().map_or(true, |validate| validate())
    }

    /// Activate the handler. `direction` tells which end of the control
    /// sequence focus arrived from. Re-entering an active handler resets its
    /// focus state.
    pub fn init(&mut self, direction: Direction) -> Result<ResponseCode> {
        if !self.validate() {
            warn!("Refusing to activate unavailable handler '{}'", self.name);
            return Err(KeyNavError::Unavailable(self.name));
        }

        debug!("Activating handler '{}' from {:?}", self.name, direction);
        if let Some(init) = self.init.as_mut() {
            init(direction);
        }
        self.state = HandlerState::Active;
        Ok(ResponseCode::Success)
    }

    /// Dispatch a key press to the first binding that contains its key.
    ///
    /// Returns `Ok(None)` when no binding matches.
    pub fn handle_key(&mut self, press: KeyPress) -> Result<Option<ResponseCode>> {
        if !self.is_active() {
            warn!("Handler '{}' got {:?} while inactive", self.name, press.key);
            return Err(KeyNavError::Inactive(self.name));
        }

        let Some(binding) = self.bindings.iter_mut().find(|b| b.keys.contains(&press.key)) else {
            trace!("Handler '{}' has no binding for {:?}", self.name, press.key);
            return Ok(None);
        };

        let response = (binding.action)(press);
        trace!("Handler '{}' answered {:?} with {:?}", self.name, press.key, response);
        Ok(Some(response))
    }

    /// Deactivate the handler and release any focus it holds
    pub fn terminate(&mut self) {
        if !self.is_active() {
            return;
        }

        debug!("Terminating handler '{}'", self.name);
        if let Some(terminate) = self.terminate.as_mut() {
            terminate();
        }
        self.state = HandlerState::Inactive;
    }
}

impl std::fmt::Debug for NavigationHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationHandler")
            .field("name", &self.name)
            .field("bindings", &self.bindings.iter().map(|b| &b.keys).collect::<Vec<_>>())
            .field("state", &self.state)
            .finish()
    }
}

/// Builder for [`NavigationHandler`]
pub struct NavigationHandlerBuilder {
    handler: NavigationHandler,
}

impl NavigationHandlerBuilder {
    /// Append a binding. Bindings are matched in insertion order.
    pub fn on_keys<F>(mut self, keys: &[Key], action: F) -> Self
    where
        F: FnMut(KeyPress) -> ResponseCode + Send + 'static,
    {
        self.handler.bindings.push(KeyBinding {
            keys: keys.to_vec(),
            action: Box::new(action),
        });
        self
    }

    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        self.handler.validate = Some(Box::new(validate));
        self
    }

    pub fn init<F>(mut self, init: F) -> Self
    where
        F: FnMut(Direction) + Send + 'static,
    {
        self.handler.init = Some(Box::new(init));
        self
    }

    pub fn terminate<F>(mut self, terminate: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.handler.terminate = Some(Box::new(terminate));
        self
    }

    pub fn build(self) -> NavigationHandler {
        self.handler
    }
}
