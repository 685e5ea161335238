//! Minimal keyboard focus sequencer
//!
//! Walks an ordered handler list the way a host page would: skip handlers
//! that fail validation, route key presses to the active one, and move on
//! when it reports that it is exhausted.

use anyhow::Result;
use ck_core::{Direction, KeyPress, NavigationHandler, ResponseCode};
use tracing::{debug, info};

pub struct Sequencer {
    handlers: Vec<NavigationHandler>,
    current: Option<usize>,
}

impl Sequencer {
    pub fn new(handlers: Vec<NavigationHandler>) -> Self {
        Self {
            handlers,
            current: None,
        }
    }

    /// Name of the handler holding focus, if any
    pub fn current(&self) -> Option<&'static str> {
        self.current.map(|idx| self.handlers[idx].name())
    }

    /// Enter the chart from one end. Returns false if no control is usable.
    pub fn enter(&mut self, direction: Direction) -> Result<bool> {
        let start = match direction {
            Direction::Forward => None,
            Direction::Backward => Some(self.handlers.len()),
        };
        self.activate_from(start, direction)
    }

    /// Route one key press to the active handler
    pub fn press(&mut self, press: KeyPress) -> Result<Option<ResponseCode>> {
        let Some(idx) = self.current else {
            debug!("No active control for {:?}", press.key);
            return Ok(None);
        };

        let response = self.handlers[idx].handle_key(press)?;
        match response {
            Some(ResponseCode::MoveFocusNext) => {
                self.handlers[idx].terminate();
                self.activate_from(Some(idx), Direction::Forward)?;
            }
            Some(ResponseCode::MoveFocusPrev) => {
                self.handlers[idx].terminate();
                self.activate_from(Some(idx), Direction::Backward)?;
            }
            Some(ResponseCode::Success) | None => {}
        }
        Ok(response)
    }

    /// Activate the first valid handler past `from` in `direction`
    fn activate_from(&mut self, from: Option<usize>, direction: Direction) -> Result<bool> {
        let candidates: Vec<usize> = match (direction, from) {
            (Direction::Forward, None) => (0..self.handlers.len()).collect(),
            (Direction::Forward, Some(idx)) => (idx + 1..self.handlers.len()).collect(),
            (Direction::Backward, None) => Vec::new(),
            (Direction::Backward, Some(idx)) => (0..idx.min(self.handlers.len())).rev().collect(),
        };

        for idx in candidates {
            if self.handlers[idx].validate() {
                self.handlers[idx].init(direction)?;
                self.current = Some(idx);
                info!("Focus moved to '{}'", self.handlers[idx].name());
                return Ok(true);
            }
        }

        info!("Focus left the chart {:?}", direction);
        self.current = None;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ck_core::Key;
    use parking_lot::Mutex;

    type Log = Arc<Mutex<Vec<String>>>;

    fn stub(name: &'static str, available: bool, log: &Log) -> NavigationHandler {
        let init_log = log.clone();
        let terminate_log = log.clone();
        NavigationHandler::builder(name)
            .on_keys(&[Key::Tab], |press| ResponseCode::move_focus(press.direction()))
            .on_keys(&[Key::Enter], |_| ResponseCode::Success)
            .validate(move || available)
            .init(move |direction| init_log.lock().push(format!("init {} {:?}", name, direction)))
            .terminate(move || terminate_log.lock().push(format!("terminate {}", name)))
            .build()
    }

    fn sequencer(log: &Log) -> Sequencer {
        Sequencer::new(vec![
            stub("first", true, log),
            stub("gated", false, log),
            stub("last", true, log),
        ])
    }

    #[test]
    fn test_forward_skips_gated_handler_and_leaves_chart() {
        let log = Log::default();
        let mut seq = sequencer(&log);

        assert!(seq.enter(Direction::Forward).unwrap());
        assert_eq!(seq.current(), Some("first"));

        let response = seq.press(KeyPress::new(Key::Tab)).unwrap();
        assert_eq!(response, Some(ResponseCode::MoveFocusNext));
        assert_eq!(seq.current(), Some("last"));

        seq.press(KeyPress::new(Key::Tab)).unwrap();
        assert_eq!(seq.current(), None);

        assert_eq!(
            *log.lock(),
            vec!["init first Forward", "terminate first", "init last Forward", "terminate last"]
        );
    }

    #[test]
    fn test_backward_entry_and_exit() {
        let log = Log::default();
        let mut seq = sequencer(&log);

        assert!(seq.enter(Direction::Backward).unwrap());
        assert_eq!(seq.current(), Some("last"));

        let response = seq.press(KeyPress::shifted(Key::Tab)).unwrap();
        assert_eq!(response, Some(ResponseCode::MoveFocusPrev));
        assert_eq!(seq.current(), Some("first"));

        seq.press(KeyPress::shifted(Key::Tab)).unwrap();
        assert_eq!(seq.current(), None);
        assert_eq!(log.lock()[2], "init first Backward");
    }

    #[test]
    fn test_success_and_unmatched_keys_keep_focus() {
        let log = Log::default();
        let mut seq = sequencer(&log);
        seq.enter(Direction::Forward).unwrap();

        assert_eq!(seq.press(KeyPress::new(Key::Enter)).unwrap(), Some(ResponseCode::Success));
        assert_eq!(seq.press(KeyPress::new(Key::Escape)).unwrap(), None);
        assert_eq!(seq.current(), Some("first"));
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn test_no_usable_handler() {
        let log = Log::default();
        let mut seq = Sequencer::new(vec![stub("gated", false, &log)]);

        assert!(!seq.enter(Direction::Forward).unwrap());
        assert_eq!(seq.current(), None);
        assert_eq!(seq.press(KeyPress::new(Key::Tab)).unwrap(), None);
        assert!(log.lock().is_empty());
    }
}
