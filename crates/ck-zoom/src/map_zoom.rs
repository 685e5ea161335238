//! Map zoom keyboard control
//!
//! The map zoom control is two buttons, zoom-in then zoom-out. Tab moves
//! between them and leaves the control past either end. Arrow keys pan the
//! zoomed map, space and enter click the focused button.

use std::sync::Arc;

use ck_core::lang::{MAP_ZOOM_IN, MAP_ZOOM_OUT};
use ck_core::{
    pan_step, AccessibleAttributes, AxisKind, ButtonState, ChartAccess, Direction, Key, KeyPress,
    LabelContext, LabelFormatter, MapNavButton, NavigationHandler, PanRequest, ResponseCode,
};
use parking_lot::Mutex;
use tracing::debug;

const ARROW_KEYS: [Key; 4] = [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight];

/// Tracks which map navigation button holds simulated focus
pub struct MapZoomController {
    chart: Arc<dyn ChartAccess>,
    lang: Arc<dyn LabelFormatter>,
    pan_granularity: u32,
    focused: Mutex<Option<MapNavButton>>,
}

impl MapZoomController {
    pub fn new(
        chart: Arc<dyn ChartAccess>,
        lang: Arc<dyn LabelFormatter>,
        pan_granularity: u32,
    ) -> Self {
        Self {
            chart,
            lang,
            pan_granularity,
            focused: Mutex::new(None),
        }
    }

    /// The button currently holding focus, if any
    pub fn focused(&self) -> Option<MapNavButton> {
        *self.focused.lock()
    }

    /// Map zoom is usable only while active with at least one button
    pub fn is_available(&self) -> bool {
        self.chart.map_zoom_enabled() && self.chart.map_nav_button_count() > 0
    }

    fn has_button(&self, button: MapNavButton) -> bool {
        button.index() < self.chart.map_nav_button_count()
    }

    /// Return a button to its normal state, if the chart still has it
    fn deselect(&self, button: MapNavButton) {
        if self.has_button(button) {
            self.chart.set_map_nav_button_state(button, ButtonState::Normal);
        }
    }

    fn select(&self, button: MapNavButton) {
        let bounds = self.chart.map_nav_button_bounds(button);
        debug!("Focusing map button {:?} at {:?}", button, bounds);
        *self.focused.lock() = Some(button);
        self.chart.focus_map_nav_button(button);
        self.chart.set_map_nav_button_state(button, ButtonState::Selected);
    }

    /// Enter the control: forward entry lands on zoom-in, backward on
    /// zoom-out
    pub fn on_init(&self, direction: Direction) {
        if let Some(previous) = self.focused.lock().take() {
            self.deselect(previous);
        }

        let mut button = match direction {
            Direction::Forward => MapNavButton::ZoomIn,
            Direction::Backward => MapNavButton::ZoomOut,
        };
        if !self.has_button(button) {
            button = MapNavButton::ZoomIn;
        }
        self.select(button);
    }

    /// Up/down pan the y axis, left/right the x axis
    pub fn on_arrow(&self, press: KeyPress) -> ResponseCode {
        let kind = match press.key {
            Key::ArrowUp | Key::ArrowDown => AxisKind::Y,
            _ => AxisKind::X,
        };
        let request = PanRequest::new(press.direction()).with_granularity(self.pan_granularity);
        pan_step(&*self.chart, kind, request);
        ResponseCode::Success
    }

    /// Move between the two buttons, or leave the control at either end
    pub fn on_tab(&self, press: KeyPress) -> ResponseCode {
        let direction = press.direction();
        let current = self.focused.lock().take();

        if let Some(button) = current {
            self.deselect(button);
        }

        let next = match (current, direction) {
            (Some(MapNavButton::ZoomIn), Direction::Forward) => Some(MapNavButton::ZoomOut),
            (Some(MapNavButton::ZoomOut), Direction::Backward) => Some(MapNavButton::ZoomIn),
            _ => None,
        };

        match next.filter(|button| self.has_button(*button)) {
            Some(button) => {
                self.select(button);
                ResponseCode::Success
            }
            None => {
                debug!("Leaving map zoom {:?}, resetting zoom", direction);
                self.chart.reset_map_zoom();
                ResponseCode::move_focus(direction)
            }
        }
    }

    /// Click the focused button's underlying element
    pub fn on_click(&self) -> ResponseCode {
        match self.focused() {
            Some(button) if self.has_button(button) => self.chart.click_map_nav_button(button),
            Some(button) => debug!("Map button {:?} is gone, ignoring click", button),
            None => {}
        }
        ResponseCode::Success
    }

    /// Release the focus marker
    pub fn on_terminate(&self) {
        if let Some(button) = self.focused.lock().take() {
            self.deselect(button);
        }
    }

    /// Label the visual map buttons and expose them to assistive technology
    pub fn update_button_attributes(&self) {
        for button in MapNavButton::ALL {
            if !self.has_button(button) {
                continue;
            }
            let key = match button {
                MapNavButton::ZoomIn => MAP_ZOOM_IN,
                MapNavButton::ZoomOut => MAP_ZOOM_OUT,
            };
            let label = self.lang.format(key, &LabelContext::new());
            let attributes = AccessibleAttributes::button(label);
            self.chart.set_map_nav_button_attributes(button, &attributes);
        }
    }

    /// Navigation handler driving this controller
    pub fn navigation(self: &Arc<Self>) -> NavigationHandler {
        let arrows = Arc::clone(self);
        let tab = Arc::clone(self);
        let click = Arc::clone(self);
        let validate = Arc::clone(self);
        let init = Arc::clone(self);
        let terminate = Arc::clone(self);

        NavigationHandler::builder("map-zoom")
            .on_keys(&ARROW_KEYS, move |press| arrows.on_arrow(press))
            .on_keys(&[Key::Tab], move |press| tab.on_tab(press))
            .on_keys(&[Key::Space, Key::Enter], move |_| click.on_click())
            .validate(move || validate.is_available())
            .init(move |direction| init.on_init(direction))
            .terminate(move || terminate.on_terminate())
            .build()
    }
}
