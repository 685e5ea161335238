#![allow(dead_code)]

use std::sync::Arc;

use ck_core::events::events::{ChartDrillupAll, ChartRedraw};
use ck_core::{
    AccessibilitySettings, AccessibleAttributes, AxisAccess, AxisExtremes, AxisKind, ButtonState,
    ChartActions, ChartControl, ControlAccess, EventBus, MapNavButton, Rect,
};
use ck_proxy::{ProxyButton, ProxyGroup, ProxyGroupId, ProxyHost};
use ck_zoom::ZoomComponent;
use egui::{pos2, vec2};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MockState {
    pub reset_zoom: Option<Rect>,
    pub drill_up: Option<(Rect, String)>,
    pub map_zoom: bool,
    pub map_buttons: usize,
    pub x: Option<AxisExtremes>,
    pub y: Option<AxisExtremes>,
    pub button_states: [ButtonState; 2],
    pub button_labels: [Option<String>; 2],
}

/// In-memory chart that redraws through the event bus after every action
pub struct MockChart {
    pub state: Mutex<MockState>,
    pub events: Arc<EventBus>,
    pub log: Mutex<Vec<String>>,
}

impl MockChart {
    pub fn new(events: Arc<EventBus>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(MockState::default()),
            events,
            log: Mutex::new(Vec::new()),
        })
    }

    pub fn show_reset_zoom(&self) {
        let bounds = Rect::from_min_size(pos2(500.0, 10.0), vec2(90.0, 24.0));
        self.state.lock().reset_zoom = Some(bounds);
    }

    pub fn show_drill_up(&self, text: &str) {
        let bounds = Rect::from_min_size(pos2(10.0, 10.0), vec2(120.0, 24.0));
        self.state.lock().drill_up = Some((bounds, text.to_string()));
    }

    pub fn enable_map_zoom(&self, buttons: usize) {
        let mut state = self.state.lock();
        state.map_zoom = true;
        state.map_buttons = buttons;
        state.x = Some(AxisExtremes::new(0.0, 10.0, 0.0, 30.0));
        state.y = Some(AxisExtremes::new(25.0, 30.0, 0.0, 30.0));
    }

    pub fn redraw(&self) {
        self.events.publish(ChartRedraw);
    }

    pub fn logged(&self, entry: &str) -> bool {
        self.log.lock().iter().any(|e| e == entry)
    }

    pub fn selected_buttons(&self) -> usize {
        self.state
            .lock()
            .button_states
            .iter()
            .filter(|s| **s == ButtonState::Selected)
            .count()
    }

    fn record(&self, entry: impl Into<String>) {
        self.log.lock().push(entry.into());
    }
}

impl AxisAccess for MockChart {
    fn extremes(&self, kind: AxisKind) -> Option<AxisExtremes> {
        let state = self.state.lock();
        match kind {
            AxisKind::X => state.x,
            AxisKind::Y => state.y,
        }
    }

    fn set_extremes(&self, kind: AxisKind, min: f64, max: f64) {
        let mut state = self.state.lock();
        let axis = match kind {
            AxisKind::X => &mut state.x,
            AxisKind::Y => &mut state.y,
        };
        if let Some(e) = axis.as_mut() {
            e.min = min;
            e.max = max;
        }
    }
}

impl ControlAccess for MockChart {
    fn control_bounds(&self, control: ChartControl) -> Option<Rect> {
        let state = self.state.lock();
        match control {
            ChartControl::ResetZoomButton => state.reset_zoom,
            ChartControl::DrillUpButton => state.drill_up.as_ref().map(|(r, _)| *r),
        }
    }

    fn control_text(&self, control: ChartControl) -> Option<String> {
        let state = self.state.lock();
        match control {
            ChartControl::ResetZoomButton => state.reset_zoom.map(|_| "Reset zoom".to_string()),
            ChartControl::DrillUpButton => state.drill_up.as_ref().map(|(_, t)| t.clone()),
        }
    }

    fn map_zoom_enabled(&self) -> bool {
        self.state.lock().map_zoom
    }

    fn map_nav_button_count(&self) -> usize {
        self.state.lock().map_buttons
    }

    fn map_nav_button_bounds(&self, button: MapNavButton) -> Option<Rect> {
        let top = 100.0 + 30.0 * button.index() as f32;
        (button.index() < self.map_nav_button_count())
            .then(|| Rect::from_min_size(pos2(10.0, top), vec2(24.0, 24.0)))
    }
}

impl ChartActions for MockChart {
    fn zoom_out(&self) {
        self.record("zoom_out");
        self.state.lock().reset_zoom = None;
        self.redraw();
    }

    fn drill_up(&self) {
        self.record("drill_up");
        self.state.lock().drill_up = None;
        self.events.publish(ChartDrillupAll);
    }

    fn reset_map_zoom(&self) {
        self.record("reset_map_zoom");
    }

    fn click_map_nav_button(&self, button: MapNavButton) {
        self.record(format!("click {:?}", button));
    }

    fn set_map_nav_button_state(&self, button: MapNavButton, state: ButtonState) {
        self.state.lock().button_states[button.index()] = state;
    }

    fn focus_map_nav_button(&self, button: MapNavButton) {
        self.record(format!("focus {:?}", button));
    }

    fn set_map_nav_button_attributes(
        &self,
        button: MapNavButton,
        attributes: &AccessibleAttributes,
    ) {
        self.state.lock().button_labels[button.index()] = Some(attributes.aria_label.clone());
    }
}

/// Host that records mounted groups and focused proxies
#[derive(Default)]
pub struct RecordingHost {
    pub mounted: Mutex<Vec<ProxyGroup>>,
    pub focused: Mutex<Vec<String>>,
}

impl ProxyHost for RecordingHost {
    fn mount(&self, group: &ProxyGroup) {
        self.mounted.lock().push(group.clone());
    }

    fn unmount(&self, group: ProxyGroupId) {
        self.mounted.lock().retain(|g| g.id != group);
    }

    fn focus(&self, button: &ProxyButton) {
        self.focused.lock().push(button.label.clone());
    }
}

pub struct Fixture {
    pub events: Arc<EventBus>,
    pub chart: Arc<MockChart>,
    pub host: Arc<RecordingHost>,
    pub component: ZoomComponent,
}

pub fn fixture_with(settings: &AccessibilitySettings) -> Fixture {
    let events = Arc::new(EventBus::new());
    let chart = MockChart::new(events.clone());
    let host = Arc::new(RecordingHost::default());
    let mut component =
        ZoomComponent::from_settings(chart.clone(), host.clone(), settings, events.clone());
    component.init();

    Fixture {
        events,
        chart,
        host,
        component,
    }
}

pub fn fixture() -> Fixture {
    fixture_with(&AccessibilitySettings::default())
}
