//! In-memory chart used by the demo

use std::sync::Arc;

use ck_core::events::events::{ChartDrillupAll, ChartRedraw, ResetZoomShown};
use ck_core::{
    AccessibleAttributes, AxisAccess, AxisExtremes, AxisKind, ButtonState, ChartActions,
    ChartControl, ControlAccess, EventBus, MapNavButton, Rect,
};
use ck_proxy::{ProxyButton, ProxyGroup, ProxyGroupId, ProxyHost};
use egui::{pos2, vec2};
use parking_lot::RwLock;
use tracing::info;

const DATA_RANGE: (f64, f64) = (0.0, 100.0);

struct DemoState {
    zoomed: bool,
    drill_path: Vec<String>,
    map_zoom: bool,
    x: AxisExtremes,
    y: AxisExtremes,
    button_states: [ButtonState; 2],
}

/// A zoomable, drillable map chart that redraws through its event bus
pub struct DemoChart {
    state: RwLock<DemoState>,
    events: Arc<EventBus>,
}

impl DemoChart {
    /// Start one drill level deep with map zoom active. The reset-zoom
    /// button appears once [`DemoChart::show_reset_zoom`] is called.
    pub fn new(events: Arc<EventBus>) -> Self {
        let (lo, hi) = DATA_RANGE;
        Self {
            state: RwLock::new(DemoState {
                zoomed: false,
                drill_path: vec!["Regions".to_string()],
                map_zoom: true,
                x: AxisExtremes::new(20.0, 50.0, lo, hi),
                y: AxisExtremes::new(60.0, 90.0, lo, hi),
                button_states: [ButtonState::Normal; 2],
            }),
            events,
        }
    }

    pub fn redraw(&self) {
        self.events.publish(ChartRedraw);
    }

    pub fn show_reset_zoom(&self) {
        self.state.write().zoomed = true;
        self.events.publish(ResetZoomShown);
    }

    pub fn summary(&self) -> String {
        let state = self.state.read();
        format!(
            "zoomed={} drill_path={:?} x=[{:.2}, {:.2}] y=[{:.2}, {:.2}] map_buttons={:?}",
            state.zoomed,
            state.drill_path,
            state.x.min,
            state.x.max,
            state.y.min,
            state.y.max,
            state.button_states
        )
    }

    fn axis_mut(state: &mut DemoState, kind: AxisKind) -> &mut AxisExtremes {
        match kind {
            AxisKind::X => &mut state.x,
            AxisKind::Y => &mut state.y,
        }
    }

    /// Scale both map axes around their centers, clamped to the data range
    fn scale_map(&self, factor: f64) {
        {
            let mut state = self.state.write();
            for kind in [AxisKind::X, AxisKind::Y] {
                let axis = Self::axis_mut(&mut state, kind);
                let center = (axis.min + axis.max) / 2.0;
                let half = ((axis.max - axis.min) * factor / 2.0)
                    .min((axis.data_max - axis.data_min) / 2.0);
                let min = (center - half).max(axis.data_min);
                let max = (min + 2.0 * half).min(axis.data_max);
                axis.min = max - 2.0 * half;
                axis.max = max;
            }
        }
        self.redraw();
    }
}

impl AxisAccess for DemoChart {
    fn extremes(&self, kind: AxisKind) -> Option<AxisExtremes> {
        let state = self.state.read();
        Some(match kind {
            AxisKind::X => state.x,
            AxisKind::Y => state.y,
        })
    }

    fn set_extremes(&self, kind: AxisKind, min: f64, max: f64) {
        {
            let mut state = self.state.write();
            let axis = Self::axis_mut(&mut state, kind);
            axis.min = min;
            axis.max = max;
        }
        info!("{:?} axis extremes set to [{:.2}, {:.2}]", kind, min, max);
        self.redraw();
    }
}

impl ControlAccess for DemoChart {
    fn control_bounds(&self, control: ChartControl) -> Option<Rect> {
        let state = self.state.read();
        match control {
            ChartControl::ResetZoomButton if state.zoomed => {
                Some(Rect::from_min_size(pos2(680.0, 12.0), vec2(96.0, 28.0)))
            }
            ChartControl::DrillUpButton if !state.drill_path.is_empty() => {
                Some(Rect::from_min_size(pos2(12.0, 12.0), vec2(140.0, 28.0)))
            }
            _ => None,
        }
    }

    fn control_text(&self, control: ChartControl) -> Option<String> {
        let state = self.state.read();
        match control {
            ChartControl::ResetZoomButton => state.zoomed.then(|| "Reset zoom".to_string()),
            ChartControl::DrillUpButton => {
                state.drill_path.last().map(|parent| format!("< Back to {}", parent))
            }
        }
    }

    fn map_zoom_enabled(&self) -> bool {
        self.state.read().map_zoom
    }

    fn map_nav_button_count(&self) -> usize {
        if self.map_zoom_enabled() {
            MapNavButton::ALL.len()
        } else {
            0
        }
    }

    fn map_nav_button_bounds(&self, button: MapNavButton) -> Option<Rect> {
        let top = 320.0 + 32.0 * button.index() as f32;
        self.map_zoom_enabled()
            .then(|| Rect::from_min_size(pos2(12.0, top), vec2(28.0, 28.0)))
    }
}

impl ChartActions for DemoChart {
    fn zoom_out(&self) {
        {
            let mut state = self.state.write();
            state.zoomed = false;
            let (lo, hi) = DATA_RANGE;
            state.x.min = lo;
            state.x.max = hi;
        }
        info!("Chart zoomed out");
        self.redraw();
    }

    fn drill_up(&self) {
        let parent = self.state.write().drill_path.pop();
        info!("Drilled up from {:?}", parent);
        self.events.publish(ChartDrillupAll);
    }

    fn reset_map_zoom(&self) {
        {
            let mut state = self.state.write();
            let (lo, hi) = DATA_RANGE;
            for kind in [AxisKind::X, AxisKind::Y] {
                let axis = Self::axis_mut(&mut state, kind);
                axis.min = lo;
                axis.max = hi;
            }
        }
        info!("Map zoom reset to full view");
        self.redraw();
    }

    fn click_map_nav_button(&self, button: MapNavButton) {
        info!("Map button {:?} clicked", button);
        match button {
            MapNavButton::ZoomIn => self.scale_map(0.5),
            MapNavButton::ZoomOut => self.scale_map(2.0),
        }
    }

    fn set_map_nav_button_state(&self, button: MapNavButton, state: ButtonState) {
        self.state.write().button_states[button.index()] = state;
    }

    fn focus_map_nav_button(&self, button: MapNavButton) {
        info!("Focus on map button {:?}", button);
    }

    fn set_map_nav_button_attributes(
        &self,
        button: MapNavButton,
        attributes: &AccessibleAttributes,
    ) {
        info!("Map button {:?} labelled {:?}", button, attributes.aria_label);
    }
}

/// Proxy host that reports the accessibility tree through tracing
#[derive(Default)]
pub struct TracingProxyHost;

impl ProxyHost for TracingProxyHost {
    fn mount(&self, group: &ProxyGroup) {
        for button in &group.buttons {
            info!("Mounted {:?} proxy {:?} at {:?}", group.role, button.label, button.bounds);
        }
    }

    fn unmount(&self, group: ProxyGroupId) {
        tracing::debug!("Unmounted proxy group {}", group);
    }

    fn focus(&self, button: &ProxyButton) {
        info!("Focus on proxy {:?}", button.label);
    }
}
