//! Narrow accessor traits onto the chart
//!
//! Components never hold a full chart object. They receive the slice of
//! chart behavior they need: axis extremes, control presence and bounds,
//! and action triggers.

use egui::Rect;

use crate::axis::{AxisExtremes, AxisKind};

/// A visual chart control that gets an accessible proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartControl {
    ResetZoomButton,
    DrillUpButton,
}

/// One of the two map navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapNavButton {
    ZoomIn,
    ZoomOut,
}

impl MapNavButton {
    pub const ALL: [MapNavButton; 2] = [MapNavButton::ZoomIn, MapNavButton::ZoomOut];

    /// Position of the button in the chart's map navigation button list
    pub fn index(self) -> usize {
        match self {
            MapNavButton::ZoomIn => 0,
            MapNavButton::ZoomOut => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(MapNavButton::ZoomIn),
            1 => Some(MapNavButton::ZoomOut),
            _ => None,
        }
    }
}

/// Visual state of a chart button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Selected,
}

/// Accessibility attributes applied to a proxy or chart element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleAttributes {
    /// Role marker exposed to assistive technology
    pub role: String,

    /// -1 keeps the element out of the tab order
    pub tab_index: i32,

    /// Accessible name
    pub aria_label: String,

    pub aria_hidden: bool,
}

impl AccessibleAttributes {
    /// Attributes for a button that is reachable only through keyboard
    /// navigation, never through plain tabbing
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            role: "button".to_string(),
            tab_index: -1,
            aria_label: label.into(),
            aria_hidden: false,
        }
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn is_tabbable(&self) -> bool {
        self.tab_index >= 0
    }
}

impl Default for AccessibleAttributes {
    fn default() -> Self {
        Self::button(String::new())
    }
}

/// Read/write access to axis extremes
pub trait AxisAccess: Send + Sync {
    /// Extremes of the first axis of `kind`, if the chart has one
    fn extremes(&self, kind: AxisKind) -> Option<AxisExtremes>;

    /// Apply new visible extremes to the first axis of `kind`
    fn set_extremes(&self, kind: AxisKind, min: f64, max: f64);
}

/// Presence and geometry of visual controls
pub trait ControlAccess: Send + Sync {
    /// Current bounds of the control, or `None` if the chart does not show it
    fn control_bounds(&self, control: ChartControl) -> Option<Rect>;

    /// Text rendered on the control, e.g. the drill-up back text
    fn control_text(&self, control: ChartControl) -> Option<String>;

    /// Whether map zoom is currently active
    fn map_zoom_enabled(&self) -> bool;

    fn map_nav_button_count(&self) -> usize;

    fn map_nav_button_bounds(&self, button: MapNavButton) -> Option<Rect>;
}

/// Chart actions triggered from the keyboard
pub trait ChartActions: Send + Sync {
    fn zoom_out(&self);

    fn drill_up(&self);

    /// Restore the full map view
    fn reset_map_zoom(&self);

    /// Fire a click on the button's underlying element
    fn click_map_nav_button(&self, button: MapNavButton);

    fn set_map_nav_button_state(&self, button: MapNavButton, state: ButtonState);

    /// Move focus to the button and draw the focus border around it
    fn focus_map_nav_button(&self, button: MapNavButton);

    fn set_map_nav_button_attributes(
        &self,
        button: MapNavButton,
        attributes: &AccessibleAttributes,
    );
}

/// Everything the zoom component needs from a chart
pub trait ChartAccess: AxisAccess + ControlAccess + ChartActions {}

impl<T: AxisAccess + ControlAccess + ChartActions + ?Sized> ChartAccess for T {}
