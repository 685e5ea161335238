//! Core functionality for keyboard-driven chart zoom accessibility
//!
//! This crate provides the chart-facing interface traits, axis panning,
//! the generic keyboard navigation state machine, lifecycle events,
//! label formatting and settings shared by the other crates.

pub mod axis;
pub mod chart;
pub mod error;
pub mod events;
pub mod lang;
pub mod navigation;
pub mod settings;

// Re-export commonly used types
pub use axis::{pan_step, pan_window, AxisExtremes, AxisKind, PanRequest, DEFAULT_PAN_GRANULARITY};
pub use chart::{
    AccessibleAttributes, AxisAccess, ButtonState, ChartAccess, ChartActions, ChartControl,
    ControlAccess, MapNavButton,
};
pub use error::{KeyNavError, Result};
pub use events::{EventBus, EventSubscriptions, SubscriptionId};
pub use lang::{LabelContext, LabelFormatter, LangOptions};
pub use navigation::{
    Direction, HandlerState, KeyPress, KeyboardNavigationProvider, NavigationHandler,
    NavigationHandlerBuilder, ResponseCode,
};
pub use settings::{AccessibilitySettings, KeyboardNavigationSettings};

/// Re-exported so downstream crates name keys and bounds with the same types.
pub use egui::{Key, Modifiers, Rect};
