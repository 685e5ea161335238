//! Keyboard navigation for chart zoom, drill-up and map zoom controls
//!
//! [`ZoomComponent`] keeps the accessible proxies in step with the chart
//! and hands the external focus sequencer one navigation handler per
//! control, in traversal order.

pub mod buttons;
pub mod component;
pub mod map_zoom;

pub use buttons::button_navigation;
pub use component::ZoomComponent;
pub use map_zoom::MapZoomController;
