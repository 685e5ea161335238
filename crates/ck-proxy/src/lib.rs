//! Accessible proxy overlays for chart controls
//!
//! Visual chart buttons are destroyed and rebuilt on every redraw, so the
//! invisible stand-ins exposed to assistive technology are rebuilt with
//! them instead of being patched in place.

pub mod group;
pub mod host;
pub mod store;

pub use group::{ProxyButton, ProxyButtonId, ProxyGroup, ProxyGroupId, ProxyRole};
pub use host::{NullProxyHost, ProxyHost};
pub use store::ProxyOverlayStore;
