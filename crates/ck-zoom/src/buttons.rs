//! Single-button controls: reset zoom and drill up

use std::sync::Arc;

use ck_core::{ChartAccess, Key, NavigationHandler, ResponseCode};
use ck_proxy::{ProxyOverlayStore, ProxyRole};
use parking_lot::RwLock;
use tracing::debug;

const TRAVERSAL_KEYS: [Key; 5] = [
    Key::Tab,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
];

/// Response after clicking the proxy for `role`. Drilling up can remove the
/// drill-up button itself, so focus moves back.
fn click_response(role: ProxyRole) -> ResponseCode {
    match role {
        ProxyRole::ResetZoom => ResponseCode::Success,
        ProxyRole::DrillUp => ResponseCode::MoveFocusPrev,
    }
}

fn handler_name(role: ProxyRole) -> &'static str {
    match role {
        ProxyRole::ResetZoom => "reset-zoom",
        ProxyRole::DrillUp => "drill-up",
    }
}

/// Navigation handler for a control with a single proxy button.
///
/// There is nothing to traverse inside the control, so tab and arrow keys
/// always hand focus to a neighbouring control.
pub fn button_navigation(
    role: ProxyRole,
    chart: Arc<dyn ChartAccess>,
    proxies: Arc<RwLock<ProxyOverlayStore>>,
) -> NavigationHandler {
    let validate_chart = Arc::clone(&chart);
    let validate_proxies = Arc::clone(&proxies);
    let init_proxies = Arc::clone(&proxies);

    NavigationHandler::builder(handler_name(role))
        .on_keys(&TRAVERSAL_KEYS, |press| ResponseCode::move_focus(press.direction()))
        .on_keys(&[Key::Space, Key::Enter], move |_| {
            // Copy the proxy out first: the click may redraw the chart and
            // rebuild the store.
            let button = proxies.read().button(role).cloned();
            match button {
                Some(button) => {
                    debug!("Clicking {:?} proxy", role);
                    button.click(&*chart);
                    click_response(role)
                }
                None => ResponseCode::Success,
            }
        })
        .validate(move || {
            validate_chart.control_bounds(role.control()).is_some()
                && validate_proxies.read().contains(role)
        })
        .init(move |_| {
            init_proxies.read().focus(role);
        })
        .build()
}
