//! Zoom accessibility component

use std::sync::Arc;

use ck_core::events::events::{ChartDrilldown, ChartDrillupAll, ChartRedraw, ResetZoomShown};
use ck_core::events::Event;
use ck_core::{
    AccessibilitySettings, ChartAccess, EventBus, EventSubscriptions, KeyboardNavigationProvider,
    KeyboardNavigationSettings, LabelFormatter, NavigationHandler,
};
use ck_proxy::{ProxyHost, ProxyOverlayStore, ProxyRole};
use parking_lot::RwLock;
use tracing::debug;

use crate::buttons::button_navigation;
use crate::map_zoom::MapZoomController;

/// Wires chart lifecycle events to proxy refreshes and exposes the zoom
/// controls to the keyboard sequencer
pub struct ZoomComponent {
    chart: Arc<dyn ChartAccess>,
    lang: Arc<dyn LabelFormatter>,
    proxies: Arc<RwLock<ProxyOverlayStore>>,
    map_zoom: Arc<MapZoomController>,
    subscriptions: EventSubscriptions,
    settings: KeyboardNavigationSettings,
}

impl ZoomComponent {
    pub fn new(
        chart: Arc<dyn ChartAccess>,
        host: Arc<dyn ProxyHost>,
        lang: Arc<dyn LabelFormatter>,
        settings: KeyboardNavigationSettings,
        events: Arc<EventBus>,
    ) -> Self {
        let map_zoom = Arc::new(MapZoomController::new(
            Arc::clone(&chart),
            Arc::clone(&lang),
            settings.pan_granularity,
        ));

        Self {
            chart,
            lang,
            proxies: Arc::new(RwLock::new(ProxyOverlayStore::new(host))),
            map_zoom,
            subscriptions: EventSubscriptions::new(events),
            settings,
        }
    }

    /// Build a component whose labels come from the settings' lang options
    pub fn from_settings(
        chart: Arc<dyn ChartAccess>,
        host: Arc<dyn ProxyHost>,
        settings: &AccessibilitySettings,
        events: Arc<EventBus>,
    ) -> Self {
        Self::new(
            chart,
            host,
            Arc::new(settings.lang.clone()),
            settings.keyboard_navigation.clone(),
            events,
        )
    }

    /// Subscribe to the chart events that invalidate proxies. Calling this
    /// again replaces the previous subscriptions.
    pub fn init(&mut self) {
        self.subscriptions.remove_all();
        self.refresh_on::<ChartRedraw>();
        self.refresh_on::<ChartDrilldown>();
        self.refresh_on::<ChartDrillupAll>();
        self.refresh_on::<ResetZoomShown>();
        debug!("Zoom component subscribed to {} chart events", self.subscriptions.len());
    }

    fn refresh_on<E: Event>(&mut self) {
        let chart = Arc::clone(&self.chart);
        let lang = Arc::clone(&self.lang);
        let proxies = Arc::clone(&self.proxies);
        self.subscriptions.add::<E, _>(move |_| {
            proxies.write().refresh_all(&*chart, &*lang);
        });
    }

    /// Chart options or series changed
    pub fn on_chart_update(&self) {
        self.map_zoom.update_button_attributes();
        self.update_proxy_overlays();
    }

    /// Chart rendered
    pub fn on_chart_render(&self) {
        self.update_proxy_overlays();
    }

    /// Rebuild the reset-zoom and drill-up proxies
    pub fn update_proxy_overlays(&self) {
        self.proxies.write().refresh_all(&*self.chart, &*self.lang);
    }

    /// Unsubscribe from the chart and remove every proxy
    pub fn destroy(&mut self) {
        self.subscriptions.remove_all();
        self.proxies.write().clear();
        debug!("Zoom component destroyed");
    }

    pub fn proxies(&self) -> Arc<RwLock<ProxyOverlayStore>> {
        Arc::clone(&self.proxies)
    }

    pub fn map_zoom(&self) -> Arc<MapZoomController> {
        Arc::clone(&self.map_zoom)
    }

    pub fn reset_zoom_navigation(&self) -> NavigationHandler {
        button_navigation(ProxyRole::ResetZoom, Arc::clone(&self.chart), Arc::clone(&self.proxies))
    }

    pub fn drill_up_navigation(&self) -> NavigationHandler {
        button_navigation(ProxyRole::DrillUp, Arc::clone(&self.chart), Arc::clone(&self.proxies))
    }

    pub fn map_zoom_navigation(&self) -> NavigationHandler {
        self.map_zoom.navigation()
    }
}

impl KeyboardNavigationProvider for ZoomComponent {
    fn keyboard_navigation(&self) -> Vec<NavigationHandler> {
        if !self.settings.enabled {
            return Vec::new();
        }

        vec![
            self.reset_zoom_navigation(),
            self.drill_up_navigation(),
            self.map_zoom_navigation(),
        ]
    }
}
