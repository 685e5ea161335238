//! Proxy overlay store

use std::sync::Arc;

use ahash::AHashMap;
use ck_core::lang::{DRILL_UP_BUTTON, RESET_ZOOM_BUTTON};
use ck_core::{AccessibleAttributes, ControlAccess, LabelContext, LabelFormatter, Rect};
use tracing::{debug, trace};

use crate::group::{ProxyButton, ProxyGroup, ProxyRole};
use crate::host::ProxyHost;

/// Owns the currently live proxy groups, at most one per role
pub struct ProxyOverlayStore {
    host: Arc<dyn ProxyHost>,
    groups: AHashMap<ProxyRole, ProxyGroup>,
}

impl ProxyOverlayStore {
    pub fn new(host: Arc<dyn ProxyHost>) -> Self {
        Self {
            host,
            groups: AHashMap::new(),
        }
    }

    /// Remove the group for `role` and its buttons. Returns whether a group
    /// was present.
    pub fn teardown(&mut self, role: ProxyRole) -> bool {
        let removed = self.groups.remove(&role);
        let present = removed.is_some();
        self.teardown_group(removed);
        present
    }

    /// Unmount a detached group, if any
    pub fn teardown_group(&self, group: Option<ProxyGroup>) {
        if let Some(group) = group {
            trace!("Unmounting {:?} proxy group {}", group.role, group.id);
            self.host.unmount(group.id);
        }
    }

    /// Replace the group for `role` with a fresh one holding a single proxy
    /// button over `bounds`
    pub fn recreate_group(
        &mut self,
        role: ProxyRole,
        bounds: Rect,
        label: impl Into<String>,
        attributes: AccessibleAttributes,
    ) -> &ProxyGroup {
        self.teardown(role);

        let button = ProxyButton::new(role.control(), bounds, label, attributes);
        let group = ProxyGroup::new(role, vec![button]);
        trace!("Mounting {:?} proxy group {}", role, group.id);
        self.host.mount(&group);

        self.groups.entry(role).or_insert(group)
    }

    /// Rebuild every proxy from the chart's current controls
    pub fn refresh_all<C, L>(&mut self, chart: &C, lang: &L)
    where
        C: ControlAccess + ?Sized,
        L: LabelFormatter + ?Sized,
    {
        for role in ProxyRole::ALL {
            self.teardown(role);
        }

        if let Some(bounds) = chart.control_bounds(ProxyRole::ResetZoom.control()) {
            let label = lang.format(RESET_ZOOM_BUTTON, &LabelContext::new());
            let attributes = AccessibleAttributes::button(label.clone());
            self.recreate_group(ProxyRole::ResetZoom, bounds, label, attributes);
        }

        let drill_up = ProxyRole::DrillUp.control();
        if let Some(bounds) = chart.control_bounds(drill_up) {
            let text = chart.control_text(drill_up).unwrap_or_default();
            let label = lang.format(DRILL_UP_BUTTON, &LabelContext::new().with("buttonText", text));
            let attributes = AccessibleAttributes::button(label.clone());
            self.recreate_group(ProxyRole::DrillUp, bounds, label, attributes);
        }

        debug!("Refreshed zoom proxies: {:?}", self.roles());
    }

    pub fn group(&self, role: ProxyRole) -> Option<&ProxyGroup> {
        self.groups.get(&role)
    }

    pub fn button(&self, role: ProxyRole) -> Option<&ProxyButton> {
        self.group(role).and_then(ProxyGroup::first_button)
    }

    pub fn contains(&self, role: ProxyRole) -> bool {
        self.groups.contains_key(&role)
    }

    /// Roles with a live group, in traversal order
    pub fn roles(&self) -> Vec<ProxyRole> {
        ProxyRole::ALL.into_iter().filter(|role| self.contains(*role)).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Move focus to the proxy for `role`. Returns false if it does not exist.
    pub fn focus(&self, role: ProxyRole) -> bool {
        match self.button(role) {
            Some(button) => {
                self.host.focus(button);
                true
            }
            None => false,
        }
    }

    /// Tear down every group
    pub fn clear(&mut self) {
        for role in ProxyRole::ALL {
            self.teardown(role);
        }
    }
}
