use ck_core::{AccessibleAttributes, ChartActions, ChartControl, Rect};
use uuid::Uuid;

pub type ProxyGroupId = Uuid;
pub type ProxyButtonId = Uuid;

/// Logical role a proxy group stands in for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProxyRole {
    ResetZoom,
    DrillUp,
}

impl ProxyRole {
    pub const ALL: [ProxyRole; 2] = [ProxyRole::ResetZoom, ProxyRole::DrillUp];

    /// The visual control mirrored by proxies of this role
    pub fn control(self) -> ChartControl {
        match self {
            ProxyRole::ResetZoom => ChartControl::ResetZoomButton,
            ProxyRole::DrillUp => ChartControl::DrillUpButton,
        }
    }
}

/// Invisible, focusable stand-in for one visual control
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyButton {
    pub id: ProxyButtonId,
    pub target: ChartControl,

    /// Matches the visual control's bounds at creation time
    pub bounds: Rect,

    pub label: String,
    pub attributes: AccessibleAttributes,
}

impl ProxyButton {
    pub fn new(
        target: ChartControl,
        bounds: Rect,
        label: impl Into<String>,
        mut attributes: AccessibleAttributes,
    ) -> Self {
        let label = label.into();
        attributes.aria_label = label.clone();
        Self {
            id: Uuid::new_v4(),
            target,
            bounds,
            label,
            attributes,
        }
    }

    /// Synthetic click forwarded to the visual control's action
    pub fn click<C: ChartActions + ?Sized>(&self, chart: &C) {
        match self.target {
            ChartControl::ResetZoomButton => chart.zoom_out(),
            ChartControl::DrillUpButton => chart.drill_up(),
        }
    }
}

/// Container for the proxies of one role. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyGroup {
    pub id: ProxyGroupId,
    pub role: ProxyRole,
    pub attributes: AccessibleAttributes,
    pub buttons: Vec<ProxyButton>,
}

impl ProxyGroup {
    pub fn new(role: ProxyRole, buttons: Vec<ProxyButton>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            attributes: AccessibleAttributes {
                role: "group".to_string(),
                tab_index: -1,
                aria_label: String::new(),
                aria_hidden: false,
            },
            buttons,
        }
    }

    pub fn first_button(&self) -> Option<&ProxyButton> {
        self.buttons.first()
    }
}
