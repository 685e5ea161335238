//! Accessible label formatting

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub const RESET_ZOOM_BUTTON: &str = "accessibility.zoom.resetZoomButton";
pub const DRILL_UP_BUTTON: &str = "accessibility.drillUpButton";
pub const MAP_ZOOM_IN: &str = "accessibility.zoom.mapZoomIn";
pub const MAP_ZOOM_OUT: &str = "accessibility.zoom.mapZoomOut";

/// Named values substituted into label templates
#[derive(Debug, Clone, Default)]
pub struct LabelContext {
    values: AHashMap<String, String>,
}

impl LabelContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Produces accessible names for chart controls
pub trait LabelFormatter: Send + Sync {
    fn format(&self, key: &str, context: &LabelContext) -> String;
}

/// Label templates for the zoom controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangOptions {
    pub reset_zoom_button: String,
    pub drill_up_button: String,
    pub map_zoom_in: String,
    pub map_zoom_out: String,
}

impl Default for LangOptions {
    fn default() -> Self {
        Self {
            reset_zoom_button: "Reset zoom".to_string(),
            drill_up_button: "{buttonText}".to_string(),
            map_zoom_in: "Zoom chart".to_string(),
            map_zoom_out: "Zoom out chart".to_string(),
        }
    }
}

impl LangOptions {
    fn template(&self, key: &str) -> Option<&str> {
        match key {
            RESET_ZOOM_BUTTON => Some(&self.reset_zoom_button),
            DRILL_UP_BUTTON => Some(&self.drill_up_button),
            MAP_ZOOM_IN => Some(&self.map_zoom_in),
            MAP_ZOOM_OUT => Some(&self.map_zoom_out),
            _ => None,
        }
    }
}

impl LabelFormatter for LangOptions {
    fn format(&self, key: &str, context: &LabelContext) -> String {
        match self.template(key) {
            Some(template) => substitute(template, context),
            None => key.to_string(),
        }
    }
}

/// Replace `{name}` placeholders with context values. Unknown names are
/// replaced with an empty string, unterminated braces are kept verbatim.
fn substitute(template: &str, context: &LabelContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                out.push_str(context.get(&after[..close]).unwrap_or_default());
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
