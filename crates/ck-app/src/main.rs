//! Headless keyboard navigation demo
//!
//! Runs a scripted sequence of key presses against an in-memory map chart
//! and logs where focus lands after each one.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ck_core::{
    AccessibilitySettings, Direction, EventBus, Key, KeyPress, KeyboardNavigationProvider,
};
use ck_zoom::ZoomComponent;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod demo_chart;
mod sequencer;

use demo_chart::{DemoChart, TracingProxyHost};
use sequencer::Sequencer;

#[derive(Parser)]
#[command(name = "keynav-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Accessibility settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Key presses to replay, in order. A built-in script runs when empty.
    #[arg(value_enum, ignore_case = true)]
    keys: Vec<ScriptKey>,
}

/// A key press accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScriptKey {
    Tab,
    #[value(name = "shift+tab")]
    ShiftTab,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    #[value(alias = "esc")]
    Escape,
}

impl ScriptKey {
    fn press(self) -> KeyPress {
        match self {
            ScriptKey::Tab => KeyPress::new(Key::Tab),
            ScriptKey::ShiftTab => KeyPress::shifted(Key::Tab),
            ScriptKey::Up => KeyPress::new(Key::ArrowUp),
            ScriptKey::Down => KeyPress::new(Key::ArrowDown),
            ScriptKey::Left => KeyPress::new(Key::ArrowLeft),
            ScriptKey::Right => KeyPress::new(Key::ArrowRight),
            ScriptKey::Enter => KeyPress::new(Key::Enter),
            ScriptKey::Space => KeyPress::new(Key::Space),
            ScriptKey::Escape => KeyPress::new(Key::Escape),
        }
    }
}

const DEFAULT_SCRIPT: &[ScriptKey] = &[
    ScriptKey::Tab,
    ScriptKey::Tab,
    ScriptKey::Right,
    ScriptKey::Down,
    ScriptKey::Enter,
    ScriptKey::Tab,
    ScriptKey::ShiftTab,
    ScriptKey::ShiftTab,
    ScriptKey::ShiftTab,
    ScriptKey::Enter,
    ScriptKey::Tab,
    ScriptKey::Enter,
];

impl Cli {
    fn load_settings(&self) -> Result<AccessibilitySettings> {
        match &self.settings {
            Some(path) => AccessibilitySettings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display())),
            None => Ok(AccessibilitySettings::default()),
        }
    }

    fn script(&self) -> Vec<KeyPress> {
        let keys = if self.keys.is_empty() { DEFAULT_SCRIPT } else { &self.keys[..] };
        keys.iter().map(|key| key.press()).collect()
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let settings = cli.load_settings()?;
    let script = cli.script();
    info!("Starting keyboard navigation demo with {} key presses", script.len());

    let events = Arc::new(EventBus::new());
    let chart = Arc::new(DemoChart::new(events.clone()));
    let host = Arc::new(TracingProxyHost);
    let mut component = ZoomComponent::from_settings(chart.clone(), host, &settings, events);
    component.init();
    component.on_chart_update();
    chart.show_reset_zoom();

    let mut sequencer = Sequencer::new(component.keyboard_navigation());
    if !sequencer.enter(Direction::Forward)? {
        info!("No keyboard-navigable zoom controls");
        return Ok(());
    }

    for press in script {
        let response = sequencer.press(press)?;
        info!(
            "{:?}{} -> {:?}, focus on {:?}",
            press.key,
            if press.shift() { " (shift)" } else { "" },
            response,
            sequencer.current()
        );
        if sequencer.current().is_none() {
            break;
        }
    }

    info!("Final chart state: {}", chart.summary());
    component.destroy();
    Ok(())
}
