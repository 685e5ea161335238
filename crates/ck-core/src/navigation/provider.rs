//! Navigation provider trait

use super::NavigationHandler;

/// Trait for components that expose keyboard-navigable controls
pub trait KeyboardNavigationProvider {
    /// Handlers in traversal order. The sequencer activates them in this
    /// order and skips any whose `validate()` fails.
    fn keyboard_navigation(&self) -> Vec<NavigationHandler>;
}
