use std::any::TypeId;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;
use tracing::trace;
use uuid::Uuid;

/// Identifies one subscription so it can be removed again
pub type SubscriptionId = Uuid;

/// Chart lifecycle event bus
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<TypeId, Vec<(SubscriptionId, Box<dyn EventHandler>)>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Chart lifecycle events
pub mod events {
    use super::Event;

    /// The chart finished redrawing; visual controls may have been rebuilt
    #[derive(Debug, Clone, Default)]
    pub struct ChartRedraw;

    /// The chart drilled down into a nested view
    #[derive(Debug, Clone, Default)]
    pub struct ChartDrilldown {
        pub series_name: Option<String>,
    }

    /// The chart drilled all the way up
    #[derive(Debug, Clone, Default)]
    pub struct ChartDrillupAll;

    /// The reset-zoom button was just shown
    #[derive(Debug, Clone, Default)]
    pub struct ResetZoomShown;

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(ChartRedraw, ChartDrilldown, ChartDrillupAll, ResetZoomShown);
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) -> SubscriptionId {
        let id = Uuid::new_v4();
        let type_id = TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push((id, handler));
        id
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.lock();
        let mut removed = false;
        for list in handlers.values_mut() {
            let before = list.len();
            list.retain(|(sub, _)| *sub != id);
            removed |= list.len() != before;
        }
        handlers.retain(|_, list| !list.is_empty());
        removed
    }

    /// Publish an event. Handlers run synchronously, in subscription order,
    /// and must not publish or subscribe on the same bus.
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            let name = std::any::type_name::<E>();
            trace!("Publishing {} to {} handlers", name, event_handlers.len());
            for (_, handler) in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }

    /// Number of live subscriptions across all event types
    pub fn subscription_count(&self) -> usize {
        self.handlers.lock().values().map(Vec::len).sum()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

/// Tracks the subscriptions a component made so they can be dropped together
pub struct EventSubscriptions {
    bus: Arc<EventBus>,
    ids: Vec<SubscriptionId>,
}

impl EventSubscriptions {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus, ids: Vec::new() }
    }

    /// Subscribe a closure to events of type `E`
    pub fn add<E, F>(&mut self, f: F) -> SubscriptionId
    where
        E: Event,
        F: FnMut(&dyn Event) + Send + Sync + 'static,
    {
        let id = self.bus.subscribe::<E>(handler_from_fn(f));
        self.ids.push(id);
        id
    }

    /// Unsubscribe everything added through this helper
    pub fn remove_all(&mut self) {
        for id in self.ids.drain(..) {
            self.bus.unsubscribe(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Drop for EventSubscriptions {
    fn drop(&mut self) {
        self.remove_all();
    }
}
