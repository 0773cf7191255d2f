use super::{Listen, SceneEvent};

/// Listener table for a single subscriber.
///
/// Hosts can embed this to implement [`super::SceneHost::subscribe`] /
/// [`super::SceneHost::unsubscribe`] and ask it whether an event should be
/// delivered. `Once` entries are consumed by delivery.
#[derive(Debug, Default, Clone)]
pub struct Subscriptions {
    slots: [Option<Listen>; 4],
}

impl Subscriptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in `event`. Re-subscribing replaces the previous mode.
    #[inline]
    pub fn subscribe(&mut self, event: SceneEvent, listen: Listen) {
        self.slots[event.index()] = Some(listen);
    }

    #[inline]
    pub fn unsubscribe(&mut self, event: SceneEvent) {
        self.slots[event.index()] = None;
    }

    #[inline]
    pub fn listen(&self, event: SceneEvent) -> Option<Listen> {
        self.slots[event.index()]
    }

    /// Returns whether `event` should be delivered, dropping a `Once` entry.
    pub fn deliver(&mut self, event: SceneEvent) -> bool {
        match self.slots[event.index()] {
            Some(Listen::Always) => true,
            Some(Listen::Once) => {
                self.slots[event.index()] = None;
                true
            }
            None => false,
        }
    }

    /// Number of events currently listened to.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
