use std::collections::BTreeMap;

use crate::foundation::core::Progress;

/// Placement of the scroll container inside the document, in pixels.
///
/// Progress runs from the moment the container top reaches the viewport top
/// to the moment the container bottom reaches the viewport bottom.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollGeometry {
    /// Document offset of the container top.
    pub container_top: f64,
    /// Total container height.
    pub container_height: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// Container scrolled past the viewport top for a document scroll position.
    pub fn offset(&self, scroll_y: f64) -> f64 {
        scroll_y - self.container_top
    }

    /// Distance the container can travel through the viewport; never negative.
    pub fn scrollable_height(&self) -> f64 {
        (self.container_height - self.viewport_height).max(0.0)
    }

    /// Normalized progress for a document scroll position.
    pub fn progress(&self, scroll_y: f64) -> Progress {
        Progress::from_scroll(self.offset(scroll_y), self.scrollable_height())
    }
}

/// Handle returned by [`ScrollProgressTracker::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type ProgressCallback = Box<dyn FnMut(Progress)>;

/// Single writer of scroll progress, publishing every update to its subscribers.
///
/// Updates are never debounced: each call to [`update`](Self::update) notifies
/// every live subscriber, in subscription order, before returning.
pub struct ScrollProgressTracker {
    progress: Progress,
    next_id: u64,
    subscribers: BTreeMap<SubscriptionId, ProgressCallback>,
}

impl Default for ScrollProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScrollProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollProgressTracker")
            .field("progress", &self.progress)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ScrollProgressTracker {
    /// Tracker at [`Progress::START`] with no subscribers.
    pub fn new() -> Self {
        Self {
            progress: Progress::START,
            next_id: 0,
            subscribers: BTreeMap::new(),
        }
    }

    /// Most recently published progress.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Register `callback` for every future update.
    pub fn subscribe(&mut self, callback: impl FnMut(Progress) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, Box::new(callback));
        tracing::debug!(id = id.0, "scroll subscriber added");
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.remove(&id).is_some();
        if removed {
            tracing::debug!(id = id.0, "scroll subscriber removed");
        }
        removed
    }

    /// Drop every subscription, returning how many were live.
    pub fn unsubscribe_all(&mut self) -> usize {
        let n = self.subscribers.len();
        self.subscribers.clear();
        n
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Publish progress for a raw scroll event.
    pub fn update(&mut self, offset: f64, scrollable_height: f64) -> Progress {
        self.publish(Progress::from_scroll(offset, scrollable_height))
    }

    /// Publish progress for a document scroll position inside `geometry`.
    pub fn update_scroll_y(&mut self, geometry: &ScrollGeometry, scroll_y: f64) -> Progress {
        self.publish(geometry.progress(scroll_y))
    }

    /// Publish an already-normalized progress.
    pub fn publish(&mut self, progress: Progress) -> Progress {
        self.progress = progress;
        tracing::trace!(
            progress = progress.get(),
            subscribers = self.subscribers.len(),
            "scroll progress"
        );
        for callback in self.subscribers.values_mut() {
            callback(progress);
        }
        progress
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
