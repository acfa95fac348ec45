use tracing::trace;

use super::ModelIndex;

/// Structural change announced by a model to its views.
///
/// Insertions and resets come in pairs: the "about to" event fires before
/// the model changes and the second one after, both inside the mutating call.
/// Observers only receive the event; the model is mutably borrowed while it
/// notifies, so views must update from `first`/`last` and re-query once the
/// mutating call has returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelEvent {
    RowsAboutToBeInserted {
        parent: ModelIndex,
        first: usize,
        last: usize,
    },
    RowsInserted {
        parent: ModelIndex,
        first: usize,
        last: usize,
    },
    AboutToReset,
    Reset,
}

pub trait ModelObserver {
    fn notify(&mut self, event: &ModelEvent);
}

impl<F> ModelObserver for F
where
    F: FnMut(&ModelEvent),
{
    fn notify(&mut self, event: &ModelEvent) {
        self(event)
    }
}

/// Registration token returned by
/// [`ProcessModel::subscribe`](crate::ProcessModel::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn ModelObserver>)>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: Box<dyn ModelObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        trace!(observer = id.0, "observer subscribed");
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        let removed = self.entries.len() != before;
        trace!(observer = id.0, removed, "observer unsubscribed");
        removed
    }

    /// Delivers `event` to every observer in subscription order.
    pub fn emit(&mut self, event: ModelEvent) {
        trace!(?event, observers = self.entries.len(), "dispatching model event");
        for (_, observer) in &mut self.entries {
            observer.notify(&event);
        }
    }
}
