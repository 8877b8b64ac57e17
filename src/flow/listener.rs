// Notification seam for indicator, background and button widgets

use std::cell::RefCell;
use std::rc::Rc;

use super::types::FlowOutcome;

/// Receives page and terminal notifications from the flow core
///
/// All methods default to no-ops so widgets implement only what they draw.
pub trait FlowListener {
    fn on_page_selected(&mut self, _index: usize) {}

    fn on_page_changing(&mut self, _from: usize, _to: usize, _progress: f32) {}

    fn on_finished(&mut self, _outcome: &FlowOutcome) {}
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq)]
pub enum FlowNotification {
    PageSelected { index: usize },
    PageChanging { from: usize, to: usize, progress: f32 },
    Finished(FlowOutcome),
}

/// Listener that records every notification into a shared buffer
///
/// Clones share the buffer, so a host keeps one handle and gives the other to the flow.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<FlowNotification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<FlowNotification> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn drain(&self) -> Vec<FlowNotification> {
        self.entries.borrow_mut().drain(..).collect()
    }
}

impl FlowListener for NotificationLog {
    fn on_page_selected(&mut self, index: usize) {
        self.entries
            .borrow_mut()
            .push(FlowNotification::PageSelected { index });
    }

    fn on_page_changing(&mut self, from: usize, to: usize, progress: f32) {
        self.entries
            .borrow_mut()
            .push(FlowNotification::PageChanging { from, to, progress });
    }

    fn on_finished(&mut self, outcome: &FlowOutcome) {
        self.entries
            .borrow_mut()
            .push(FlowNotification::Finished(outcome.clone()));
    }
}

/// Broadcasts notifications to every registered listener
#[derive(Default)]
pub(crate) struct ListenerSet {
    listeners: Vec<Box<dyn FlowListener>>,
}

impl ListenerSet {
    pub(crate) fn new(listeners: Vec<Box<dyn FlowListener>>) -> Self {
        Self { listeners }
    }

    pub(crate) fn push(&mut self, listener: Box<dyn FlowListener>) {
        self.listeners.push(listener);
    }

    pub(crate) fn page_selected(&mut self, index: usize) {
        for listener in self.listeners.iter_mut() {
            listener.on_page_selected(index);
        }
    }

    pub(crate) fn page_changing(&mut self, from: usize, to: usize, progress: f32) {
        for listener in self.listeners.iter_mut() {
            listener.on_page_changing(from, to, progress);
        }
    }

    pub(crate) fn finished(&mut self, outcome: &FlowOutcome) {
        for listener in self.listeners.iter_mut() {
            listener.on_finished(outcome);
        }
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_log_clones_share_entries() {
        let log = NotificationLog::new();
        let mut set = ListenerSet::new(vec![Box::new(log.clone())]);

        set.page_selected(1);
        set.page_changing(1, 2, 0.5);
        set.finished(&FlowOutcome::Cancelled {
            key: "k".to_string(),
        });

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[0], FlowNotification::PageSelected { index: 1 });
        assert!(matches!(
            log.entries()[2],
            FlowNotification::Finished(FlowOutcome::Cancelled { .. })
        ));

        let drained = log.drain();
        assert_eq!(drained.len(), 3);
        assert!(log.is_empty());
    }
}
