use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// What a registered host listener feeds into the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Document scroll events.
    Scroll,
    /// Viewport resize events.
    Resize,
    /// Pointer events.
    Pointer,
    /// Animation-frame callbacks.
    Frame,
}

/// Shared flag that host callbacks check before touching the composer.
///
/// Cloning is cheap; every clone observes the same flag. Only the composer
/// can clear it.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub(super) fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Whether the owning composer is still live.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub(super) fn kill(&self) {
        self.0.set(false);
    }
}

/// Release callbacks for host listeners, run once at teardown.
#[derive(Default)]
pub struct ListenerRegistry {
    entries: Vec<(ListenerKind, Box<dyn FnOnce()>)>,
}

impl ListenerRegistry {
    /// Record how to detach a listener.
    pub fn register(&mut self, kind: ListenerKind, release: impl FnOnce() + 'static) {
        self.entries.push((kind, Box::new(release)));
    }

    /// Number of listeners still attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listeners are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attached listeners of `kind`.
    #[must_use]
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.entries.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Detach every listener, most recent first. Returns how many ran.
    pub fn release_all(&mut self) -> usize {
        let released = self.entries.len();
        while let Some((kind, release)) = self.entries.pop() {
            log::trace!("releasing {kind:?} listener");
            release();
        }
        released
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(kind, _)| kind))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn release_runs_each_callback_once_in_reverse() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        for kind in [ListenerKind::Scroll, ListenerKind::Frame] {
            let order = Rc::clone(&order);
            registry.register(kind, move || order.borrow_mut().push(kind));
        }
        assert_eq!(registry.count(ListenerKind::Scroll), 1);
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.release_all(), 2);
        assert!(registry.is_empty());
        assert_eq!(registry.release_all(), 0);
        assert_eq!(*order.borrow(), vec![ListenerKind::Frame, ListenerKind::Scroll]);
    }

    #[test]
    fn liveness_is_shared() {
        let live = Liveness::new();
        let seen_by_callback = live.clone();
        assert!(seen_by_callback.is_alive());
        live.kill();
        assert!(!seen_by_callback.is_alive());
    }
}
