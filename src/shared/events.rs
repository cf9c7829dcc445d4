use std::cell::RefCell;
use std::rc::Rc;

/// Window-level event broadcast when the user asks for a data refresh.
/// Carries no payload.
pub const REFRESH_EVENT: &str = "navbarRefresh";

type Handler = Box<dyn FnMut()>;

/// In-process observers for refresh requests: zero or more handlers, no payload.
/// Cloning shares the same handler list.
#[derive(Clone, Default)]
pub struct RefreshBus {
    handlers: Rc<RefCell<Vec<Handler>>>,
}

impl RefreshBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut() + 'static) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every handler once, in subscription order. Handlers subscribed
    /// while notifying run from the next notification on.
    pub fn notify(&self) {
        let mut running = std::mem::take(&mut *self.handlers.borrow_mut());
        for handler in running.iter_mut() {
            handler();
        }
        let mut handlers = self.handlers.borrow_mut();
        let added = std::mem::take(&mut *handlers);
        *handlers = running;
        handlers.extend(added);
    }
}

impl std::fmt::Debug for RefreshBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshBus")
            .field("handlers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_notify_without_handlers_is_noop() {
        let bus = RefreshBus::new();
        assert!(bus.is_empty());
        bus.notify();
    }

    #[test]
    fn test_every_handler_runs_once_per_notify() {
        let bus = RefreshBus::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let (a, b) = (first.clone(), second.clone());
        bus.subscribe(move || a.set(a.get() + 1));
        bus.subscribe(move || b.set(b.get() + 1));

        bus.notify();
        bus.notify();

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_subscribe_during_notify_is_deferred() {
        let bus = RefreshBus::new();
        let late_calls = Rc::new(Cell::new(0));
        let inner_bus = bus.clone();
        let late = late_calls.clone();
        let mut subscribed = false;
        bus.subscribe(move || {
            if !subscribed {
                subscribed = true;
                let late = late.clone();
                inner_bus.subscribe(move || late.set(late.get() + 1));
            }
        });

        bus.notify();
        assert_eq!(late_calls.get(), 0);
        assert_eq!(bus.len(), 2);

        bus.notify();
        assert_eq!(late_calls.get(), 1);
    }
}
