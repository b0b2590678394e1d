//! Subscription - scoped ownership of a host registration
//!
//! Every registration handed to a [`ViewportAdapter`](crate::viewport::ViewportAdapter)
//! (scroll listener, visibility watch) comes back as a [`Subscription`].
//! The teardown runs exactly once: either through [`Subscription::dispose`]
//! or when the handle is dropped, whichever happens first.

use std::fmt::{self, Debug, Formatter};

type Teardown = Box<dyn FnOnce() + Send>;

/// Handle to an active host registration
#[must_use = "dropping a subscription immediately tears it down"]
pub struct Subscription {
    teardown: Option<Teardown>,
}

impl Subscription {
    /// Wrap a teardown closure
    #[inline]
    pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Whether the teardown is still pending
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    /// Release the registration now
    #[inline]
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Subscription, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let sub = Subscription::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (sub, count)
    }

    #[test]
    fn dispose_runs_teardown_once() {
        let (sub, count) = counting();
        assert!(sub.is_active());
        sub.dispose();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_runs_teardown_once() {
        let (sub, count) = counting();
        drop(sub);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn teardown_runs_on_unwind() {
        let (sub, count) = counting();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _held = sub;
            panic!("mount failed");
        }));
        assert!(result.is_err());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
