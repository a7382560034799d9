//! Duplicate-submit protection for forms that call the backend.

use dioxus::prelude::*;

/// Tracks whether a submission is in flight. Copy it into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct SubmitGuard {
    busy: Signal<bool>,
}

/// Held while a submission runs; releases the guard on drop, including when
/// the task is cancelled.
pub struct SubmitTicket {
    busy: Signal<bool>,
}

impl SubmitGuard {
    pub fn new(busy: Signal<bool>) -> Self {
        Self { busy }
    }

    pub fn is_busy(&self) -> bool {
        (self.busy)()
    }

    /// `None` when another submission is still running.
    pub fn begin(&mut self) -> Option<SubmitTicket> {
        if *self.busy.peek() {
            tracing::debug!("Ignoring duplicate submit");
            return None;
        }
        self.busy.set(true);
        Some(SubmitTicket { busy: self.busy })
    }
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        // The owning component may already be gone.
        if let Ok(mut busy) = self.busy.try_write() {
            *busy = false;
        }
    }
}

pub fn use_submit_guard() -> SubmitGuard {
    SubmitGuard::new(use_signal(|| false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    fn double_submit() -> Element {
        let mut guard = use_submit_guard();
        use_hook(move || {
            let first = guard.begin();
            assert!(first.is_some());
            assert!(guard.is_busy());
            assert!(guard.begin().is_none());

            drop(first);
            assert!(!guard.is_busy());
            assert!(guard.begin().is_some());
        });
        rsx! {}
    }

    #[test]
    fn test_second_submit_ignored_until_ticket_drops() {
        let mut dom = VirtualDom::new(double_submit);
        dom.rebuild_in_place();
    }
}
