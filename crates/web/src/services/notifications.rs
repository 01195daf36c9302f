// =============================================================================
// Cloudora Web - Toast Notifications Service
// =============================================================================
// Transient success/error toasts shown after form actions
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::TOAST_DURATION_MS;

/// Toast flavour, drives styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// What a toast says, before it is placed on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A notice currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    /// Add a notice and return the id of its toast.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Reactive handle on the toast stack, shared through [`crate::AppState`].
#[derive(Clone, Copy)]
pub struct Toaster {
    stack: RwSignal<ToastStack>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(ToastStack::default()),
        }
    }

    /// Show a notice and schedule its dismissal.
    pub fn show(&self, notice: Notice) {
        let mut id = 0;
        self.stack.update(|stack| id = stack.push(notice));

        let stack = self.stack;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            stack.update(|stack| stack.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|stack| stack.dismiss(id));
    }

    /// Visible toasts, tracked.
    pub fn toasts(&self) -> Vec<Toast> {
        self.stack.with(|stack| stack.toasts().to_vec())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut stack = ToastStack::default();
        let first = stack.push(Notice::success("Saved", "All good"));
        let second = stack.push(Notice::error("Oops", "Try again"));
        assert_ne!(first, second);
        assert_eq!(stack.toasts().len(), 2);

        stack.dismiss(first);
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].notice.kind, ToastKind::Error);

        stack.dismiss(first);
        stack.dismiss(second);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = ToastStack::default();
        let id = stack.push(Notice::success("a", "b"));
        stack.dismiss(id);
        assert_ne!(stack.push(Notice::success("c", "d")), id);
    }
}
