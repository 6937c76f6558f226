//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Toasts stack bottom-right and dismiss themselves after
//! [`TOAST_DURATION_MS`]. The list is plain data in an `RwSignal`; the
//! timer lives in [`notify`] so tests can drive the list directly.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Primary,
    Success,
    Neutral,
    Warning,
    Danger,
}

impl ToastVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "toast--primary",
            Self::Success => "toast--success",
            Self::Neutral => "toast--neutral",
            Self::Warning => "toast--warning",
            Self::Danger => "toast--danger",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Primary | Self::Neutral | Self::Danger => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, variant: ToastVariant, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, variant, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, variant: ToastVariant, message: impl Into<String>) {
    let mut id = 0;
    let message = message.into();
    toasts.update(|t| id = t.push(variant, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
