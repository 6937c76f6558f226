//! Reactive mirror of the session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is single-threaded (`Rc`) and lives in the hydrate-only
//! runtime. Components never touch it directly for rendering; they read
//! this struct of signals, which the runtime keeps current through
//! [`SignalView`] and event bus subscriptions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use session::{Address, ConnectView, SessionSnapshot, SessionView};

use crate::state::toast::{ToastState, ToastVariant, notify};

/// Signals describing the current session, provided via context.
#[derive(Clone, Copy)]
pub struct SessionUi {
    pub snapshot: RwSignal<SessionSnapshot>,
    /// Bumped on every sign-in and sign-out so gated pages reload.
    pub auth_epoch: RwSignal<u64>,
    /// Address the stored token is bound to, if any.
    pub signed_in_as: RwSignal<Option<Address>>,
}

impl SessionUi {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(SessionSnapshot::default()),
            auth_epoch: RwSignal::new(0),
            signed_in_as: RwSignal::new(None),
        }
    }

    /// Record a sign-in or sign-out announced on the bus.
    pub fn auth_changed(&self, address: Option<Address>) {
        self.signed_in_as.set(address);
        self.auth_epoch.update(|n| *n += 1);
    }
}

impl Default for SessionUi {
    fn default() -> Self {
        Self::new()
    }
}

/// [`SessionView`] that writes snapshots into [`SessionUi`] and errors into
/// the toast stack.
pub struct SignalView {
    pub ui: SessionUi,
    pub toasts: RwSignal<ToastState>,
}

impl SessionView for SignalView {
    fn render(&self, snapshot: &SessionSnapshot) {
        self.ui.snapshot.set(snapshot.clone());
    }

    fn notify_error(&self, message: &str) {
        notify(self.toasts, ToastVariant::Danger, message);
    }
}

/// Label on the connect area's main button.
pub fn connect_label(view: &ConnectView) -> String {
    match view {
        ConnectView::Connect => "Connect".to_owned(),
        ConnectView::SignPrompt { .. } => "Sign & Continue".to_owned(),
        ConnectView::Account { address: Some(address) } => address.short(),
        ConnectView::Account { address: None } => "Account".to_owned(),
    }
}

/// Text the avatar circle shows for an address: its first two hex digits.
pub fn avatar_initials(address: Option<&Address>) -> String {
    address
        .and_then(|a| a.as_str().get(2..4))
        .map_or_else(|| "?".to_owned(), str::to_ascii_uppercase)
}

/// Deterministic avatar hue for an address.
pub fn avatar_hue(address: Option<&Address>) -> u16 {
    let Some(address) = address else {
        return 0;
    };
    let sum = address.as_str().bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    u16::try_from(sum % 360).unwrap_or(0)
}
