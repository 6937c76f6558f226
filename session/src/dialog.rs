//! Signature dialog lifecycle.
//!
//! The dialog has one rule that matters: a close caused by anything other
//! than a successful sign-in disconnects the wallet. The caller states the
//! reason explicitly instead of toggling a "programmatic hide" flag around
//! the close call, so two racing closes cannot misread each other's flag.
//! Closing an already-closed dialog is a no-op and never disconnects.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Why the dialog is closing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// Cancel button, escape, backdrop click, failed sign-in, or wallet loss.
    UserDismissed,
    /// The sign-in flow finished and stored a token.
    SignedIn,
}

/// Side effects the controller must apply after a close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseOutcome {
    pub disconnect_wallet: bool,
}

/// State of the single signature dialog a page may show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureDialog {
    open: bool,
    busy: bool,
}

impl SignatureDialog {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a Sign & Continue request is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Open the dialog. Returns `false` when it is already open.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.busy = false;
        true
    }

    /// Mark a sign request as started. Refused when closed or already busy.
    pub fn begin_signing(&mut self) -> bool {
        if !self.open || self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn end_signing(&mut self) {
        self.busy = false;
    }

    /// Close the dialog. `None` means it was not open and nothing happens.
    pub fn close(&mut self, reason: CloseReason) -> Option<CloseOutcome> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.busy = false;
        Some(CloseOutcome { disconnect_wallet: reason == CloseReason::UserDismissed })
    }
}
