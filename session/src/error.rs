//! Session error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable. The controller converts them into a
//! transient notification and a well-defined state (usually "not
//! authenticated"); none of them escape to the page as a panic.

/// Failures raised by the session collaborators and the controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// An operation that needs a connected wallet ran without one.
    #[error("No wallet connected")]
    NoWalletConnected,
    /// The wallet provider refused or failed a connect/disconnect request.
    #[error("wallet request failed: {0}")]
    Wallet(String),
    /// The user declined the signature or the signer failed to produce one.
    #[error("signature rejected: {0}")]
    SignatureRejected(String),
    /// The backend did not exchange the signature for a token.
    #[error("{0}")]
    LoginExchangeFailed(String),
    /// The backend could not be asked whether the stored token is valid.
    #[error("token validation failed: {0}")]
    TokenValidationFailed(String),
    /// A gated page failed to load its data.
    #[error("{0}")]
    DataFetchFailed(String),
}
