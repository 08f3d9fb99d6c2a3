//! Events emitted during a capture session for host integration hooks.

use crate::types::SignatureRecord;

/// Events emitted during a capture session for host integration hooks.
///
/// These let the host UI react to session lifecycle changes (wire an OK
/// button, a cancel link, an autosave) without coupling to the session
/// internals.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A gesture has started (pointer-down on the surface).
    GestureStarted {
        /// Host-supplied monotonic timestamp, milliseconds
        timestamp_ms: u64,
    },
    /// The open gesture ended (pointer-up). Not emitted when no gesture
    /// was active.
    GestureEnded,
    /// The log was emptied by an explicit clear.
    Cleared,
    /// The session was cancelled; the log was already emptied when this
    /// fires.
    Cancelled,
    /// The host accepted the signature; carries the exported record.
    Accepted(SignatureRecord),
}
