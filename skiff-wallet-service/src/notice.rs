//! Transient user notices
//!
//! Operations that change data or fail recoverably report through this
//! side-channel instead of the state value itself, so a failed balance
//! refresh never disturbs what the UI is showing.

use tokio::sync::mpsc;

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Confirmation of a completed action
    Info(String),
    /// A recoverable failure the user should know about
    Error(String),
}

impl Notice {
    /// The display text.
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Error(message) => message,
        }
    }
}

/// Receiving half handed to the UI layer; yields notices in emission order.
pub type NoticeReceiver = mpsc::UnboundedReceiver<Notice>;

pub(crate) type NoticeSender = mpsc::UnboundedSender<Notice>;

pub(crate) fn channel() -> (NoticeSender, NoticeReceiver) {
    mpsc::unbounded_channel()
}
