//! Error types
//!
//! Failure taxonomy shared across the wallet crates.

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Stored wallet data could not be loaded; fatal for the session
    #[error("Load error: {0}")]
    Load(String),

    /// Chain session establishment failed; recoverable by retrying
    #[error("Session error: {0}")]
    Session(String),

    /// A balance refresh failed; transient, data left unchanged
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Operation requires a state that carries loaded data
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Invalid denominated amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl Error {
    /// Whether the session can continue without a full re-initialize.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Load(_))
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Error::Load(_) => "Error loading stored account data.".to_string(),
            Error::Session(_) => {
                "Unable to connect to the network. Please check your connection and try again."
                    .to_string()
            }
            Error::Fetch(_) => "Could not fetch latest balances. Check network.".to_string(),
            _ => self.to_string(),
        }
    }
}
