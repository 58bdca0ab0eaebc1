//! Error taxonomy for the remote collaborators.
//!
//! Every variant here is caught at the state-machine transition boundary
//! and rendered as a user-visible message; none of them abort the
//! process.

use reqwest::StatusCode;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Login or registration failure.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the credentials.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Registration conflict: the username already exists.
    #[error("username is already taken")]
    UsernameTaken,

    /// Any other non-success status.
    #[error("request failed with status {0}")]
    Status(StatusCode),
}

/// Room directory or history request failure.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status from the service.
    #[error("request failed with status {0}")]
    Status(StatusCode),
}

/// WebSocket handshake failure.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Transport-level or HTTP-upgrade failure while connecting.
    #[error("could not open the chat connection: {0}")]
    Handshake(#[from] tungstenite::Error),
}

/// Write failure on a live connection. No implicit retry.
#[derive(Debug, Error)]
pub enum SendError {
    /// The outgoing message could not be encoded.
    #[error("could not encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The write itself failed.
    #[error("could not send message: {0}")]
    Transport(#[from] tungstenite::Error),
}

/// Failure while reading from the live connection.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A frame arrived but did not decode as a chat message. Transient:
    /// the read loop re-arms after surfacing it.
    #[error("undecodable message: {0}")]
    Decode(#[from] serde_json::Error),

    /// The transport failed. Terminal: the read loop ends.
    #[error("connection failure: {0}")]
    Transport(#[from] tungstenite::Error),
}
