//! Authenticated identity.

/// Credentials and session data for the logged-in user.
///
/// Built from a successful login response. Immutable afterwards: a new
/// login replaces the whole value, logout drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Bearer token for API requests and the socket handshake.
    pub token: String,
    /// Display name the user logged in with.
    pub username: String,
    /// Stable server-side user id.
    pub user_id: String,
}
