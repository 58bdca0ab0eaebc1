//! HTTP API client.
//!
//! One method per request/response operation of the chat service. Every
//! method is a single round trip: no caching, no retries, no timeouts
//! beyond reqwest's defaults. Callers surface errors to the user.

use banter_core::{Identity, Message, Room};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{AuthError, NetworkError};

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user_id: String,
}

#[derive(Serialize)]
struct CreateRoomRequest<'a> {
    room_name: &'a str,
}

#[derive(Serialize)]
struct JoinRoomRequest<'a> {
    room_id: &'a str,
}

/// Client for the chat service's HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http: reqwest::Client::new(), base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Authenticate and build the session identity.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&Credentials { username, password })
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body: LoginResponse = response.json().await?;
                Ok(Identity {
                    token: body.token,
                    username: username.to_owned(),
                    user_id: body.user_id,
                })
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidCredentials),
            status => Err(AuthError::Status(status)),
        }
    }

    /// Create a new account. The user still has to log in afterwards.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(&Credentials { username, password })
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            StatusCode::CONFLICT => Err(AuthError::UsernameTaken),
            status => Err(AuthError::Status(status)),
        }
    }

    /// Fetch the rooms this identity has joined, in server order.
    pub async fn list_joined_rooms(&self, identity: &Identity) -> Result<Vec<Room>, NetworkError> {
        let response = self
            .http
            .get(self.url("/rooms"))
            .bearer_auth(&identity.token)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(NetworkError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Create a room named `name` and return the server's copy of it.
    pub async fn create_room(&self, identity: &Identity, name: &str) -> Result<Room, NetworkError> {
        let response = self
            .http
            .post(self.url("/rooms/create"))
            .bearer_auth(&identity.token)
            .json(&CreateRoomRequest { room_name: name })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NetworkError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Join an existing room by id.
    pub async fn join_room(&self, identity: &Identity, room_id: &str) -> Result<(), NetworkError> {
        let response = self
            .http
            .post(self.url("/rooms/join"))
            .bearer_auth(&identity.token)
            .json(&JoinRoomRequest { room_id })
            .send()
            .await?;

        // The service answers 200 for an already-joined room and 201 for
        // a fresh join.
        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => Err(NetworkError::Status(status)),
        }
    }

    /// Fetch the stored history for one room, oldest first.
    pub async fn load_history(
        &self,
        identity: &Identity,
        room_id: &str,
    ) -> Result<Vec<Message>, NetworkError> {
        let response = self
            .http
            .get(self.url("/rooms/history"))
            .query(&[("room_id", room_id)])
            .bearer_auth(&identity.token)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(NetworkError::Status(response.status()));
        }

        // A room with no history comes back as JSON null.
        let messages: Option<Vec<Message>> = response.json().await?;
        Ok(messages.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://localhost:8080///");
        assert_eq!(client.url("/rooms"), "http://localhost:8080/rooms");
    }

    #[test]
    fn url_joins_paths() {
        let client = ApiClient::new("https://chat.example.com");
        assert_eq!(client.url("/auth/login"), "https://chat.example.com/auth/login");
    }
}
