//! Network messages - communication between App and Network layers

use crate::models::User;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Retrieve the full user list
    FetchUsers { id: u64 },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse {
    /// Users retrieved and decoded
    Users {
        id: u64,
        users: Vec<User>,
        time_ms: u64,
    },
    /// Fetch failed; `message` is the displayable error
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Users { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
