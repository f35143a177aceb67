use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// The part a user plays on the marketplace. Drives every authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Client,
    Owner,
    Delivery,
}

/// Represents an authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub role: Role,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Notes
    /// The `id` is normally allocated by the user store; this constructor is
    /// for identities resolved elsewhere (e.g. by the auth layer) and for tests.
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}
