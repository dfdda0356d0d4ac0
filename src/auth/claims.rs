use serde::{Deserialize, Serialize};

use crate::models::domain::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Session id
    pub name: String,
    pub email: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    /// Claims expire together with the session they name.
    pub fn for_session(session: &SessionContext) -> Self {
        Self {
            sub: session.id.clone(),
            name: session.name.clone(),
            email: session.email.clone(),
            iat: session.created_at.timestamp() as usize,
            exp: session.expires_at.timestamp() as usize,
        }
    }
}
