use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in caller. Passed explicitly to every operation that acts on
/// someone's behalf; there is no ambient "current user".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub member_id: String,
    pub name: String,
    pub email: Option<String>,
    /// Opaque token issued by whatever auth service signed the user in.
    pub token: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(member_id: impl Into<String>, name: impl Into<String>) -> Self {
        Session {
            member_id: member_id.into(),
            name: name.into(),
            email: None,
            token: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
