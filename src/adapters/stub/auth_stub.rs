use crate::domain::value_objects::UserId;
use crate::ports::authorization::AuthorizationService;
use std::collections::HashSet;

/// User ID that the default stub always rejects.
pub const ANONYMOUS_USER: UserId = UserId::new(0);

/// Stub implementation of AuthorizationService
///
/// Rejects every user in its deny set and authorizes everyone else.
/// The answer depends only on the user ID.
#[derive(Debug, Clone)]
pub struct AuthStub {
    denied_users: HashSet<UserId>,
}

impl AuthStub {
    /// Stub that rejects only user 0.
    pub fn new() -> Self {
        Self::denying([ANONYMOUS_USER])
    }

    pub fn denying(denied_users: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            denied_users: denied_users.into_iter().collect(),
        }
    }
}

impl Default for AuthStub {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorizationService for AuthStub {
    fn is_authorized(&self, user_id: UserId) -> bool {
        !self.denied_users.contains(&user_id)
    }
}
