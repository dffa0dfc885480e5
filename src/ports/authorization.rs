use crate::domain::value_objects::UserId;

/// Authorization port.
///
/// The loan service only needs a yes/no answer per user.
pub trait AuthorizationService: Send + Sync {
    fn is_authorized(&self, user_id: UserId) -> bool;
}
