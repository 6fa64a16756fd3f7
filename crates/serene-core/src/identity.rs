use crate::models::user::UserId;

/// Capability that answers "who is making this request?".
///
/// Passed explicitly into the operations that need a user rather than
/// reached through a global client.
pub trait IdentityProvider {
    /// The current user's identifier, or `None` when unauthenticated.
    fn current_user(&self) -> Option<UserId>;
}

impl IdentityProvider for UserId {
    fn current_user(&self) -> Option<UserId> {
        Some(self.clone())
    }
}

impl<T: IdentityProvider> IdentityProvider for Option<T> {
    fn current_user(&self) -> Option<UserId> {
        self.as_ref().and_then(IdentityProvider::current_user)
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn current_user(&self) -> Option<UserId> {
        (**self).current_user()
    }
}
