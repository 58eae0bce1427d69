//! The persisted login session.

use cosmetica_cache::{KvBackend, Slot};
use cosmetica_catalog::CatalogStore;
use tracing::{debug, info, warn};

use crate::admin::AdminCatalog;
use crate::user::{Role, User};
use crate::AuthError;

/// Slot holding the serialized current user.
pub const USER_KEY: &str = "user";

/// Tracks who is logged in and persists it across runs.
///
/// # Example
///
/// ```rust
/// use cosmetica_auth::{Role, SessionGate};
/// use cosmetica_cache::MemoryBackend;
///
/// let backend = MemoryBackend::new();
/// let mut gate = SessionGate::restore(backend.clone()).unwrap();
/// assert!(gate.current().is_none());
///
/// gate.login("ada@example.com", Role::Admin).unwrap();
///
/// let restored = SessionGate::restore(backend).unwrap();
/// assert_eq!(restored.current().map(|u| u.name.as_str()), Some("ada"));
/// assert!(restored.is_admin());
/// ```
#[derive(Debug)]
pub struct SessionGate<B> {
    slot: Slot<User, B>,
    user: Option<User>,
}

impl<B: KvBackend> SessionGate<B> {
    /// Read the stored session, if any.
    ///
    /// A `user` slot that exists but doesn't decode is reported as
    /// [`AuthError::CorruptSession`] and left in place. [`SessionGate::discard`]
    /// clears it.
    pub fn restore(backend: B) -> Result<Self, AuthError> {
        let slot: Slot<User, B> = Slot::new(backend, USER_KEY);

        let user = match slot.load() {
            Ok(user) => user,
            Err(e) if e.is_malformed_data() => {
                warn!(key = USER_KEY, error = %e, "stored session is unreadable");
                return Err(AuthError::CorruptSession(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(user) = &user {
            debug!(user = %user.email, role = %user.role, "restored session");
        }

        Ok(Self { slot, user })
    }

    /// Drop whatever is stored, readable or not, and start anonymous.
    pub fn discard(backend: B) -> Result<Self, AuthError> {
        let slot: Slot<User, B> = Slot::new(backend, USER_KEY);
        slot.clear()?;
        info!("stored session discarded");
        Ok(Self { slot, user: None })
    }

    /// The logged-in user, `None` when anonymous.
    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Log in as `email` with the chosen role, replacing any current session.
    ///
    /// The email is not validated and no credential is checked.
    pub fn login(&mut self, email: impl Into<String>, role: Role) -> Result<&User, AuthError> {
        let user = User::login(email, role);
        self.slot.store(&user)?;
        info!(user = %user.email, role = %user.role, "logged in");
        Ok(self.user.insert(user))
    }

    /// Forget the current user. Logging out while anonymous is fine.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.slot.clear()?;
        if let Some(user) = self.user.take() {
            info!(user = %user.email, "logged out");
        }
        Ok(())
    }

    /// Check if an admin is logged in.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// The current user, provided they are an admin.
    pub fn require_admin(&self) -> Result<&User, AuthError> {
        match &self.user {
            Some(user) if user.is_admin() => Ok(user),
            Some(user) => {
                warn!(user = %user.email, role = %user.role, "admin access refused");
                Err(AuthError::InsufficientPermissions(Role::Admin.as_str()))
            }
            None => {
                warn!("admin access refused: not logged in");
                Err(AuthError::NotLoggedIn)
            }
        }
    }

    /// Open the admin surface over `store`.
    pub fn admin<'s, C: KvBackend>(
        &self,
        store: &'s mut CatalogStore<C>,
    ) -> Result<AdminCatalog<'s, C>, AuthError> {
        let user = self.require_admin()?;
        Ok(AdminCatalog::new(store, user.email.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmetica_cache::MemoryBackend;

    #[test]
    fn test_starts_anonymous() {
        let gate = SessionGate::restore(MemoryBackend::new()).unwrap();
        assert!(gate.current().is_none());
        assert!(!gate.is_admin());
    }

    #[test]
    fn test_login_persists() {
        let backend = MemoryBackend::new();
        let mut gate = SessionGate::restore(backend.clone()).unwrap();
        let id = gate.login("sam@shop.test", Role::Customer).unwrap().id.clone();

        let restored = SessionGate::restore(backend).unwrap();
        let user = restored.current().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.name, "sam");
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let backend = MemoryBackend::new();
        let mut gate = SessionGate::restore(backend.clone()).unwrap();
        gate.login("first@a.b", Role::Admin).unwrap();
        gate.login("second@a.b", Role::Customer).unwrap();

        assert!(!gate.is_admin());
        let restored = SessionGate::restore(backend).unwrap();
        assert_eq!(restored.current().unwrap().email, "second@a.b");
    }

    #[test]
    fn test_logout_clears_slot() {
        let backend = MemoryBackend::new();
        let mut gate = SessionGate::restore(backend.clone()).unwrap();
        gate.login("x@y.z", Role::Admin).unwrap();
        gate.logout().unwrap();

        assert!(gate.current().is_none());
        assert!(!backend.exists(USER_KEY).unwrap());
        gate.logout().unwrap();
    }

    #[test]
    fn test_require_admin() {
        let mut gate = SessionGate::restore(MemoryBackend::new()).unwrap();
        assert!(matches!(gate.require_admin(), Err(AuthError::NotLoggedIn)));

        gate.login("c@d.e", Role::Customer).unwrap();
        let err = gate.require_admin().unwrap_err();
        assert!(matches!(err, AuthError::InsufficientPermissions("admin")));
        assert!(err.is_permission_error());

        gate.login("a@d.e", Role::Admin).unwrap();
        assert_eq!(gate.require_admin().unwrap().email, "a@d.e");
    }

    #[test]
    fn test_corrupt_session_is_reported_not_overwritten() {
        let backend = MemoryBackend::new();
        backend.set(USER_KEY, "{\"id\":").unwrap();

        let err = SessionGate::restore(backend.clone()).unwrap_err();
        assert!(matches!(err, AuthError::CorruptSession(_)));
        assert_eq!(backend.get(USER_KEY).unwrap().as_deref(), Some("{\"id\":"));

        let gate = SessionGate::discard(backend.clone()).unwrap();
        assert!(gate.current().is_none());
        assert!(SessionGate::restore(backend).unwrap().current().is_none());
    }

    #[test]
    fn test_unknown_role_is_corrupt() {
        let backend = MemoryBackend::new();
        backend
            .set(
                USER_KEY,
                r#"{"id":"abc","email":"a@b","role":"owner","name":"a"}"#,
            )
            .unwrap();
        assert!(matches!(
            SessionGate::restore(backend),
            Err(AuthError::CorruptSession(_))
        ));
    }

    #[test]
    fn test_failed_login_stays_anonymous() {
        let mut gate = SessionGate::restore(MemoryBackend::new().with_quota(0)).unwrap();
        let err = gate.login("lost@a.b", Role::Admin).unwrap_err();
        assert!(matches!(err, AuthError::Cache(_)));
        assert!(gate.current().is_none());
        assert!(!gate.is_admin());
    }
}
