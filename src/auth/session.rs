//! Session gate
//!
//! One boolean flag, global to the process, gating every employee route.
//! The flag starts false, is set true by a successful login, and is set
//! false by logout *or* by any failed login attempt.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::utils::AppError;

/// Process-wide session gate holding the configured admin credentials
///
/// # Example
///
/// ```ignore
/// let gate = SessionGate::new("admin", "password123");
/// assert!(gate.login("admin", "password123"));
/// assert!(gate.is_logged_in());
/// gate.logout();
/// assert!(gate.guard().is_err());
/// ```
#[derive(Debug)]
pub struct SessionGate {
    username: String,
    password: String,
    logged_in: AtomicBool,
}

impl SessionGate {
    /// Create a gate for the given credential pair; initially logged out
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            logged_in: AtomicBool::new(false),
        }
    }

    /// Attempt a login
    ///
    /// A match sets the flag true. A mismatch sets the flag false even if
    /// a session was already open - a failed attempt revokes it.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = username == self.username && password == self.password;
        self.logged_in.store(ok, Ordering::SeqCst);
        ok
    }

    /// Close the session; always succeeds, regardless of prior state
    pub fn logout(&self) {
        self.logged_in.store(false, Ordering::SeqCst);
    }

    /// Current flag value, no side effects
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    /// Authorization check used by every protected route
    pub fn guard(&self) -> Result<(), AppError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let gate = SessionGate::new("admin", "password123");
        assert!(!gate.is_logged_in());
        assert!(gate.guard().is_err());
    }

    #[test]
    fn valid_credentials_open_the_gate() {
        let gate = SessionGate::new("admin", "password123");
        assert!(gate.login("admin", "password123"));
        assert!(gate.is_logged_in());
        assert!(gate.guard().is_ok());
    }

    #[test]
    fn failed_login_revokes_an_open_session() {
        let gate = SessionGate::new("admin", "password123");
        assert!(gate.login("admin", "password123"));
        assert!(!gate.login("admin", "wrong"));
        assert!(!gate.is_logged_in());
    }

    #[test]
    fn logout_always_closes() {
        let gate = SessionGate::new("admin", "password123");
        gate.logout();
        assert!(!gate.is_logged_in());

        gate.login("admin", "password123");
        gate.logout();
        assert!(!gate.is_logged_in());
    }

    #[test]
    fn comparison_is_exact() {
        let gate = SessionGate::new("admin", "password123");
        assert!(!gate.login("Admin", "password123"));
        assert!(!gate.login("admin", "password123 "));
        assert!(!gate.login("", ""));
    }
}
