//! Session gate state machine and credential verification.

use thiserror::Error;

const FIXED_USERNAME: &str = "admin";
const FIXED_PASSWORD: &str = "password123";

/// Errors surfaced by login attempts.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Session authentication state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

/// Credential-checking seam so a real authentication backend can replace
/// the fixed pair without touching the gate's state machine.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier {
    /// Returns `true` when the pair identifies a valid user.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Verifier backed by one fixed username/password pair.
pub struct FixedCredentials {
    password: String,
    username: String,
}

impl FixedCredentials {
    /// Creates a verifier accepting exactly the given pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            username: username.into(),
        }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new(FIXED_USERNAME, FIXED_PASSWORD)
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Authenticated/unauthenticated state machine over a pluggable verifier.
///
/// The gate itself is pure; persisting the session flag is the caller's
/// concern so that a storage failure can keep the prior state.
pub struct SessionGate {
    state: AuthState,
    verifier: Box<dyn CredentialVerifier>,
}

impl SessionGate {
    /// Creates a gate in the `Unauthenticated` state.
    pub fn new(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            state: AuthState::Unauthenticated,
            verifier,
        }
    }

    /// Applies the persisted flag once at startup.
    pub fn restore(&mut self, authenticated: bool) {
        self.state = if authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
    }

    /// Transitions to `Authenticated` when the credentials verify.
    ///
    /// On rejection the state is left unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if !self.verifier.verify(username, password) {
            return Err(AuthError::InvalidCredentials);
        }

        self.state = AuthState::Authenticated;
        Ok(())
    }

    /// Transitions to `Unauthenticated`. Unconditional, no failure mode.
    pub fn logout(&mut self) {
        self.state = AuthState::Unauthenticated;
    }

    /// Returns `true` while the gate is in the `Authenticated` state.
    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_gate() -> SessionGate {
        SessionGate::new(Box::new(FixedCredentials::default()))
    }

    #[test]
    fn test_fixed_credentials_accept_only_the_exact_pair() {
        // Arrange
        let verifier = FixedCredentials::default();

        // Act & Assert
        assert!(verifier.verify("admin", "password123"));
        assert!(!verifier.verify("admin", "password"));
        assert!(!verifier.verify("root", "password123"));
        assert!(!verifier.verify("", ""));
        assert!(!verifier.verify("Admin", "password123"));
    }

    #[test]
    fn test_login_success_transitions_to_authenticated() {
        // Arrange
        let mut gate = fixed_gate();

        // Act
        let result = gate.login("admin", "password123");

        // Assert
        assert_eq!(result, Ok(()));
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_login_failure_keeps_state_unauthenticated() {
        // Arrange
        let mut gate = fixed_gate();

        // Act
        let result = gate.login("admin", "wrong");

        // Assert
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_logout_transitions_to_unauthenticated() {
        // Arrange
        let mut gate = fixed_gate();
        gate.login("admin", "password123")
            .expect("login should succeed");

        // Act
        gate.logout();

        // Assert
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_restore_applies_the_persisted_flag() {
        // Arrange
        let mut gate = fixed_gate();

        // Act & Assert
        gate.restore(true);
        assert!(gate.is_authenticated());

        gate.restore(false);
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_gate_delegates_to_the_injected_verifier() {
        // Arrange
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_verify()
            .withf(|username, password| username == "someone" && password == "else")
            .times(1)
            .return_const(true);
        let mut gate = SessionGate::new(Box::new(verifier));

        // Act
        let result = gate.login("someone", "else");

        // Assert
        assert_eq!(result, Ok(()));
        assert!(gate.is_authenticated());
    }
}
