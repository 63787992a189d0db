//! Placeholder session gate.
//!
//! The gate only tracks whether the user is signed in. Credentials are
//! checked for presence, never verified; this is not a security boundary.

use thiserror::Error;
use tracing::info;

/// Why the call-site credential check refused to open the gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("username is required")]
    MissingUsername,

    #[error("password is required")]
    MissingPassword,

    #[error("email is required")]
    MissingEmail,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.username.trim().is_empty() {
            return Err(CredentialsError::MissingUsername);
        }
        if self.password.trim().is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        Ok(())
    }
}

/// Sign-up form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.username.trim().is_empty() {
            return Err(CredentialsError::MissingUsername);
        }
        if self.email.trim().is_empty() {
            return Err(CredentialsError::MissingEmail);
        }
        if self.password != self.confirm_password {
            return Err(CredentialsError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Boolean authentication flag with no persisted identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Opens the gate once both fields are non-empty.
    pub fn login(
        &mut self,
        credentials: &Credentials,
    ) -> Result<(), CredentialsError> {
        credentials.validate()?;
        info!(username = %credentials.username.trim(), "session opened");
        self.authenticated = true;
        Ok(())
    }

    /// Opens the gate for a new account; nothing is stored.
    pub fn signup(
        &mut self,
        registration: &Registration,
    ) -> Result<(), CredentialsError> {
        registration.validate()?;
        info!(username = %registration.username.trim(), "account registered, session opened");
        self.authenticated = true;
        Ok(())
    }

    pub fn logout(&mut self) {
        if self.authenticated {
            info!("session closed");
        }
        self.authenticated = false;
    }
}
