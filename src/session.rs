//! Agent sessions.
//!
//! Identity is an explicit value handed to whichever component needs it,
//! never global state, and credential checking lives behind a collaborator
//! trait — the crate ships no credentials and no storage for them.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("verification unavailable: {0}")]
    Unavailable(String),
}

/// Checks credentials against whatever backend the host wires in.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<AgentProfile, AuthError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub username: String,
    pub display_name: String,
}

/// An authenticated agent session for one portal visit.
#[derive(Debug, Clone)]
pub struct Session {
    pub profile: AgentProfile,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn login(
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<Self, AuthError> {
        let profile = verifier.verify(username, password)?;
        Ok(Session {
            profile,
            started_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleUser;

    impl CredentialVerifier for SingleUser {
        fn verify(&self, username: &str, password: &str) -> Result<AgentProfile, AuthError> {
            if username == "agent" && password == "secret" {
                Ok(AgentProfile {
                    username: username.to_string(),
                    display_name: "Agent".to_string(),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    #[test]
    fn login_with_good_credentials() {
        let session = Session::login(&SingleUser, "agent", "secret").unwrap();
        assert_eq!(session.profile.display_name, "Agent");
    }

    #[test]
    fn login_with_bad_credentials() {
        let err = Session::login(&SingleUser, "agent", "wrong").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
}
