//! Boundary to the external account-creation service.
//!
//! The service itself is a black box; this module only fixes the request and
//! response shapes the controller exchanges with it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel response body signalling a rejected sign-up.
///
/// The upstream contract encodes failure as the literal string `"false"`;
/// any other value counts as success.
pub const FAILURE_SENTINEL: &str = "false";

/// Payload handed to the account service on submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Wire-level response from the account service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpResponse {
    pub response: String,
}

impl SignUpResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// True when the body carries the failure sentinel.
    pub fn is_failure(&self) -> bool {
        self.response == FAILURE_SENTINEL
    }
}

/// Failures raised by the account-creation call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("sign-up service is unreachable: {0}")]
    Unreachable(String),
    #[error("{0}")]
    Service(String),
}

/// The account-creation call. Implementations perform the actual transport;
/// the controller only sees the settled outcome.
pub trait AccountGateway {
    fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, GatewayError>;
}

/// Stand-in gateway returning a fixed response body.
///
/// Used by the terminal front-end and scripted tests in place of the remote
/// service; set the body to [`FAILURE_SENTINEL`] to exercise the rejection
/// path.
#[derive(Debug, Clone)]
pub struct StaticGateway {
    response: String,
}

impl StaticGateway {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    pub fn succeeding() -> Self {
        Self::new("ok")
    }

    pub fn failing() -> Self {
        Self::new(FAILURE_SENTINEL)
    }
}

impl AccountGateway for StaticGateway {
    fn sign_up(&self, _request: &SignUpRequest) -> Result<SignUpResponse, GatewayError> {
        Ok(SignUpResponse::new(self.response.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_sentinel_counts_as_failure() {
        assert!(SignUpResponse::new("false").is_failure());
        assert!(!SignUpResponse::new("true").is_failure());
        assert!(!SignUpResponse::new("ok").is_failure());
        assert!(!SignUpResponse::new("").is_failure());
    }

    #[test]
    fn static_gateway_echoes_its_configured_body() {
        let gateway = StaticGateway::failing();
        let request = SignUpRequest {
            email: "ada@example.com".into(),
            name: "Ada".into(),
            password: "Abcdef12".into(),
        };
        let response = gateway.sign_up(&request).unwrap();
        assert!(response.is_failure());
    }
}
