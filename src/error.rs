//! Error types for the Jira client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`JiraClient`](crate::JiraClient) operations.
///
/// The variants are deliberately coarse so callers can tell apart the only
/// cases they can act on: a bad client configuration, a credential problem,
/// a transport or HTTP failure, and a response body that did not match the
/// expected shape.
#[derive(Debug, Error)]
pub enum Error {
  /// The base URL handed to the constructor was not a usable URL prefix.
  #[error("invalid client configuration: {0}")]
  InvalidConfig(String),

  /// An authentication endpoint rejected the request, or a data endpoint
  /// answered 401/403.
  #[error("authentication failed: HTTP {status}")]
  Auth {
    /// The HTTP status the server answered with.
    status: StatusCode,
  },

  /// The request could not be completed at the HTTP level: connection
  /// refused, DNS failure, TLS failure, or a non-auth error status.
  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),

  /// The response body did not decode into the expected entity.
  #[error("unexpected response body: {0}")]
  Decode(#[source] serde_json::Error),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  /// True when the server answered 401 Unauthorized.
  pub fn is_unauthorized(&self) -> bool {
    matches!(
      self,
      Error::Auth {
        status: StatusCode::UNAUTHORIZED
      }
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_unauthorized() {
    let err = Error::Auth {
      status: StatusCode::UNAUTHORIZED,
    };
    assert!(err.is_unauthorized());

    let err = Error::Auth {
      status: StatusCode::FORBIDDEN,
    };
    assert!(!err.is_unauthorized());

    let err = Error::InvalidConfig("bad url".to_string());
    assert!(!err.is_unauthorized());
  }

  #[test]
  fn test_display() {
    let err = Error::Auth {
      status: StatusCode::UNAUTHORIZED,
    };
    assert_eq!(err.to_string(), "authentication failed: HTTP 401 Unauthorized");

    let err = Error::InvalidConfig("relative URL without a base".to_string());
    assert_eq!(
      err.to_string(),
      "invalid client configuration: relative URL without a base"
    );
  }
}
