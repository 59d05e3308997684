//! Credential handling for the Jira client.
//!
//! Jira deployments accept either HTTP basic auth or the session cookie
//! handed out by `rest/auth/1/session`. The client carries exactly one
//! [`Credential`] at a time and applies it to every outgoing request.

use std::fmt;

use reqwest::RequestBuilder;
use reqwest::header;

use crate::models::SessionCookie;

/// Authentication credential attached to outgoing requests.
#[derive(Clone)]
pub enum Credential {
  /// No authentication. Anonymous access works against public instances.
  Anonymous,
  /// HTTP basic auth with a username and password (or API token).
  Basic { username: String, password: String },
  /// A server-issued session cookie, usually obtained via
  /// [`login`](crate::JiraClient::login).
  Session(SessionCookie),
}

impl Credential {
  /// Basic-auth credential from a username and password.
  pub fn basic(username: &str, password: &str) -> Self {
    Credential::Basic {
      username: username.to_string(),
      password: password.to_string(),
    }
  }

  /// Credential from an existing session cookie name/value pair.
  pub fn session(name: &str, value: &str) -> Self {
    Credential::Session(SessionCookie {
      name: name.to_string(),
      value: value.to_string(),
    })
  }

  /// Attach this credential to a request.
  pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
    match self {
      Credential::Anonymous => request,
      Credential::Basic { username, password } => request.basic_auth(username, Some(password)),
      Credential::Session(cookie) => {
        request.header(header::COOKIE, format!("{}={}", cookie.name, cookie.value))
      }
    }
  }
}

// Manual Debug so passwords and cookie values never end up in logs.
impl fmt::Debug for Credential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Credential::Anonymous => f.write_str("Credential::Anonymous"),
      Credential::Basic { username, .. } => f
        .debug_struct("Credential::Basic")
        .field("username", username)
        .finish_non_exhaustive(),
      Credential::Session(cookie) => f
        .debug_struct("Credential::Session")
        .field("name", &cookie.name)
        .finish_non_exhaustive(),
    }
  }
}
