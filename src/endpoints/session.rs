//! # Session Endpoints
//!
//! Login, session validation, and logout against `rest/auth/1/session`.
//! Unlike the data endpoints, every non-2xx answer from this resource is an
//! authentication failure as far as the caller is concerned, so all of them
//! surface as [`Error::Auth`].

use tracing::{debug, instrument};

use crate::auth::Credential;
use crate::client::{JiraClient, decode_body};
use crate::error::{Error, Result};
use crate::models::{CurrentSession, LoginRequest, Session};

const SESSION_PATH: &str = "rest/auth/1/session";

impl JiraClient {
  /// Authenticate with a username and password.
  ///
  /// On success the returned session cookie replaces the client's current
  /// credential, so subsequent calls run against the new session. This is the
  /// only operation that mutates the client.
  #[instrument(skip(self, password), level = "debug")]
  pub async fn login(&mut self, username: &str, password: &str) -> Result<Session> {
    let url = self.endpoint_url(SESSION_PATH)?;
    let payload = LoginRequest {
      username: username.to_string(),
      password: password.to_string(),
    };

    let response = self.send(self.client.post(url).json(&payload)).await?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::Auth { status });
    }

    let session: Session = decode_body(response).await?;
    debug!(cookie = %session.cookie.name, "login succeeded, storing session cookie");
    self.credential = Credential::Session(session.cookie.clone());
    Ok(session)
  }

  /// Validate the currently held session cookie.
  ///
  /// An expired or absent session answers 401, which surfaces as a regular
  /// [`Error::Auth`] result rather than anything fatal.
  #[instrument(skip(self), level = "debug")]
  pub async fn current_session(&self) -> Result<CurrentSession> {
    let url = self.endpoint_url(SESSION_PATH)?;

    let response = self.send(self.client.get(url)).await?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::Auth { status });
    }

    decode_body(response).await
  }

  /// Invalidate the current session server-side.
  ///
  /// Any non-2xx answer raises [`Error::Auth`] with the offending status;
  /// swallowing a failed logout would report a session as destroyed when it
  /// is still live.
  #[instrument(skip(self), level = "debug")]
  pub async fn logout(&self) -> Result<()> {
    let url = self.endpoint_url(SESSION_PATH)?;

    let response = self.send(self.client.delete(url)).await?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::Auth { status });
    }
    Ok(())
  }
}
