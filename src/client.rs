use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::Credential;
use crate::consts::{SESSION_COOKIE_NAME, USER_AGENT};
use crate::error::{Error, Result};

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: Url,
  pub(crate) credential: Credential,
}

impl JiraClient {
  /// Create a new Jira client against a base URL.
  ///
  /// Fails with [`Error::InvalidConfig`] when the base URL is not a usable
  /// URL prefix. Resource paths are appended relative to the base, so a
  /// missing trailing slash is added here rather than surprising callers
  /// later.
  pub fn new(base_url: &str, credential: Credential) -> Result<Self> {
    let base_url = parse_base_url(base_url)?;
    let client = Client::new();
    Ok(Self {
      client,
      base_url,
      credential,
    })
  }

  /// Create a client pre-seeded with an existing `JSESSIONID` cookie value.
  pub fn with_session_cookie(base_url: &str, cookie_value: &str) -> Result<Self> {
    Self::new(base_url, Credential::session(SESSION_COOKIE_NAME, cookie_value))
  }

  /// The configured base URL, normalized to a trailing slash.
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// The credential currently attached to outgoing requests.
  pub fn credential(&self) -> &Credential {
    &self.credential
  }

  /// Resolve a resource path against the base URL.
  pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url> {
    self
      .base_url
      .join(path)
      .map_err(|e| Error::InvalidConfig(format!("{path}: {e}")))
  }

  /// Apply the credential and shared headers, then dispatch the request.
  pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
    let request = self
      .credential
      .apply(request)
      .header(header::USER_AGENT, USER_AGENT)
      .header(header::ACCEPT, "application/json");
    let response = request.send().await?;
    debug!(status = %response.status(), url = %response.url(), "received response");
    Ok(response)
  }

  /// GET a data endpoint and decode its body.
  ///
  /// 401/403 map to [`Error::Auth`] so callers can tell credential problems
  /// apart from other HTTP failures, which surface as [`Error::Request`].
  pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
    let response = self.send(self.client.get(url)).await?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
      return Err(Error::Auth { status });
    }
    let response = response.error_for_status()?;

    decode_body(response).await
  }
}

/// Read the full body and decode it into the target entity.
///
/// A body that does not match the expected shape surfaces as
/// [`Error::Decode`], never as a zero-valued entity.
pub(crate) async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
  let body = response.text().await?;
  serde_json::from_str(&body).map_err(Error::Decode)
}

fn parse_base_url(base_url: &str) -> Result<Url> {
  let mut url = Url::parse(base_url).map_err(|e| Error::InvalidConfig(format!("{base_url}: {e}")))?;
  if url.cannot_be_a_base() {
    return Err(Error::InvalidConfig(format!("{base_url}: cannot be a base URL")));
  }
  if !url.path().ends_with('/') {
    let path = format!("{}/", url.path());
    url.set_path(&path);
  }
  Ok(url)
}
