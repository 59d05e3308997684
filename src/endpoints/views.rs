//! # Rapid View Endpoints
//!
//! Read access to the GreenHopper rapid view (agile board) listing.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::RapidViewList;

impl JiraClient {
  /// Get all rapid views visible to the authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn rapid_views(&self) -> Result<RapidViewList> {
    let url = self.endpoint_url("rest/greenhopper/latest/rapidviews/list")?;
    self.get_json(url).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::auth::Credential;
  use crate::client::JiraClient;
  use crate::error::Error;

  #[tokio::test]
  async fn test_rapid_views() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri(), Credential::Anonymous)?;

    Mock::given(method("GET"))
      .and(path("/rest/greenhopper/latest/rapidviews/list"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "views": [
              {
                  "id": 1159,
                  "name": "Engineering Board",
                  "canEdit": false,
                  "sprintSupportEnabled": true,
                  "filter": {
                      "id": 10403,
                      "name": "Filter for Engineering Board",
                      "query": "project = ENG ORDER BY Rank ASC",
                      "owner": {
                          "userName": "fred",
                          "displayName": "Fred Flintstone",
                          "renderedLink": "<a href=\"/secure/ViewProfile.jspa?name=fred\">Fred Flintstone</a>"
                      },
                      "canEdit": false,
                      "isOrederedByRank": true
                  }
              }
          ]
      })))
      .mount(&mock_server)
      .await;

    let list = client.rapid_views().await?;
    assert!(!list.views.is_empty());
    assert_eq!(list.views[0].id, 1159);
    assert_eq!(list.views[0].name, "Engineering Board");
    assert!(list.views[0].filter.is_ordered_by_rank);

    Ok(())
  }

  #[tokio::test]
  async fn test_rapid_views_truncated_body_is_decode_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri(), Credential::Anonymous)?;

    Mock::given(method("GET"))
      .and(path("/rest/greenhopper/latest/rapidviews/list"))
      .respond_with(
        ResponseTemplate::new(200).set_body_raw(r#"{"views": [{"id": 1159,"#, "application/json"),
      )
      .mount(&mock_server)
      .await;

    let result = client.rapid_views().await;
    assert!(matches!(result, Err(Error::Decode(_))), "got {result:?}");

    Ok(())
  }

  #[tokio::test]
  async fn test_rapid_views_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri(), Credential::basic("fred", "bad_token"))?;

    Mock::given(method("GET"))
      .and(path("/rest/greenhopper/latest/rapidviews/list"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&mock_server)
      .await;

    let err = client.rapid_views().await.unwrap_err();
    assert!(err.is_unauthorized());

    Ok(())
  }

  #[tokio::test]
  async fn test_rapid_views_server_error_is_request_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri(), Credential::Anonymous)?;

    Mock::given(method("GET"))
      .and(path("/rest/greenhopper/latest/rapidviews/list"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&mock_server)
      .await;

    let result = client.rapid_views().await;
    assert!(matches!(result, Err(Error::Request(_))), "got {result:?}");

    Ok(())
  }
}
