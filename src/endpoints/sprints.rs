//! # Sprint Endpoints
//!
//! Sprint listing per rapid view and the per-sprint report.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{SprintQueryResult, SprintReport};

impl JiraClient {
  /// Get all sprints for the given rapid view
  #[instrument(skip(self), level = "debug")]
  pub async fn sprint_query(&self, rapid_view_id: u64) -> Result<SprintQueryResult> {
    let url = self.endpoint_url(&format!("rest/greenhopper/latest/sprintquery/{rapid_view_id}"))?;
    self.get_json(url).await
  }

  /// Get the report for one sprint of a rapid view
  #[instrument(skip(self), level = "debug")]
  pub async fn sprint_report(&self, rapid_view_id: u64, sprint_id: u64) -> Result<SprintReport> {
    let mut url = self.endpoint_url("rest/greenhopper/latest/rapid/charts/sprintreport")?;
    url
      .query_pairs_mut()
      .append_pair("rapidViewId", &rapid_view_id.to_string())
      .append_pair("sprintId", &sprint_id.to_string());
    self.get_json(url).await
  }
}
