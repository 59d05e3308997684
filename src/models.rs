use serde::{Deserialize, Serialize};

/// Login request body for `POST rest/auth/1/session`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
  pub username: String,
  pub password: String,
}

/// A server-issued session cookie name/value pair
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SessionCookie {
  pub name: String,
  pub value: String,
}

/// Login statistics returned alongside session responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfo {
  pub failed_login_count: Option<u64>,
  pub login_count: Option<u64>,
  pub last_failed_login_time: Option<String>,
  pub previous_login_time: Option<String>,
}

/// Result of a successful login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
  #[serde(rename = "session")]
  pub cookie: SessionCookie,
  pub login_info: LoginInfo,
}

impl Session {
  /// The cookie identifying this session, for persisting across runs
  pub fn cookie(&self) -> &SessionCookie {
    &self.cookie
  }
}

/// Result of validating the currently held session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSession {
  #[serde(rename = "self")]
  pub self_link: String,
  pub name: String,
  pub login_info: LoginInfo,
}

/// All rapid views visible to the authenticated user
#[derive(Debug, Deserialize)]
pub struct RapidViewList {
  pub views: Vec<RapidView>,
}

/// A rapid view (agile board) configuration
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RapidView {
  pub id: u64,
  pub name: String,
  pub can_edit: bool,
  pub sprint_support_enabled: bool,
  pub filter: Filter,
}

/// The saved filter backing a rapid view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
  pub id: u64,
  pub name: String,
  pub query: String,
  pub owner: FilterOwner,
  pub can_edit: bool,
  // The wire name is misspelled upstream; keep it byte-exact.
  #[serde(rename = "isOrederedByRank")]
  pub is_ordered_by_rank: bool,
}

/// The user owning a filter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOwner {
  pub user_name: String,
  pub display_name: String,
  pub rendered_link: String,
}

/// Sprints configured for a rapid view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintQueryResult {
  pub sprints: Vec<Sprint>,
  pub rapid_view_id: u64,
}

/// A single sprint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
  pub id: u64,
  pub sequence: u64,
  pub name: String,
  pub state: String,
  pub linked_pages_count: u64,
}

/// Report for one sprint of a rapid view
#[derive(Debug, Deserialize)]
pub struct SprintReport {
  pub contents: SprintReportContents,
  pub sprint: Sprint,
}

/// Issue lists inside a sprint report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintReportContents {
  pub incompleted_issues: Vec<Issue>,
}

/// An issue as it appears in a sprint report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
  pub id: u64,
  pub key: String,
  pub summary: String,
  pub epic_field: Option<EpicField>,
  #[serde(rename = "estimateStatistic")]
  pub estimate: Option<EstimateStatistic>,
}

/// Epic association of an issue
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicField {
  pub epic_key: String,
  pub epic_color: String,
  pub text: String,
}

/// Estimate statistic of an issue
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateStatistic {
  pub stat_field_value: StatFieldValue,
}

/// The numeric value of an estimate statistic
#[derive(Debug, Deserialize)]
pub struct StatFieldValue {
  pub value: f64,
}
