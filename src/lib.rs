//! # Jira Agile API Client
//!
//! Provides typed access to the Jira session resource and the GreenHopper
//! agile REST resources: rapid views, sprint queries, and sprint reports.
//!
//! ```no_run
//! use greenhopper::{Credential, JiraClient};
//!
//! # async fn run() -> greenhopper::Result<()> {
//! let client = JiraClient::new("https://jira.atlassian.com/", Credential::Anonymous)?;
//! let rapid_views = client.rapid_views().await?;
//! for view in &rapid_views.views {
//!   println!("{}: {}", view.id, view.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Authenticated access works either with a static basic-auth credential or
//! with a session cookie obtained via [`JiraClient::login`]:
//!
//! ```no_run
//! use greenhopper::{Credential, JiraClient};
//!
//! # async fn run() -> greenhopper::Result<()> {
//! let mut client = JiraClient::new("https://jira.example.com/", Credential::Anonymous)?;
//! let session = client.login("fred", "freds_password").await?;
//! let query = client.sprint_query(1159).await?;
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod consts;
mod endpoints;
mod error;
pub mod models;

// Re-export the client and credential
pub use auth::Credential;
pub use client::JiraClient;
pub use consts::SESSION_COOKIE_NAME;
// Re-export the error type
pub use error::{Error, Result};
// Re-export models
pub use models::{
  CurrentSession, EpicField, EstimateStatistic, Filter, FilterOwner, Issue, LoginInfo, RapidView, RapidViewList,
  Session, SessionCookie, Sprint, SprintQueryResult, SprintReport, SprintReportContents, StatFieldValue,
};
