//! Constants for the greenhopper client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Name of the servlet session cookie issued by Jira
pub const SESSION_COOKIE_NAME: &str = "JSESSIONID";
