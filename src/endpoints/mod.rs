//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the Jira resources this crate
//! covers: session management, rapid views, and sprint data.

pub mod session;
pub mod sprints;
pub mod views;
