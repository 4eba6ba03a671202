use thiserror::Error;

use crate::domain::alert::Alert;
use crate::domain::project::Project;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("resource not found")]
    NotFound,
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

/// One pending→assigned transition, as requested by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRequest {
    pub alert_id: String,
    pub assignee: String,
    pub due_label: String,
    pub note: Option<String>,
}

/// Describes an interface for reading portfolio snapshots and writing
/// alert assignments back.
///
/// The core computations stay pure; all mutation lives behind this trait.
/// Implementations must apply assignment fields all-or-nothing and leave
/// the alert untouched when the write fails.
#[async_trait::async_trait]
pub trait ProjectStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn get_project(&self, project_id: &str) -> Result<Project, StoreError>;
    async fn list_alerts(&self) -> Result<Vec<Alert>, StoreError>;
    async fn assign_alert(&self, request: &AssignmentRequest) -> Result<Alert, StoreError>;
}
