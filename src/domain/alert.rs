use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Awaiting a project manager. Hosted tables sometimes store this
    /// state as "open".
    #[serde(alias = "open")]
    Pending,
    Assigned,
}

/// A flagged at-risk project awaiting assignment to a responsible manager.
///
/// Invariant: the assignment fields are all-or-nothing. They are `None`
/// while the alert is pending and are populated together with the switch to
/// `Assigned`; an alert never goes back to pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub project_id: String,
    pub reason: String,
    /// Severity as stored by the backend, if any. Display hint only; the
    /// authoritative tier is always derived from the forecast margin.
    pub severity: Option<String>,
    pub status: AlertStatus,
    pub created_at: NaiveDateTime,
    pub assigned_to: Option<String>,
    pub due_label: Option<String>,
    pub note: Option<String>,
}

impl Alert {
    pub fn is_pending(&self) -> bool {
        self.status == AlertStatus::Pending
    }

    /// Applies an assignment in one step so the all-or-nothing invariant
    /// cannot be broken halfway.
    pub fn apply_assignment(&mut self, assignee: &str, due_label: &str, note: Option<&str>) {
        self.status = AlertStatus::Assigned;
        self.assigned_to = Some(assignee.to_string());
        self.due_label = Some(due_label.to_string());
        self.note = Some(note.unwrap_or("").to_string());
    }
}
