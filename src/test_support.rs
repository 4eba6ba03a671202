use chrono::NaiveDate;

use crate::domain::alert::{Alert, AlertStatus};
use crate::domain::project::Project;

pub fn build_project(id: &str, target: Option<f64>, forecast: Option<f64>) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {id}"),
        client: None,
        contract_amount: Some(1_000_000),
        target_margin_pct: target,
        forecast_margin_pct: forecast,
        risk_reason: None,
        risk_factors: Vec::new(),
        suggestions: Vec::new(),
        trend: None,
        estimated_hours: None,
        actual_hours: None,
    }
}

pub fn build_alert(id: &str, project_id: &str, day: u32) -> Alert {
    Alert {
        id: id.to_string(),
        project_id: project_id.to_string(),
        reason: format!("margin slipped on {project_id}"),
        severity: None,
        status: AlertStatus::Pending,
        created_at: NaiveDate::from_ymd_opt(2026, 2, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        assigned_to: None,
        due_label: None,
        note: None,
    }
}
