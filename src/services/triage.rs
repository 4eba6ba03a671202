use crate::domain::alert::Alert;
use crate::domain::project::Project;
use crate::services::risk::project_tier;

/// Projects ordered most-at-risk first (red, then yellow, then green).
/// The sort is stable, so store order breaks ties.
pub fn rank_by_risk(projects: &[Project]) -> Vec<&Project> {
    let mut ranked: Vec<&Project> = projects.iter().collect();
    ranked.sort_by_key(|p| project_tier(p));
    ranked
}

/// The N most at-risk projects.
pub fn top_risk(projects: &[Project], n: usize) -> Vec<&Project> {
    let mut ranked = rank_by_risk(projects);
    ranked.truncate(n);
    ranked
}

/// Alerts ordered newest first.
pub fn alerts_newest_first(alerts: &[Alert]) -> Vec<&Alert> {
    let mut ordered: Vec<&Alert> = alerts.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
}

/// The most recent alert still awaiting a project manager.
pub fn latest_pending_alert(alerts: &[Alert]) -> Option<&Alert> {
    alerts_newest_first(alerts)
        .into_iter()
        .find(|alert| alert.is_pending())
}

pub fn alert_for_project<'a>(alerts: &'a [Alert], project_id: &str) -> Option<&'a Alert> {
    alerts.iter().find(|alert| alert.project_id == project_id)
}

/// Whether any alert for this project has already been assigned.
pub fn is_project_assigned(alerts: &[Alert], project_id: &str) -> bool {
    alerts
        .iter()
        .any(|alert| alert.project_id == project_id && !alert.is_pending())
}
