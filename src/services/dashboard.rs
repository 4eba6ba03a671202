use crate::domain::alert::Alert;
use crate::domain::project::Project;
use crate::services::metrics::kpi_snapshot;
use crate::services::money::{format_money, MONEY_PLACEHOLDER};
use crate::services::risk::{project_loss, project_tier};
use crate::services::triage::{
    alert_for_project, alerts_newest_first, is_project_assigned, latest_pending_alert, top_risk,
};

/// How many projects the home view lists.
const TOP_RISK_LIMIT: usize = 5;

/// The home view: latest pending alert, fleet KPIs, and the top risk
/// projects. Plain text, no markup; presentation stops at strings here.
pub fn render_dashboard(projects: &[Project], alerts: &[Alert]) -> String {
    let mut lines = Vec::new();
    lines.push("# Project Margin Early Warning".to_string());
    lines.push(String::new());

    lines.push("## Latest alert".to_string());
    match latest_pending_alert(alerts) {
        Some(alert) => {
            let project = projects.iter().find(|p| p.id == alert.project_id);
            match project {
                Some(project) => {
                    lines.push(format!("{} ({})", project.name, project.id));
                    lines.push(format!(
                        "  forecast margin {} / target {}, estimated loss {}",
                        format_pct(project.forecast_margin_pct),
                        format_pct(project.target_margin_pct),
                        format_money(positive_loss(project)),
                    ));
                }
                None => lines.push(format!("(unknown project {})", alert.project_id)),
            }
            lines.push(format!("  reason: {}", alert.reason));
        }
        None => {
            lines.push("All clear: every project margin is in the safe range.".to_string());
        }
    }
    lines.push(String::new());

    let kpi = kpi_snapshot(projects);
    lines.push("## This month".to_string());
    lines.push(format!("  avg forecast margin: {}%", kpi.avg_forecast_margin));
    lines.push(format!("  avg target margin: {}%", kpi.avg_target_margin));
    lines.push(format!("  high risk projects: {}", kpi.high_risk_count));
    lines.push(String::new());

    lines.push("## Top risk projects".to_string());
    for project in top_risk(projects, TOP_RISK_LIMIT) {
        let tier = project_tier(project);
        let mut line = format!(
            "- [{}] {} ({}) forecast {} / target {}, contract {}",
            tier.label(),
            project.name,
            project.id,
            format_pct(project.forecast_margin_pct),
            format_pct(project.target_margin_pct),
            format_money(project.contract_amount.map(|v| v as f64)),
        );
        if is_project_assigned(alerts, &project.id) {
            line.push_str(" [assigned]");
        }
        lines.push(line);
        if let Some(reason) = &project.risk_reason {
            lines.push(format!("  {reason}"));
        }
    }

    lines.join("\n")
}

/// One project in full: margins, loss estimate, cost drivers, suggested
/// actions, labor hours, and the assignment state of its alert.
pub fn render_project_detail(project: &Project, alerts: &[Alert]) -> String {
    let tier = project_tier(project);
    let loss = project_loss(project);

    let mut lines = Vec::new();
    lines.push(format!("# {} ({})", project.name, project.id));
    if let Some(client) = &project.client {
        lines.push(format!("client: {client}"));
    }
    lines.push(format!(
        "contract amount: {}",
        format_money(project.contract_amount.map(|v| v as f64))
    ));
    lines.push(format!(
        "forecast margin: {} [{}]",
        format_pct(project.forecast_margin_pct),
        tier.label()
    ));
    lines.push(format!("target margin: {}", format_pct(project.target_margin_pct)));
    lines.push(format!(
        "estimated loss: {}",
        if loss > 0 {
            format_money(Some(loss as f64))
        } else {
            MONEY_PLACEHOLDER.to_string()
        }
    ));
    if let (Some(actual), Some(estimated)) = (project.actual_hours, project.estimated_hours) {
        lines.push(format!("labor hours: {actual} actual / {estimated} estimated"));
    }

    if !project.risk_factors.is_empty() {
        lines.push(String::new());
        lines.push("## Risk factors".to_string());
        for factor in &project.risk_factors {
            lines.push(format!("- {}: {}", factor.label, factor.value));
        }
    }

    if !project.suggestions.is_empty() {
        lines.push(String::new());
        lines.push("## Suggested actions".to_string());
        for suggestion in &project.suggestions {
            lines.push(format!("- {suggestion}"));
        }
    }

    lines.push(String::new());
    match alert_for_project(alerts, &project.id) {
        Some(alert) if !alert.is_pending() => {
            lines.push(format!(
                "assigned to {} (due {})",
                alert.assigned_to.as_deref().unwrap_or("?"),
                alert.due_label.as_deref().unwrap_or("?")
            ));
            if let Some(note) = alert.note.as_deref().filter(|note| !note.is_empty()) {
                lines.push(format!("note: {note}"));
            }
        }
        Some(_) => lines.push("alert pending: needs a project manager".to_string()),
        None => lines.push("no alert on file".to_string()),
    }

    lines.join("\n")
}

/// Alert list, newest first.
pub fn render_alert_list(alerts: &[Alert], projects: &[Project]) -> String {
    if alerts.is_empty() {
        return "No alerts on file.".to_string();
    }

    let mut lines = Vec::new();
    for alert in alerts_newest_first(alerts) {
        let name = projects
            .iter()
            .find(|p| p.id == alert.project_id)
            .map(|p| p.name.as_str())
            .unwrap_or(alert.project_id.as_str());
        let state = match (alert.is_pending(), alert.assigned_to.as_deref()) {
            (true, _) => "pending".to_string(),
            (false, Some(assignee)) => format!("assigned to {assignee}"),
            (false, None) => "assigned".to_string(),
        };
        lines.push(format!(
            "- {} [{}] {} ({})",
            alert.created_at.format("%Y-%m-%d %H:%M"),
            state,
            alert.reason,
            name
        ));
    }
    lines.join("\n")
}

fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value}%"),
        None => MONEY_PLACEHOLDER.to_string(),
    }
}

fn positive_loss(project: &Project) -> Option<f64> {
    let loss = project_loss(project);
    if loss > 0 {
        Some(loss as f64)
    } else {
        None
    }
}
