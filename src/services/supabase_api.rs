use std::env;
use std::fs;

use chrono::{DateTime, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::alert::{Alert, AlertStatus};
use crate::domain::project::{Project, RiskFactor};
use crate::services::data_source::{AssignmentRequest, ProjectStore, StoreError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupabaseConfig {
    pub base_url: String,
    pub projects_table: String,
    pub alerts_table: String,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            projects_table: "projects".to_string(),
            alerts_table: "alerts".to_string(),
        }
    }
}

impl SupabaseConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| StoreError::Other(format!("failed to read config: {err}")))?;
        let config: SupabaseConfig =
            serde_yaml::from_str(&contents).map_err(|_| StoreError::Parse)?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct AuthData {
    pub api_key: String,
}

impl AuthData {
    pub fn from_env() -> Result<Self, StoreError> {
        match env::var("SUPABASE_API_KEY") {
            Ok(api_key) => Ok(Self { api_key }),
            Err(_) => Err(StoreError::Unauthorized),
        }
    }
}

/// Store adapter over a hosted Supabase table pair.
///
/// All field-name translation between the hosted rows and the canonical
/// domain shape happens here; nothing downstream sees `snake_case` column
/// quirks or the backend's stored severity. Rows without a trend history
/// stay without one — the adapter never fabricates placeholder samples.
pub struct SupabaseClient {
    config: SupabaseConfig,
    auth: AuthData,
    client: Client,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig, auth: AuthData) -> Result<Self, StoreError> {
        if config.base_url.is_empty() {
            return Err(StoreError::Other(
                "supabase config is missing base_url".to_string(),
            ));
        }

        Ok(Self {
            config,
            auth,
            client: Client::new(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    async fn fetch_rows(&self, table: &str) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .header("apikey", self.auth.api_key.clone())
            .bearer_auth(self.auth.api_key.clone())
            .send()
            .await
            .map_err(|_| StoreError::Connection)?;

        let payload = check_status(response)?.json::<Value>().await.map_err(|_| StoreError::Parse)?;
        payload.as_array().cloned().ok_or(StoreError::Parse)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(StoreError::Unauthorized);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(StoreError::NotFound);
    }
    if !status.is_success() {
        return Err(StoreError::Connection);
    }
    Ok(response)
}

#[derive(Deserialize)]
struct ProjectRow {
    id: String,
    name: String,
    client: Option<String>,
    contract_amount: Option<i64>,
    target_margin_pct: Option<f64>,
    forecast_margin_pct: Option<f64>,
    risk_reason: Option<String>,
    risk_factors: Option<Vec<RiskFactor>>,
    suggestions: Option<Vec<String>>,
    trend: Option<Vec<f64>>,
    estimated_hours: Option<f64>,
    actual_hours: Option<f64>,
}

#[derive(Deserialize)]
struct AlertRow {
    id: String,
    project_id: String,
    #[serde(alias = "message")]
    reason: String,
    severity: Option<String>,
    status: String,
    created_at: String,
    assigned_to: Option<String>,
    due_label: Option<String>,
    note: Option<String>,
}

fn map_project(row: Value) -> Result<Project, StoreError> {
    let row: ProjectRow = serde_json::from_value(row).map_err(|_| StoreError::Parse)?;
    Ok(Project {
        id: row.id,
        name: row.name,
        client: row.client,
        contract_amount: row.contract_amount,
        target_margin_pct: row.target_margin_pct,
        forecast_margin_pct: row.forecast_margin_pct,
        risk_reason: row.risk_reason,
        risk_factors: row.risk_factors.unwrap_or_default(),
        suggestions: row.suggestions.unwrap_or_default(),
        trend: row.trend,
        estimated_hours: row.estimated_hours,
        actual_hours: row.actual_hours,
    })
}

fn map_alert(row: Value) -> Result<Alert, StoreError> {
    let row: AlertRow = serde_json::from_value(row).map_err(|_| StoreError::Parse)?;
    Ok(Alert {
        id: row.id,
        project_id: row.project_id,
        reason: row.reason,
        severity: row.severity,
        status: parse_status(&row.status)?,
        created_at: parse_timestamp(&row.created_at)?,
        assigned_to: row.assigned_to,
        due_label: row.due_label,
        note: row.note,
    })
}

fn parse_status(value: &str) -> Result<AlertStatus, StoreError> {
    match value {
        "pending" | "open" => Ok(AlertStatus::Pending),
        "assigned" => Ok(AlertStatus::Assigned),
        _ => Err(StoreError::Parse),
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, StoreError> {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.naive_utc())
        .map_err(|_| StoreError::Parse)
}

#[async_trait::async_trait]
impl ProjectStore for SupabaseClient {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.fetch_rows(&self.config.projects_table)
            .await?
            .into_iter()
            .map(map_project)
            .collect()
    }

    async fn get_project(&self, project_id: &str) -> Result<Project, StoreError> {
        let filter = format!("eq.{project_id}");
        let response = self
            .client
            .get(self.table_url(&self.config.projects_table))
            .query(&[("select", "*"), ("id", filter.as_str())])
            .header("apikey", self.auth.api_key.clone())
            .bearer_auth(self.auth.api_key.clone())
            .send()
            .await
            .map_err(|_| StoreError::Connection)?;

        let payload = check_status(response)?.json::<Value>().await.map_err(|_| StoreError::Parse)?;
        let rows = payload.as_array().cloned().ok_or(StoreError::Parse)?;
        let row = rows.into_iter().next().ok_or(StoreError::NotFound)?;
        map_project(row)
    }

    async fn list_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        self.fetch_rows(&self.config.alerts_table)
            .await?
            .into_iter()
            .map(map_alert)
            .collect()
    }

    async fn assign_alert(&self, request: &AssignmentRequest) -> Result<Alert, StoreError> {
        let body = serde_json::json!({
            "status": "assigned",
            "assigned_to": request.assignee,
            "due_label": request.due_label,
            "note": request.note.as_deref().unwrap_or(""),
        });

        let response = self
            .client
            .patch(self.table_url(&self.config.alerts_table))
            .query(&[("id", format!("eq.{}", request.alert_id))])
            .header("apikey", self.auth.api_key.clone())
            .bearer_auth(self.auth.api_key.clone())
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(|_| StoreError::Connection)?;

        let payload = check_status(response)?.json::<Value>().await.map_err(|_| StoreError::Parse)?;
        let rows = payload.as_array().cloned().ok_or(StoreError::Parse)?;
        let row = rows.into_iter().next().ok_or(StoreError::NotFound)?;
        map_alert(row)
    }
}
