use std::io;
use std::path::PathBuf;

use crate::domain::alert::Alert;
use crate::domain::project::Project;
use crate::services::data_source::{AssignmentRequest, ProjectStore, StoreError};
use crate::services::portfolio_yaml::{
    deserialize_portfolio_from_yaml_str, serialize_portfolio_to_yaml, Portfolio,
};

/// File-backed store over one portfolio snapshot YAML.
///
/// Every call re-reads the file, so the store holds no long-lived state;
/// an assignment is a load, one in-memory mutation, and a full write-back.
pub struct YamlPortfolioStore {
    path: PathBuf,
}

impl YamlPortfolioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Portfolio, StoreError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound
            } else {
                StoreError::Other(format!("failed to read {}: {err}", self.path.display()))
            }
        })?;
        deserialize_portfolio_from_yaml_str(&contents).map_err(|_| StoreError::Parse)
    }

    async fn save(&self, portfolio: &Portfolio) -> Result<(), StoreError> {
        let yaml = serialize_portfolio_to_yaml(portfolio).map_err(|_| StoreError::Parse)?;
        tokio::fs::write(&self.path, yaml).await.map_err(|err| {
            StoreError::Other(format!("failed to write {}: {err}", self.path.display()))
        })
    }
}

#[async_trait::async_trait]
impl ProjectStore for YamlPortfolioStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.load().await?.projects)
    }

    async fn get_project(&self, project_id: &str) -> Result<Project, StoreError> {
        self.load()
            .await?
            .projects
            .into_iter()
            .find(|project| project.id == project_id)
            .ok_or(StoreError::NotFound)
    }

    async fn list_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        Ok(self.load().await?.alerts)
    }

    async fn assign_alert(&self, request: &AssignmentRequest) -> Result<Alert, StoreError> {
        let mut portfolio = self.load().await?;
        let alert = portfolio
            .alerts
            .iter_mut()
            .find(|alert| alert.id == request.alert_id)
            .ok_or(StoreError::NotFound)?;

        alert.apply_assignment(
            &request.assignee,
            &request.due_label,
            request.note.as_deref(),
        );
        let updated = alert.clone();
        self.save(&portfolio).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::AlertStatus;
    use crate::services::seed::sample_portfolio;
    use assert_fs::prelude::*;

    async fn seeded_store(file: &assert_fs::NamedTempFile) -> YamlPortfolioStore {
        let yaml = serialize_portfolio_to_yaml(&sample_portfolio()).unwrap();
        file.write_str(&yaml).unwrap();
        YamlPortfolioStore::new(file.path())
    }

    #[tokio::test]
    async fn lists_projects_and_alerts_from_the_snapshot() {
        let file = assert_fs::NamedTempFile::new("portfolio.yaml").unwrap();
        let store = seeded_store(&file).await;

        assert_eq!(store.list_projects().await.unwrap().len(), 6);
        assert_eq!(store.list_alerts().await.unwrap().len(), 3);
        assert_eq!(store.get_project("P005").await.unwrap().name, "竹科無塵室恆濕工程");
        assert!(matches!(
            store.get_project("P999").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn assignment_persists_across_reloads() {
        let file = assert_fs::NamedTempFile::new("portfolio.yaml").unwrap();
        let store = seeded_store(&file).await;

        let updated = store
            .assign_alert(&AssignmentRequest {
                alert_id: "A001".to_string(),
                assignee: "王小明".to_string(),
                due_label: "3 天內".to_string(),
                note: Some("先處理風管議價".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(updated.status, AlertStatus::Assigned);

        let reloaded = store.list_alerts().await.unwrap();
        let alert = reloaded.iter().find(|a| a.id == "A001").unwrap();
        assert_eq!(alert.status, AlertStatus::Assigned);
        assert_eq!(alert.assigned_to.as_deref(), Some("王小明"));
        assert_eq!(alert.due_label.as_deref(), Some("3 天內"));
        assert_eq!(alert.note.as_deref(), Some("先處理風管議價"));

        let untouched = reloaded.iter().find(|a| a.id == "A002").unwrap();
        assert_eq!(untouched.status, AlertStatus::Pending);
    }

    #[tokio::test]
    async fn assigning_an_unknown_alert_changes_nothing() {
        let file = assert_fs::NamedTempFile::new("portfolio.yaml").unwrap();
        let store = seeded_store(&file).await;

        let result = store
            .assign_alert(&AssignmentRequest {
                alert_id: "A999".to_string(),
                assignee: "王小明".to_string(),
                due_label: "3 天內".to_string(),
                note: None,
            })
            .await;
        assert!(matches!(result, Err(StoreError::NotFound)));

        let alerts = store.list_alerts().await.unwrap();
        assert!(alerts.iter().all(|alert| alert.is_pending()));
    }

    #[tokio::test]
    async fn missing_file_reads_as_not_found() {
        let store = YamlPortfolioStore::new("does-not-exist.yaml");
        assert!(matches!(
            store.list_projects().await,
            Err(StoreError::NotFound)
        ));
    }
}
