use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::alert::Alert;
use crate::domain::project::Project;

#[derive(Error, Debug)]
pub enum PortfolioYamlError {
    #[error("failed to read portfolio yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse portfolio yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// The snapshot document the file-backed store reads and writes: every
/// project plus every alert, in one YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

pub fn deserialize_portfolio_from_yaml_str(
    contents: &str,
) -> Result<Portfolio, PortfolioYamlError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn serialize_portfolio_to_yaml(portfolio: &Portfolio) -> Result<String, PortfolioYamlError> {
    Ok(serde_yaml::to_string(portfolio)?)
}
