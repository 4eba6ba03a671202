mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::io;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands, StoreArgs};
use crate::services::dashboard::{render_alert_list, render_dashboard, render_project_detail};
use crate::services::data_source::{AssignmentRequest, ProjectStore, StoreError};
use crate::services::portfolio_yaml::serialize_portfolio_to_yaml;
use crate::services::seed::sample_portfolio;
use crate::services::supabase_api::{AuthData, SupabaseClient, SupabaseConfig};
use crate::services::trend_chart::render_trend_svg;
use crate::services::yaml_store::YamlPortfolioStore;

fn open_store(store_args: &StoreArgs) -> Result<Box<dyn ProjectStore>, StoreError> {
    if let Some(path) = &store_args.input {
        return Ok(Box::new(YamlPortfolioStore::new(path)));
    }
    let Some(config_path) = &store_args.config else {
        return Err(StoreError::Other(
            "either --input or --config is required".to_string(),
        ));
    };
    let config = SupabaseConfig::from_yaml_file(config_path)?;
    let auth = AuthData::from_env()?;
    Ok(Box::new(SupabaseClient::new(config, auth)?))
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    match args.command {
        Commands::Seed { output } => {
            let yaml = match serialize_portfolio_to_yaml(&sample_portfolio()) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize sample portfolio: {e:?}");
                    return;
                }
            };
            if let Err(e) = tokio::fs::write(&output, yaml).await {
                eprintln!("Failed to write output file: {e:?}");
            } else {
                println!("Sample portfolio written to {output}");
            }
        }
        Commands::Dashboard { store } => {
            let store = match open_store(&store) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to open store: {e:?}");
                    return;
                }
            };
            let projects = match store.list_projects().await {
                Ok(projects) => projects,
                Err(e) => {
                    eprintln!("Failed to list projects: {e:?}");
                    return;
                }
            };
            let alerts = match store.list_alerts().await {
                Ok(alerts) => alerts,
                Err(e) => {
                    eprintln!("Failed to list alerts: {e:?}");
                    return;
                }
            };
            println!("{}", render_dashboard(&projects, &alerts));
        }
        Commands::Alerts { store } => {
            let store = match open_store(&store) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to open store: {e:?}");
                    return;
                }
            };
            let projects = match store.list_projects().await {
                Ok(projects) => projects,
                Err(e) => {
                    eprintln!("Failed to list projects: {e:?}");
                    return;
                }
            };
            let alerts = match store.list_alerts().await {
                Ok(alerts) => alerts,
                Err(e) => {
                    eprintln!("Failed to list alerts: {e:?}");
                    return;
                }
            };
            println!("{}", render_alert_list(&alerts, &projects));
        }
        Commands::Show { store, project } => {
            let store = match open_store(&store) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to open store: {e:?}");
                    return;
                }
            };
            let project = match store.get_project(&project).await {
                Ok(project) => project,
                Err(e) => {
                    eprintln!("Failed to get project: {e:?}");
                    return;
                }
            };
            let alerts = match store.list_alerts().await {
                Ok(alerts) => alerts,
                Err(e) => {
                    eprintln!("Failed to list alerts: {e:?}");
                    return;
                }
            };
            println!("{}", render_project_detail(&project, &alerts));
        }
        Commands::Chart {
            store,
            project,
            output,
            width,
            height,
        } => {
            let store = match open_store(&store) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to open store: {e:?}");
                    return;
                }
            };
            let project = match store.get_project(&project).await {
                Ok(project) => project,
                Err(e) => {
                    eprintln!("Failed to get project: {e:?}");
                    return;
                }
            };
            let svg = match render_trend_svg(&project, width, height) {
                Ok(svg) => svg,
                Err(e) => {
                    eprintln!("Failed to render trend chart: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = tokio::fs::write(&output, svg).await {
                eprintln!("Failed to write output file: {e:?}");
            } else {
                println!("Trend chart written to {output}");
            }
        }
        Commands::Assign {
            store,
            alert,
            pm,
            due,
            note,
        } => {
            let store = match open_store(&store) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to open store: {e:?}");
                    return;
                }
            };
            let request = AssignmentRequest {
                alert_id: alert,
                assignee: pm,
                due_label: due,
                note,
            };
            match store.assign_alert(&request).await {
                Ok(updated) => {
                    println!(
                        "Alert {} assigned to {} (due {})",
                        updated.id,
                        updated.assigned_to.as_deref().unwrap_or(&request.assignee),
                        updated.due_label.as_deref().unwrap_or(&request.due_label)
                    );
                }
                Err(e) => {
                    eprintln!("Failed to assign alert: {e:?}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            clap_complete::generate(shell, &mut command, "marginwatch", &mut io::stdout());
        }
    }
}
