use assert_fs::prelude::*;
use predicates::prelude::*;
use tokio::task;
use warp::Filter;

fn project_rows() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "P201",
            "name": "倉儲環控改善",
            "client": "台灣防潮科技",
            "contract_amount": 2_380_000,
            "target_margin_pct": 20,
            "forecast_margin_pct": 9,
            "risk_reason": "設備漲價",
            "risk_factors": [{"label": "設備漲價", "value": "+14%"}],
            "suggestions": ["重新議價"],
            "trend": [19, 14, 9],
            "estimated_hours": null,
            "actual_hours": null
        },
        {
            "id": "P202",
            "name": "無塵室恆濕工程",
            "client": null,
            "contract_amount": 4_200_000,
            "target_margin_pct": 18,
            "forecast_margin_pct": 21,
            "risk_reason": null,
            "risk_factors": [],
            "suggestions": [],
            "trend": null,
            "estimated_hours": null,
            "actual_hours": null
        }
    ])
}

fn alert_rows() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "A201",
            "project_id": "P201",
            "message": "倉儲案毛利降至 9%",
            "severity": "red",
            "status": "open",
            "created_at": "2026-02-14T09:30:00+00:00",
            "assigned_to": null,
            "due_label": null,
            "note": null
        }
    ])
}

fn write_config(addr: std::net::SocketAddr) -> assert_fs::NamedTempFile {
    let config_yaml = format!(
        r#"
base_url: http://{addr}
projects_table: projects
alerts_table: alerts
"#
    );
    let config_file = assert_fs::NamedTempFile::new("supabase.yaml").unwrap();
    config_file.write_str(&config_yaml).unwrap();
    config_file
}

#[tokio::test]
async fn dashboard_reads_the_hosted_tables() {
    let projects = project_rows();
    let alerts = alert_rows();
    let routes = warp::path!("rest" / "v1" / "projects")
        .and(warp::get())
        .map(move || warp::reply::json(&projects))
        .or(warp::path!("rest" / "v1" / "alerts")
            .and(warp::get())
            .map(move || warp::reply::json(&alerts)));
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let config_file = write_config(addr);
    let config_arg = config_file.path().to_str().unwrap().to_string();

    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::Command::cargo_bin("marginwatch").unwrap();
        cmd.env("SUPABASE_API_KEY", "test-key");
        cmd.args(["dashboard", "-c", &config_arg]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("倉儲環控改善 (P201)"))
            .stdout(predicate::str::contains("high risk projects: 1"))
            // "open" row counts as pending, and the tier is derived from
            // the forecast margin, not the stored severity.
            .stdout(predicate::str::contains("[red] 倉儲環控改善"))
            .stdout(predicate::str::contains("[green] 無塵室恆濕工程"));
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn assign_patches_the_alert_row() {
    let updated = serde_json::json!([
        {
            "id": "A201",
            "project_id": "P201",
            "message": "倉儲案毛利降至 9%",
            "severity": "red",
            "status": "assigned",
            "created_at": "2026-02-14T09:30:00+00:00",
            "assigned_to": "王小明",
            "due_label": "3 天內",
            "note": ""
        }
    ]);
    let route = warp::path!("rest" / "v1" / "alerts")
        .and(warp::patch())
        .map(move || warp::reply::json(&updated));
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let config_file = write_config(addr);
    let config_arg = config_file.path().to_str().unwrap().to_string();

    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::Command::cargo_bin("marginwatch").unwrap();
        cmd.env("SUPABASE_API_KEY", "test-key");
        cmd.args(["assign", "-c", &config_arg, "-a", "A201", "-p", "王小明", "-d", "3 天內"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Alert A201 assigned to 王小明"));
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn missing_api_key_is_reported_before_any_request() {
    let config_file = write_config(([127, 0, 0, 1], 9).into());
    let config_arg = config_file.path().to_str().unwrap().to_string();

    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::Command::cargo_bin("marginwatch").unwrap();
        cmd.env_remove("SUPABASE_API_KEY");
        cmd.args(["dashboard", "-c", &config_arg]);

        cmd.assert()
            .stderr(predicate::str::contains("Unauthorized"));
    })
    .await
    .unwrap();
}
