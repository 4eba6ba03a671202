use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::alert::{Alert, AlertStatus};
use crate::domain::project::{Project, RiskFactor};
use crate::services::portfolio_yaml::Portfolio;

/// Realistic HVAC/environment-control portfolio used by `seed` and the
/// test suites: six projects (two red, two yellow, two green) and three
/// pending alerts on the at-risk ones.
pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        projects: vec![
            Project {
                id: "P001".to_string(),
                name: "溜冰場環控工程".to_string(),
                client: Some("台灣防潮科技".to_string()),
                contract_amount: Some(5_835_168),
                target_margin_pct: Some(20.0),
                forecast_margin_pct: Some(9.0),
                risk_reason: Some("除濕機設備漲價＋風管安裝工時超支".to_string()),
                risk_factors: vec![
                    factor("除濕機設備漲價", "+14%"),
                    factor("螺旋風管安裝工時", "+11%"),
                    factor("排程延誤", "5 天"),
                ],
                suggestions: vec![
                    "與供應商重新議價".to_string(),
                    "外包風管安裝工序".to_string(),
                    "與業主談變更追加".to_string(),
                ],
                trend: Some(vec![21.0, 19.0, 16.0, 14.0, 11.0, 9.0]),
                estimated_hours: Some(320.0),
                actual_hours: Some(385.0),
            },
            Project {
                id: "P002".to_string(),
                name: "華可貴環控工程".to_string(),
                client: Some("華可貴股份有限公司".to_string()),
                contract_amount: Some(3_044_265),
                target_margin_pct: Some(18.0),
                forecast_margin_pct: Some(7.0),
                risk_reason: Some("現場配管重工，動力配電追加".to_string()),
                risk_factors: vec![
                    factor("排水配管重工", "+18%"),
                    factor("動力配電追加", "+9%"),
                    factor("防火填塞重做", "2 次"),
                ],
                suggestions: vec![
                    "與業主協商追加款".to_string(),
                    "調整配管施工順序".to_string(),
                    "增派配電師傅".to_string(),
                ],
                trend: Some(vec![19.0, 17.0, 14.0, 11.0, 9.0, 7.0]),
                estimated_hours: Some(240.0),
                actual_hours: Some(295.0),
            },
            Project {
                id: "P003".to_string(),
                name: "南港廠房除濕工程".to_string(),
                client: Some("台灣防潮科技".to_string()),
                contract_amount: Some(1_850_000),
                target_margin_pct: Some(20.0),
                forecast_margin_pct: Some(15.0),
                risk_reason: Some("銅管材料交期延遲，工班等待".to_string()),
                risk_factors: vec![
                    factor("銅管交期延遲", "4 天"),
                    factor("工班閒置成本", "+6%"),
                    factor("水管安裝微增", "+3%"),
                ],
                suggestions: vec![
                    "備用銅管供應商".to_string(),
                    "調整施工順序先做風管".to_string(),
                    "提前叫料".to_string(),
                ],
                trend: Some(vec![21.0, 20.0, 19.0, 18.0, 16.0, 15.0]),
                estimated_hours: Some(180.0),
                actual_hours: Some(198.0),
            },
            Project {
                id: "P004".to_string(),
                name: "數位發展部環控工程".to_string(),
                client: Some("台灣防潮科技".to_string()),
                contract_amount: Some(53_700),
                target_margin_pct: Some(22.0),
                forecast_margin_pct: Some(16.0),
                risk_reason: Some("小案場控制配電工時高於預估".to_string()),
                risk_factors: vec![
                    factor("控制配電工時", "+8%"),
                    factor("設備安裝調整", "+4%"),
                    factor("來回車程成本", "+2%"),
                ],
                suggestions: vec![
                    "併入其他案場施工".to_string(),
                    "簡化控制線路".to_string(),
                    "與業主確認規格".to_string(),
                ],
                trend: Some(vec![23.0, 22.0, 20.0, 19.0, 17.0, 16.0]),
                estimated_hours: Some(45.0),
                actual_hours: Some(52.0),
            },
            Project {
                id: "P005".to_string(),
                name: "竹科無塵室恆濕工程".to_string(),
                client: Some("聯華電子".to_string()),
                contract_amount: Some(4_200_000),
                target_margin_pct: Some(18.0),
                forecast_margin_pct: Some(21.0),
                risk_reason: Some("進度超前，設備採購議價成功".to_string()),
                risk_factors: vec![
                    factor("除濕機議價節省", "-5%"),
                    factor("風管安裝", "提前 2 天"),
                    factor("配電品質", "一次通過"),
                ],
                suggestions: vec![
                    "維持現狀".to_string(),
                    "記錄最佳實踐".to_string(),
                    "提前申請驗收".to_string(),
                ],
                trend: Some(vec![18.0, 18.0, 19.0, 20.0, 20.0, 21.0]),
                estimated_hours: Some(280.0),
                actual_hours: Some(252.0),
            },
            Project {
                id: "P006".to_string(),
                name: "桃園倉儲環控改善".to_string(),
                client: Some("台灣防潮科技".to_string()),
                contract_amount: Some(2_380_000),
                target_margin_pct: Some(20.0),
                forecast_margin_pct: Some(22.0),
                risk_reason: Some("材料用量低於預估，施工順利".to_string()),
                risk_factors: vec![
                    factor("螺旋風管節省", "-4%"),
                    factor("排水配管", "正常"),
                    factor("排程", "提前 1 天"),
                ],
                suggestions: vec![
                    "維持現狀".to_string(),
                    "記錄施工效率".to_string(),
                    "提前請款".to_string(),
                ],
                trend: Some(vec![20.0, 20.0, 21.0, 21.0, 22.0, 22.0]),
                estimated_hours: Some(200.0),
                actual_hours: Some(186.0),
            },
        ],
        alerts: vec![
            pending_alert(
                "A001",
                "P001",
                "溜冰場案除濕機漲價＋風管工時爆量，毛利降至 9%",
                at(2026, 2, 14, 9, 30),
            ),
            pending_alert(
                "A002",
                "P002",
                "華可貴案現場配管重工，動力配電追加，毛利僅 7%",
                at(2026, 2, 13, 14, 0),
            ),
            pending_alert(
                "A003",
                "P003",
                "南港案銅管延遲導致工班閒置，毛利下滑至 15%",
                at(2026, 2, 12, 11, 15),
            ),
        ],
    }
}

fn factor(label: &str, value: &str) -> RiskFactor {
    RiskFactor {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn pending_alert(id: &str, project_id: &str, reason: &str, created_at: NaiveDateTime) -> Alert {
    Alert {
        id: id.to_string(),
        project_id: project_id.to_string(),
        reason: reason.to_string(),
        severity: None,
        status: AlertStatus::Pending,
        created_at,
        assigned_to: None,
        due_label: None,
        note: None,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}
