pub mod chart_geometry;
pub mod dashboard;
pub mod data_source;
pub mod metrics;
pub mod money;
pub mod portfolio_yaml;
pub mod risk;
pub mod seed;
pub mod supabase_api;
pub mod trend_chart;
pub mod triage;
pub mod yaml_store;
