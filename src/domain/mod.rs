pub mod alert;
pub mod kpi;
pub mod project;
pub mod risk;
