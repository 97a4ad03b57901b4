#![deny(unsafe_code)]

//! Data model for the lumen dashboard recommendation engine.
//!
//! Everything here is plain data: schema-less rows and datasets, chart
//! blueprints with semantic axis roles, resolved chart specifications with
//! real column bindings, and KPI definitions. The resolution logic that
//! connects blueprints to datasets lives in `lumen-resolve` and `lumen-kpi`.

pub mod chart;
pub mod dataset;
pub mod industry;
pub mod kpi;

pub use chart::{
    ChartBlueprint, ChartKind, ChartPriority, ChartSize, ResolvedChartSpec, RoleSpec,
    TemplatePool, TemplateVariation,
};
pub use dataset::{COUNT_COLUMN, Dataset, Row, Value};
pub use industry::Industry;
pub use kpi::{Aggregation, IndustryConfig, KpiCard, KpiDefinition};
