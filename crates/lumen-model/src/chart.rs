//! Chart blueprints, template variations and resolved chart specifications.
//!
//! A blueprint's axes name *semantic roles* (e.g. `"region"`, `"sales"`),
//! never real columns. Binding roles to the columns of a concrete dataset
//! produces a [`ResolvedChartSpec`], which is what the rendering layer
//! consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of chart a blueprint describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
    Donut,
    Scatter,
    Radar,
}

impl ChartKind {
    /// Canonical lowercase token, as used in serialized chart specs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
            ChartKind::Scatter => "scatter",
            ChartKind::Radar => "radar",
        }
    }

    /// Human-readable label for chart titles.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Area => "Area",
            ChartKind::Pie => "Pie",
            ChartKind::Donut => "Donut",
            ChartKind::Scatter => "Scatter",
            ChartKind::Radar => "Radar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering priority of a chart within a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPriority {
    High,
    Medium,
}

/// Layout size of a chart within a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSize {
    /// The hero slot: one per variation, rendered full-width.
    Large,
    Normal,
}

/// The y-axis of a blueprint: one semantic role, or several for
/// multi-series charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleSpec {
    Single(String),
    Multi(Vec<String>),
}

impl RoleSpec {
    /// The roles in declaration order.
    #[must_use]
    pub fn roles(&self) -> Vec<&str> {
        match self {
            RoleSpec::Single(role) => vec![role.as_str()],
            RoleSpec::Multi(roles) => roles.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn is_multi(&self) -> bool {
        matches!(self, RoleSpec::Multi(_))
    }
}

impl From<&str> for RoleSpec {
    fn from(role: &str) -> Self {
        RoleSpec::Single(role.to_string())
    }
}

/// An abstract chart description: axes reference semantic roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBlueprint {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    /// Semantic role for the x axis (e.g. `"region"`).
    pub x_role: String,
    /// Semantic role(s) for the y axis (e.g. `"sales"`).
    pub y_role: RoleSpec,
    pub x_label: String,
    pub y_label: String,
    pub priority: ChartPriority,
    pub size: ChartSize,
    /// Ordered color palette; may be overridden per industry at resolution.
    pub palette: Vec<String>,
}

/// One complete dashboard layout option: a hero chart plus three small
/// charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateVariation {
    pub charts: Vec<ChartBlueprint>,
}

impl TemplateVariation {
    #[must_use]
    pub fn new(charts: Vec<ChartBlueprint>) -> Self {
        Self { charts }
    }

    /// The large, high-priority chart (first entry of a well-formed
    /// variation).
    #[must_use]
    pub fn hero(&self) -> Option<&ChartBlueprint> {
        self.charts.first()
    }

    /// True when the variation holds exactly 4 charts with the hero first.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.charts.len() == 4
            && self.charts[0].size == ChartSize::Large
            && self.charts[1..].iter().all(|c| c.size == ChartSize::Normal)
    }
}

/// The variations available for one industry, addressed by a 1-based
/// template id (`"template1"`..`"template10"`).
pub type TemplatePool = Vec<TemplateVariation>;

/// A blueprint with its roles bound to concrete dataset columns.
///
/// When `resolved` is false (empty dataset), `x_column`/`y_columns` still
/// carry the semantic role strings; the rendering layer treats that as the
/// "no data yet" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub x_column: String,
    pub y_columns: Vec<String>,
    pub x_label: String,
    pub y_label: String,
    pub priority: ChartPriority,
    pub size: ChartSize,
    pub palette: Vec<String>,
    pub resolved: bool,
}
