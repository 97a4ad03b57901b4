//! KPI definitions and computed KPI cards.

use serde::{Deserialize, Serialize};

/// How a KPI aggregates rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Sum of the resolved column's numeric values.
    Sum,
    /// Sum divided by row count.
    Avg,
    /// Number of distinct values in the resolved column (row count when no
    /// column resolves).
    Count,
}

impl Aggregation {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Count => "count",
        }
    }
}

/// One KPI card definition belonging to an industry config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDefinition {
    /// Card title, e.g. `"Total Revenue"`.
    pub title: String,
    /// Regex source matched (case-insensitively) against dataset column
    /// names to pick the target column; first match wins.
    pub key_match: String,
    pub aggregation: Aggregation,
    /// Prefix for the formatted value; `"$"` selects currency styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_prefix: Option<String>,
    /// Suffix appended to the formatted value, e.g. `"%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_suffix: Option<String>,
    /// Icon token for the card renderer, e.g. `"trending-up"`.
    pub glyph: String,
    /// Style token for the card renderer, e.g. `"emerald"`.
    pub style: String,
}

impl KpiDefinition {
    pub fn new(
        title: &str,
        key_match: &str,
        aggregation: Aggregation,
        glyph: &str,
        style: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            key_match: key_match.to_string(),
            aggregation,
            value_prefix: None,
            value_suffix: None,
            glyph: glyph.to_string(),
            style: style.to_string(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.value_prefix = Some(prefix.to_string());
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.value_suffix = Some(suffix.to_string());
        self
    }

    /// True when the card should be rendered as a currency amount.
    #[must_use]
    pub fn is_currency(&self) -> bool {
        self.value_prefix.as_deref() == Some("$")
    }
}

/// The KPI configuration for one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryConfig {
    /// Display name, e.g. `"Finance"`.
    pub name: String,
    /// Ordered KPI definitions; order is the card render order.
    pub kpis: Vec<KpiDefinition>,
}

/// A computed KPI ready for the card renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub title: String,
    pub formatted_value: String,
    pub glyph: String,
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_detection() {
        let kpi = KpiDefinition::new("Total Revenue", "revenue", Aggregation::Sum, "dollar", "emerald")
            .with_prefix("$");
        assert!(kpi.is_currency());
        let kpi = KpiDefinition::new("Rate", "rate", Aggregation::Avg, "percent", "blue")
            .with_suffix("%");
        assert!(!kpi.is_currency());
    }

    #[test]
    fn definition_round_trips_camel_case() {
        let json = r#"{
            "title": "Pipeline Value",
            "keyMatch": "est_value|value",
            "aggregation": "sum",
            "valuePrefix": "$",
            "glyph": "dollar-sign",
            "style": "emerald"
        }"#;
        let kpi: KpiDefinition = serde_json::from_str(json).expect("deserialize");
        assert_eq!(kpi.aggregation, Aggregation::Sum);
        assert_eq!(kpi.value_prefix.as_deref(), Some("$"));
        assert_eq!(kpi.value_suffix, None);
    }
}
