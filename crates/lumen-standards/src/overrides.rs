//! Externally supplied override configuration.
//!
//! Hosts may ship a JSON bundle replacing the built-in KPI definitions
//! and/or template pools per industry. The bundle is parsed and merged
//! exactly once, by [`Registry::initialize`](crate::Registry::initialize).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lumen_model::{KpiDefinition, TemplateVariation};

use crate::error::StandardsError;

/// Overrides for a single industry key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryOverride {
    /// Display name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces the built-in flat KPI list wholesale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpis: Option<Vec<KpiDefinition>>,
    /// Per-variation KPI lists, keyed by 0-based variation index as a
    /// string. Index `"0"` is the default entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_kpis: Option<BTreeMap<String, Vec<KpiDefinition>>>,
    /// Replaces the template pool verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateVariation>>,
}

/// A full override bundle: industry key to overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideBundle {
    pub industries: BTreeMap<String, IndustryOverride>,
}

impl OverrideBundle {
    /// Parses a bundle from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self, StandardsError> {
        serde_json::from_str(raw).map_err(|source| StandardsError::Json { source })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_bundle() {
        let raw = r#"{
            "crm": {
                "kpis": [{
                    "title": "Won Deals",
                    "keyMatch": "lead_status",
                    "aggregation": "count",
                    "glyph": "trophy",
                    "style": "emerald"
                }],
                "templateKpis": {
                    "0": []
                }
            }
        }"#;
        let bundle = OverrideBundle::from_json(raw).expect("parse bundle");
        let crm = bundle.industries.get("crm").expect("crm entry");
        assert_eq!(crm.kpis.as_ref().map(Vec::len), Some(1));
        assert!(crm.templates.is_none());
        assert!(crm.template_kpis.as_ref().is_some_and(|m| m.contains_key("0")));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            OverrideBundle::from_json("{"),
            Err(StandardsError::Json { .. })
        ));
    }
}
