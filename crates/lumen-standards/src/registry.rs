//! The write-once registry of industry configs and template pools.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use lumen_model::{Industry, IndustryConfig, KpiDefinition, TemplatePool, TemplateVariation};

use crate::builtin::builtin_config;
use crate::curated::curated_pool;
use crate::error::StandardsError;
use crate::generator::generate_pool;
use crate::overrides::OverrideBundle;

/// Immutable engine state: per-industry KPI configuration and template
/// pools, fixed at process start.
///
/// Built once via [`Registry::builtin`] or [`Registry::initialize`] and
/// passed by reference into the resolvers; there is no ambient singleton.
#[derive(Debug, Clone)]
pub struct Registry {
    configs: BTreeMap<Industry, IndustryConfig>,
    template_kpis: BTreeMap<Industry, BTreeMap<usize, Vec<KpiDefinition>>>,
    pools: BTreeMap<Industry, TemplatePool>,
}

impl Registry {
    /// Builds the registry from built-in data only.
    ///
    /// Pool resolution order per industry: curated pool when one ships,
    /// otherwise the seeded generator.
    #[must_use]
    pub fn builtin() -> Self {
        let mut configs = BTreeMap::new();
        let mut pools = BTreeMap::new();
        for industry in Industry::ALL {
            configs.insert(industry, builtin_config(industry));
            let pool =
                curated_pool(industry).unwrap_or_else(|| generate_pool(industry.as_key()));
            pools.insert(industry, pool);
        }
        Self {
            configs,
            template_kpis: BTreeMap::new(),
            pools,
        }
    }

    /// Builds the registry with an override bundle merged in.
    ///
    /// Intended to be called exactly once by the host application at
    /// startup. Overrides replace built-in data wholesale per industry:
    /// `kpis` swaps the flat KPI list, `templateKpis` installs
    /// per-variation KPI lists, `templates` swaps the whole pool.
    ///
    /// # Errors
    ///
    /// Rejects unknown industry keys, KPI definitions with invalid
    /// `keyMatch` regexes, non-numeric `templateKpis` indices, and
    /// malformed template variations (anything but 4 charts, hero first).
    pub fn initialize(bundle: OverrideBundle) -> Result<Self, StandardsError> {
        let mut registry = Self::builtin();
        for (key, entry) in &bundle.industries {
            let industry: Industry = key
                .parse()
                .map_err(|_| StandardsError::UnknownIndustry { key: key.clone() })?;

            if let Some(kpis) = &entry.kpis {
                validate_kpis(kpis)?;
                debug!(industry = %industry, count = kpis.len(), "override kpis");
                if let Some(config) = registry.configs.get_mut(&industry) {
                    config.kpis = kpis.clone();
                    if let Some(name) = &entry.name {
                        config.name = name.clone();
                    }
                }
            }

            if let Some(template_kpis) = &entry.template_kpis {
                let mut by_index = BTreeMap::new();
                for (raw_index, kpis) in template_kpis {
                    let index = raw_index.trim().parse::<usize>().map_err(|_| {
                        StandardsError::InvalidKpiIndex {
                            key: key.clone(),
                            index: raw_index.clone(),
                        }
                    })?;
                    validate_kpis(kpis)?;
                    by_index.insert(index, kpis.clone());
                }
                registry.template_kpis.insert(industry, by_index);
            }

            if let Some(templates) = &entry.templates {
                if templates.is_empty() {
                    return Err(StandardsError::EmptyPool { key: key.clone() });
                }
                for (index, variation) in templates.iter().enumerate() {
                    if !variation.is_well_formed() {
                        return Err(StandardsError::MalformedVariation {
                            key: key.clone(),
                            index,
                        });
                    }
                }
                debug!(industry = %industry, count = templates.len(), "override templates");
                registry.pools.insert(industry, templates.clone());
            }
        }
        info!(
            industries = registry.configs.len(),
            overridden = bundle.industries.len(),
            "registry initialized"
        );
        Ok(registry)
    }

    /// The KPI configuration for an industry.
    ///
    /// Always `Some` for a known [`Industry`]; the `Option` documents the
    /// contract for callers arriving with an unvalidated key, who fall back
    /// to a generic KPI set outside this engine.
    #[must_use]
    pub fn industry_config(&self, industry: Industry) -> Option<&IndustryConfig> {
        self.configs.get(&industry)
    }

    /// KPI definitions applicable to one template of an industry.
    ///
    /// When an override installed `templateKpis`, the entry for the
    /// requested template's variation index wins, falling back to index 0,
    /// then to the flat list.
    #[must_use]
    pub fn kpis_for_template(&self, industry: Industry, template_id: &str) -> &[KpiDefinition] {
        if let Some(by_index) = self.template_kpis.get(&industry) {
            let index = self.variation_index(industry, template_id);
            if let Some(kpis) = by_index.get(&index).or_else(|| by_index.get(&0)) {
                return kpis;
            }
        }
        self.configs
            .get(&industry)
            .map(|config| config.kpis.as_slice())
            .unwrap_or_default()
    }

    /// The template pool for an industry.
    ///
    /// Every known industry gets a pool in the constructor; the generated
    /// default covers a missing entry, so the result is never empty and
    /// variation lookups stay total.
    #[must_use]
    pub fn template_pool(&self, industry: Industry) -> &TemplatePool {
        static DEFAULT_POOL: LazyLock<TemplatePool> =
            LazyLock::new(|| generate_pool(Industry::DEFAULT.as_key()));
        self.pools
            .get(&industry)
            .unwrap_or_else(|| LazyLock::force(&DEFAULT_POOL))
    }

    /// Number of variations available for an industry (10 unless an
    /// override pool says otherwise). Feeds the template picker.
    #[must_use]
    pub fn template_count(&self, industry: Industry) -> usize {
        self.template_pool(industry).len()
    }

    /// Resolves a template id to a variation. Never fails: unparsable ids
    /// default to variation 1 and out-of-range ids clamp into the pool.
    #[must_use]
    pub fn template_variation(
        &self,
        industry: Industry,
        template_id: &str,
    ) -> &TemplateVariation {
        // template_pool never yields an empty vec, so the clamped index
        // is always in bounds.
        let pool = self.template_pool(industry);
        let index = self.variation_index(industry, template_id);
        &pool[index.min(pool.len() - 1)]
    }

    /// 0-based variation index for a template id, clamped into the pool.
    fn variation_index(&self, industry: Industry, template_id: &str) -> usize {
        let pool_len = self.template_pool(industry).len().max(1);
        parse_template_id(template_id).clamp(1, pool_len) - 1
    }
}

/// Parses a `"template<N>"` id to its 1-based number.
///
/// The literal prefix is stripped case-insensitively and the trailing
/// integer parsed; anything unparsable (including `"default"`) yields 1,
/// and zero/negative numbers are raised to 1. Range clamping against the
/// actual pool happens in the registry.
#[must_use]
pub fn parse_template_id(raw: &str) -> usize {
    let lowered = raw.trim().to_lowercase();
    let digits = lowered.strip_prefix("template").unwrap_or(&lowered);
    digits.parse::<i64>().map_or(1, |n| n.max(1) as usize)
}

fn validate_kpis(kpis: &[KpiDefinition]) -> Result<(), StandardsError> {
    for kpi in kpis {
        if let Err(error) = Regex::new(&format!("(?i){}", kpi.key_match)) {
            return Err(StandardsError::InvalidPattern {
                title: kpi.title.clone(),
                pattern: kpi.key_match.clone(),
                message: error.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_model::Aggregation;

    #[test]
    fn template_id_parsing() {
        assert_eq!(parse_template_id("template1"), 1);
        assert_eq!(parse_template_id("template10"), 10);
        assert_eq!(parse_template_id("Template7 "), 7);
        assert_eq!(parse_template_id("template0"), 1);
        assert_eq!(parse_template_id("templateXYZ"), 1);
        assert_eq!(parse_template_id("default"), 1);
        assert_eq!(parse_template_id("template99"), 99);
    }

    #[test]
    fn every_industry_has_a_ten_variation_pool() {
        let registry = Registry::builtin();
        for industry in Industry::ALL {
            assert_eq!(registry.template_count(industry), 10, "{industry}");
            assert!(registry.industry_config(industry).is_some());
        }
    }

    #[test]
    fn template_variation_is_total_for_every_industry() {
        let registry = Registry::builtin();
        for industry in Industry::ALL {
            assert!(!registry.template_pool(industry).is_empty(), "{industry}");
            for id in ["template0", "template1", "template99", "garbage", ""] {
                assert!(registry.template_variation(industry, id).is_well_formed());
            }
        }
    }

    #[test]
    fn out_of_range_ids_clamp_into_the_pool() {
        let registry = Registry::builtin();
        let first = registry.template_variation(Industry::Retail, "template1");
        let clamped_low = registry.template_variation(Industry::Retail, "template0");
        let clamped_high = registry.template_variation(Industry::Retail, "template99");
        let last = registry.template_variation(Industry::Retail, "template10");
        assert_eq!(first, clamped_low);
        assert_eq!(clamped_high, last);
        assert_eq!(registry.template_variation(Industry::Retail, "garbage"), first);
    }

    #[test]
    fn override_kpis_replace_builtin_list() {
        let raw = r#"{
            "finance": {
                "kpis": [{
                    "title": "Net Margin",
                    "keyMatch": "margin|profit",
                    "aggregation": "avg",
                    "valueSuffix": "%",
                    "glyph": "percent",
                    "style": "teal"
                }]
            }
        }"#;
        let bundle = OverrideBundle::from_json(raw).expect("bundle");
        let registry = Registry::initialize(bundle).expect("initialize");
        let config = registry.industry_config(Industry::Finance).expect("config");
        assert_eq!(config.kpis.len(), 1);
        assert_eq!(config.kpis[0].title, "Net Margin");
        assert_eq!(config.kpis[0].aggregation, Aggregation::Avg);
        // Other industries keep their built-ins.
        let retail = registry.industry_config(Industry::Retail).expect("config");
        assert_eq!(retail.kpis.len(), 4);
    }

    #[test]
    fn template_kpis_select_by_variation_index() {
        let raw = r#"{
            "retail": {
                "templateKpis": {
                    "0": [{
                        "title": "Default Card",
                        "keyMatch": "sales",
                        "aggregation": "sum",
                        "glyph": "cart",
                        "style": "emerald"
                    }],
                    "2": [{
                        "title": "Variation Three Card",
                        "keyMatch": "units",
                        "aggregation": "sum",
                        "glyph": "package",
                        "style": "amber"
                    }]
                }
            }
        }"#;
        let bundle = OverrideBundle::from_json(raw).expect("bundle");
        let registry = Registry::initialize(bundle).expect("initialize");
        let third = registry.kpis_for_template(Industry::Retail, "template3");
        assert_eq!(third[0].title, "Variation Three Card");
        // Index without a dedicated entry falls back to "0".
        let fifth = registry.kpis_for_template(Industry::Retail, "template5");
        assert_eq!(fifth[0].title, "Default Card");
        // Industries without templateKpis keep the flat list.
        let crm = registry.kpis_for_template(Industry::Crm, "template1");
        assert_eq!(crm.len(), 4);
    }

    #[test]
    fn unknown_override_key_is_rejected() {
        let bundle = OverrideBundle::from_json(r#"{"aviation": {}}"#).expect("bundle");
        assert!(matches!(
            Registry::initialize(bundle),
            Err(StandardsError::UnknownIndustry { .. })
        ));
    }

    #[test]
    fn invalid_override_pattern_is_rejected() {
        let raw = r#"{
            "crm": {
                "kpis": [{
                    "title": "Broken",
                    "keyMatch": "(unclosed",
                    "aggregation": "sum",
                    "glyph": "x",
                    "style": "rose"
                }]
            }
        }"#;
        let bundle = OverrideBundle::from_json(raw).expect("bundle");
        assert!(matches!(
            Registry::initialize(bundle),
            Err(StandardsError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn override_pool_length_feeds_template_count() {
        let registry = Registry::builtin();
        let variation = registry.template_variation(Industry::Finance, "template1");
        let templates = serde_json::to_string(&vec![variation.clone(); 3]).expect("json");
        let raw = format!(r#"{{"finance": {{"templates": {templates}}}}}"#);
        let bundle = OverrideBundle::from_json(&raw).expect("bundle");
        let registry = Registry::initialize(bundle).expect("initialize");
        assert_eq!(registry.template_count(Industry::Finance), 3);
        // Ids beyond the shortened pool clamp to its last entry.
        let last = registry.template_variation(Industry::Finance, "template9");
        assert_eq!(last, variation);
    }
}
