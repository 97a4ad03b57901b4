//! Deterministic template pool synthesis for industries with no curated
//! pool.
//!
//! Everything here is a pure function of the industry key string: a shared
//! dashboard link encodes only `(industry, templateId)`, so re-running the
//! generator with the same key must reproduce byte-identical blueprints.

use lumen_model::{
    ChartBlueprint, ChartKind, ChartPriority, ChartSize, TemplatePool, TemplateVariation,
};

/// Pool size every industry exposes.
pub const POOL_SIZE: usize = 10;

/// Charts per variation: one hero plus three small charts.
pub const VARIATION_SIZE: usize = 4;

/// Generic dimension roles (textual), rotated per variation.
const DIMENSIONS: [&str; 10] = [
    "date",
    "category",
    "region",
    "product",
    "department",
    "vendor",
    "source",
    "channel",
    "segment",
    "team",
];

/// Generic metric roles (numeric), rotated per variation.
const METRICS: [&str; 10] = [
    "sales", "profit", "cost", "count", "rate", "score", "time", "value", "revenue", "units",
];

/// Chart kinds eligible for the hero slot.
const HERO_KINDS: [ChartKind; 4] = [
    ChartKind::Bar,
    ChartKind::Line,
    ChartKind::Area,
    ChartKind::Scatter,
];

/// Chart kinds eligible for the three small slots.
const SMALL_KINDS: [ChartKind; 5] = [
    ChartKind::Bar,
    ChartKind::Pie,
    ChartKind::Line,
    ChartKind::Donut,
    ChartKind::Radar,
];

/// Additive small-kind rotation offsets for the three small slots.
const SMALL_KIND_OFFSETS: [usize; 3] = [0, 3, 5];

/// Ordered palette pool; one palette is picked per variation.
const PALETTES: [[&str; 4]; 8] = [
    ["#2563eb", "#60a5fa", "#93c5fd", "#dbeafe"],
    ["#059669", "#34d399", "#6ee7b7", "#d1fae5"],
    ["#d97706", "#fbbf24", "#fcd34d", "#fef3c7"],
    ["#dc2626", "#f87171", "#fca5a5", "#fee2e2"],
    ["#7c3aed", "#a78bfa", "#c4b5fd", "#ede9fe"],
    ["#0891b2", "#22d3ee", "#67e8f9", "#cffafe"],
    ["#db2777", "#f472b6", "#f9a8d4", "#fce7f3"],
    ["#4f46e5", "#818cf8", "#a5b4fc", "#e0e7ff"],
];

/// Derives the deterministic seed for an industry key.
///
/// This is deliberately the weak character-code sum of the source system:
/// anagram keys collide, but changing the hash would break reproduction of
/// previously shared dashboard links, so it stays the documented algorithm.
#[must_use]
pub fn seed_for(industry_key: &str) -> usize {
    industry_key.chars().map(|ch| ch as usize).sum()
}

/// Synthesizes the full 10-variation pool for an industry key.
#[must_use]
pub fn generate_pool(industry_key: &str) -> TemplatePool {
    let seed = seed_for(industry_key);
    (0..POOL_SIZE)
        .map(|index| generate_variation(industry_key, seed, index))
        .collect()
}

fn generate_variation(industry_key: &str, seed: usize, index: usize) -> TemplateVariation {
    let hero_kind = HERO_KINDS[(seed + index * 7) % HERO_KINDS.len()];
    let dim_offset = seed + index * 5;
    let metric_offset = seed + index * 2;
    let palette = palette_at(seed + index);

    let hero_dim = DIMENSIONS[dim_offset % DIMENSIONS.len()];
    let hero_metric = METRICS[metric_offset % METRICS.len()];
    let mut charts = vec![ChartBlueprint {
        kind: hero_kind,
        title: format!(
            "{} {} Analysis ({})",
            title_case(industry_key),
            title_case(hero_metric),
            hero_kind.label()
        ),
        x_role: hero_dim.to_string(),
        y_role: hero_metric.into(),
        x_label: title_case(hero_dim),
        y_label: title_case(hero_metric),
        priority: ChartPriority::High,
        size: ChartSize::Large,
        palette: palette.clone(),
    }];

    for (slot, kind_offset) in SMALL_KIND_OFFSETS.iter().enumerate() {
        let kind = SMALL_KINDS[(seed + index * 7 + kind_offset) % SMALL_KINDS.len()];
        let dim = DIMENSIONS[(dim_offset + slot + 1) % DIMENSIONS.len()];
        let metric = METRICS[(metric_offset + slot + 1) % METRICS.len()];
        charts.push(ChartBlueprint {
            kind,
            title: format!("{} by {}", title_case(metric), title_case(dim)),
            x_role: dim.to_string(),
            y_role: metric.into(),
            x_label: title_case(dim),
            y_label: title_case(metric),
            priority: ChartPriority::Medium,
            size: ChartSize::Normal,
            palette: palette.clone(),
        });
    }

    TemplateVariation::new(charts)
}

pub(crate) fn palette_at(offset: usize) -> Vec<String> {
    PALETTES[offset % PALETTES.len()]
        .iter()
        .map(|color| (*color).to_string())
        .collect()
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn seed_is_character_sum() {
        assert_eq!(seed_for("abc"), 97 + 98 + 99);
        assert_eq!(seed_for(""), 0);
        // Known limitation: anagrams collide.
        assert_eq!(seed_for("abc"), seed_for("cba"));
    }

    #[test]
    fn pool_shape_invariant() {
        for key in ["retail", "manufacturing", "healthcare", "logistics"] {
            let pool = generate_pool(key);
            assert_eq!(pool.len(), POOL_SIZE, "pool size for {key}");
            for variation in &pool {
                assert!(variation.is_well_formed(), "variation shape for {key}");
            }
        }
    }

    #[test]
    fn variations_within_a_pool_differ() {
        let pool = generate_pool("retail");
        for (i, a) in pool.iter().enumerate() {
            for b in pool.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn distinct_industries_get_distinct_heroes() {
        let retail = generate_pool("retail");
        let logistics = generate_pool("logistics");
        assert_ne!(retail[0], logistics[0]);
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(key in "[a-z ]{1,24}") {
            prop_assert_eq!(generate_pool(&key), generate_pool(&key));
        }

        #[test]
        fn generated_pools_are_well_formed(key in "\\PC{0,32}") {
            let pool = generate_pool(&key);
            prop_assert_eq!(pool.len(), POOL_SIZE);
            for variation in &pool {
                prop_assert!(variation.is_well_formed());
            }
        }
    }
}
