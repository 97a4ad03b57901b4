//! Per-KPI target column resolution.
//!
//! The definition's `keyMatch` regex is tried first over the column
//! inventory; misses fall back by aggregation kind to the common
//! financial/quantity column names, and finally to the first column of the
//! appropriate type. Like the chart resolver, this never fails — a KPI
//! with no resolvable column aggregates to zero (or raw row count).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use lumen_model::{Aggregation, Dataset, KpiDefinition};

/// Common financial-or-quantity column names tried for sum/avg KPIs whose
/// `keyMatch` found nothing; priority ordered.
const NUMERIC_FALLBACK_PATTERNS: &[&str] = &[
    "amount", "revenue", "sales", "value", "cost", "price", "total", "quantity", "qty", "units",
];

/// Column names that look like identifiers or dates, excluded when hunting
/// for a generic numeric column.
static ID_OR_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new("(?i)id$|^id|_id|date|time|year|month|day|key|code").ok());

static NUMERIC_FALLBACKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NUMERIC_FALLBACK_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(&format!("(?i){pattern}")).ok())
        .collect()
});

/// Resolves the column a KPI definition aggregates over.
///
/// `None` means "no column": sum/avg KPIs report zero, count KPIs fall
/// back to raw row count.
#[must_use]
pub fn resolve_kpi_column<'a>(
    definition: &KpiDefinition,
    dataset: &'a Dataset,
    category_hint: Option<&'a str>,
) -> Option<&'a str> {
    // Primary: the definition's own pattern, first match wins regardless
    // of value type (malformed cells aggregate to zero downstream). An
    // invalid override regex is treated as a miss rather than an error.
    if let Ok(pattern) = Regex::new(&format!("(?i){}", definition.key_match)) {
        let hit = dataset
            .columns
            .iter()
            .map(String::as_str)
            .find(|column| pattern.is_match(column));
        if hit.is_some() {
            return hit;
        }
    }
    debug!(kpi = %definition.title, "keyMatch missed, using aggregation fallback");

    match definition.aggregation {
        Aggregation::Sum | Aggregation::Avg => numeric_fallback(dataset),
        Aggregation::Count => count_fallback(dataset, category_hint),
    }
}

fn numeric_fallback(dataset: &Dataset) -> Option<&str> {
    for pattern in NUMERIC_FALLBACKS.iter() {
        let hit = dataset
            .columns
            .iter()
            .map(String::as_str)
            .find(|column| pattern.is_match(column) && dataset.is_numeric_column(column));
        if hit.is_some() {
            return hit;
        }
    }
    // First all-numeric column that doesn't look like an id or a date.
    dataset
        .columns
        .iter()
        .map(String::as_str)
        .find(|column| {
            let excluded = ID_OR_DATE
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(column));
            !excluded && dataset.is_numeric_column(column)
        })
}

fn count_fallback<'a>(dataset: &'a Dataset, category_hint: Option<&'a str>) -> Option<&'a str> {
    if let Some(hint) = category_hint
        && dataset.has_column(hint)
    {
        return Some(hint);
    }
    if let Some(column) = dataset.first_text_column() {
        return Some(column);
    }
    // Identifier-like numeric columns still count meaningfully.
    dataset.columns.iter().map(String::as_str).find(|column| {
        ID_OR_DATE
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(column))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_model::{Row, Value};

    fn dataset(columns: &[&str], row: &[(&str, Value)]) -> Dataset {
        let row: Row = row
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Dataset::new(columns.iter().map(|c| c.to_string()).collect(), vec![row])
    }

    fn kpi(key_match: &str, aggregation: Aggregation) -> KpiDefinition {
        KpiDefinition::new("Test", key_match, aggregation, "glyph", "style")
    }

    #[test]
    fn key_match_wins_when_it_hits() {
        let data = dataset(
            &["region", "est_value"],
            &[("region", "West".into()), ("est_value", 500.0.into())],
        );
        let column = resolve_kpi_column(&kpi("est_value|value", Aggregation::Sum), &data, None);
        assert_eq!(column, Some("est_value"));
    }

    #[test]
    fn key_match_wins_regardless_of_type() {
        // "sales_rep" is textual but keyMatch is first-match-wins; bad
        // cells aggregate to zero instead of re-routing the column.
        let data = dataset(
            &["sales_rep", "amount"],
            &[("sales_rep", "Ana".into()), ("amount", 9.0.into())],
        );
        let column = resolve_kpi_column(&kpi("sales", Aggregation::Sum), &data, None);
        assert_eq!(column, Some("sales_rep"));
    }

    #[test]
    fn numeric_fallback_excludes_ids_and_dates() {
        let data = dataset(
            &["order_id", "year", "margin"],
            &[
                ("order_id", 17.0.into()),
                ("year", 2026.0.into()),
                ("margin", 0.4.into()),
            ],
        );
        let column = resolve_kpi_column(&kpi("nothing_matches", Aggregation::Sum), &data, None);
        assert_eq!(column, Some("margin"));
    }

    #[test]
    fn count_prefers_the_category_hint() {
        let data = dataset(
            &["region", "channel"],
            &[("region", "West".into()), ("channel", "web".into())],
        );
        let column = resolve_kpi_column(
            &kpi("nothing_matches", Aggregation::Count),
            &data,
            Some("channel"),
        );
        assert_eq!(column, Some("channel"));
        // A hint naming an absent column is ignored.
        let column = resolve_kpi_column(
            &kpi("nothing_matches", Aggregation::Count),
            &data,
            Some("ghost"),
        );
        assert_eq!(column, Some("region"));
    }

    #[test]
    fn invalid_pattern_degrades_to_fallback() {
        let data = dataset(&["amount"], &[("amount", 5.0.into())]);
        let column = resolve_kpi_column(&kpi("(unclosed", Aggregation::Sum), &data, None);
        assert_eq!(column, Some("amount"));
    }

    #[test]
    fn count_with_no_candidates_resolves_to_none() {
        let data = dataset(&["amount"], &[("amount", 5.0.into())]);
        let column = resolve_kpi_column(&kpi("nope", Aggregation::Count), &data, None);
        assert_eq!(column, None);
    }
}
