#![deny(unsafe_code)]

//! KPI resolution and aggregation.
//!
//! [`compute_kpis`] takes the KPI definitions the registry holds for an
//! industry/template, resolves each to a dataset column, aggregates
//! (sum, average, or distinct count) and formats the value for the card
//! renderer. It never fails: an empty dataset yields `"0"` per card and
//! malformed numerics coerce to zero.

pub mod columns;
pub mod format;

use std::collections::BTreeSet;

use tracing::debug;

use lumen_model::{Aggregation, Dataset, Industry, KpiCard, KpiDefinition};
use lumen_standards::Registry;

pub use columns::resolve_kpi_column;
pub use format::format_compact;

use format::decorate;

/// Computes all KPI cards for an industry and template against a dataset.
#[must_use]
pub fn compute_kpis(
    registry: &Registry,
    industry: Industry,
    template_id: &str,
    dataset: &Dataset,
) -> Vec<KpiCard> {
    compute_kpis_with_hint(registry, industry, template_id, dataset, None)
}

/// Like [`compute_kpis`], with the data source's mapped category column
/// (used as the preferred target for count KPIs).
#[must_use]
pub fn compute_kpis_with_hint(
    registry: &Registry,
    industry: Industry,
    template_id: &str,
    dataset: &Dataset,
    category_hint: Option<&str>,
) -> Vec<KpiCard> {
    registry
        .kpis_for_template(industry, template_id)
        .iter()
        .map(|definition| compute_card(definition, dataset, category_hint))
        .collect()
}

fn compute_card(
    definition: &KpiDefinition,
    dataset: &Dataset,
    category_hint: Option<&str>,
) -> KpiCard {
    let formatted_value = if dataset.is_empty() {
        "0".to_string()
    } else {
        let column = resolve_kpi_column(definition, dataset, category_hint);
        let value = aggregate(definition.aggregation, column, dataset);
        debug!(kpi = %definition.title, column = column.unwrap_or("<rows>"), value, "kpi computed");
        decorate(
            &format_compact(value),
            definition.value_prefix.as_deref(),
            definition.value_suffix.as_deref(),
        )
    };
    KpiCard {
        title: definition.title.clone(),
        formatted_value,
        glyph: definition.glyph.clone(),
        style: definition.style.clone(),
    }
}

/// Aggregates one column. Malformed numeric cells count as zero; a count
/// with no resolved column degrades to raw row count.
fn aggregate(aggregation: Aggregation, column: Option<&str>, dataset: &Dataset) -> f64 {
    match aggregation {
        Aggregation::Sum => column.map_or(0.0, |col| numeric_sum(dataset, col)),
        Aggregation::Avg => match column {
            Some(col) if !dataset.is_empty() => {
                numeric_sum(dataset, col) / dataset.len() as f64
            }
            _ => 0.0,
        },
        Aggregation::Count => match column {
            Some(col) => distinct_count(dataset, col) as f64,
            None => dataset.len() as f64,
        },
    }
}

fn numeric_sum(dataset: &Dataset, column: &str) -> f64 {
    dataset
        .column_values(column)
        .map(|value| value.as_number().unwrap_or(0.0))
        .sum()
}

fn distinct_count(dataset: &Dataset, column: &str) -> usize {
    dataset
        .column_values(column)
        .filter_map(|value| value.as_text())
        .collect::<BTreeSet<_>>()
        .len()
}
