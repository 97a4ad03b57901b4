//! Combines a template variation with role resolution to emit
//! render-ready chart specifications.

use tracing::debug;

use lumen_model::{
    ChartBlueprint, Dataset, Industry, ResolvedChartSpec, TemplateVariation,
};

use crate::resolver::{RoleFlavor, RoleResolver};

/// Brand palettes for verticals with an established visual identity,
/// applied `chart_index % 3` over the variation.
const FINANCE_BRAND_PALETTES: [[&str; 4]; 3] = [
    ["#0f766e", "#14b8a6", "#5eead4", "#ccfbf1"],
    ["#1e3a8a", "#3b82f6", "#93c5fd", "#dbeafe"],
    ["#713f12", "#ca8a04", "#facc15", "#fef9c3"],
];

const HEALTHCARE_BRAND_PALETTES: [[&str; 4]; 3] = [
    ["#155e75", "#06b6d4", "#67e8f9", "#cffafe"],
    ["#166534", "#22c55e", "#86efac", "#dcfce7"],
    ["#9f1239", "#f43f5e", "#fda4af", "#ffe4e6"],
];

/// Resolves every blueprint of a variation against a dataset.
///
/// An empty dataset short-circuits: the blueprints come back with their
/// semantic roles intact and `resolved == false`, signaling "no data yet"
/// to the rendering layer instead of guessing at columns.
#[must_use]
pub fn resolve_charts(
    variation: &TemplateVariation,
    dataset: &Dataset,
    industry: Industry,
) -> Vec<ResolvedChartSpec> {
    if dataset.is_empty() {
        debug!(industry = %industry, "empty dataset, returning unresolved specs");
        return variation
            .charts
            .iter()
            .map(unresolved_spec)
            .collect();
    }

    let resolver = RoleResolver::new(dataset, industry);
    variation
        .charts
        .iter()
        .enumerate()
        .map(|(index, blueprint)| {
            let x_column = guard_column(
                resolver.resolve(&blueprint.x_role, RoleFlavor::Dimension),
                dataset,
                &resolver,
                RoleFlavor::Dimension,
            );
            let y_columns = resolver
                .resolve_y(&blueprint.y_role)
                .into_iter()
                .map(|column| guard_column(column, dataset, &resolver, RoleFlavor::Measure))
                .collect();
            ResolvedChartSpec {
                kind: blueprint.kind,
                title: blueprint.title.clone(),
                x_column,
                y_columns,
                x_label: blueprint.x_label.clone(),
                y_label: blueprint.y_label.clone(),
                priority: blueprint.priority,
                size: blueprint.size,
                palette: brand_palette(industry, index)
                    .unwrap_or_else(|| blueprint.palette.clone()),
                resolved: true,
            }
        })
        .collect()
}

/// Final guard making `ResolvedChartSpec` columns always valid: a name
/// that is neither the count sentinel nor present in the inventory is
/// replaced by the terminal fallback.
fn guard_column(
    column: String,
    dataset: &Dataset,
    resolver: &RoleResolver<'_>,
    flavor: RoleFlavor,
) -> String {
    if column == lumen_model::COUNT_COLUMN || dataset.has_column(&column) {
        column
    } else {
        resolver.terminal_fallback(flavor)
    }
}

fn unresolved_spec(blueprint: &ChartBlueprint) -> ResolvedChartSpec {
    ResolvedChartSpec {
        kind: blueprint.kind,
        title: blueprint.title.clone(),
        x_column: blueprint.x_role.clone(),
        y_columns: blueprint
            .y_role
            .roles()
            .into_iter()
            .map(str::to_string)
            .collect(),
        x_label: blueprint.x_label.clone(),
        y_label: blueprint.y_label.clone(),
        priority: blueprint.priority,
        size: blueprint.size,
        palette: blueprint.palette.clone(),
        resolved: false,
    }
}

/// The brand palette for a chart slot, for industries that carry one.
fn brand_palette(industry: Industry, chart_index: usize) -> Option<Vec<String>> {
    let palettes = match industry {
        Industry::Finance => &FINANCE_BRAND_PALETTES,
        Industry::Healthcare => &HEALTHCARE_BRAND_PALETTES,
        _ => return None,
    };
    Some(
        palettes[chart_index % palettes.len()]
            .iter()
            .map(|color| (*color).to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_model::{ChartKind, ChartPriority, ChartSize, Row, Value};

    fn blueprint(x_role: &str, y_role: &str) -> ChartBlueprint {
        ChartBlueprint {
            kind: ChartKind::Bar,
            title: "Test".to_string(),
            x_role: x_role.to_string(),
            y_role: y_role.into(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            priority: ChartPriority::High,
            size: ChartSize::Large,
            palette: vec!["#000000".to_string()],
        }
    }

    fn sales_dataset() -> Dataset {
        let columns = vec!["region".to_string(), "sales".to_string()];
        let rows = vec![
            Row::from([
                ("region".to_string(), Value::Text("West".to_string())),
                ("sales".to_string(), Value::Number(100.0)),
            ]),
        ];
        Dataset::new(columns, rows)
    }

    #[test]
    fn empty_dataset_short_circuits() {
        let variation = TemplateVariation::new(vec![blueprint("region", "sales")]);
        let specs = resolve_charts(&variation, &Dataset::default(), Industry::Retail);
        assert_eq!(specs.len(), 1);
        assert!(!specs[0].resolved);
        assert_eq!(specs[0].x_column, "region");
        assert_eq!(specs[0].y_columns, vec!["sales"]);
    }

    #[test]
    fn resolved_specs_carry_real_columns() {
        let variation = TemplateVariation::new(vec![blueprint("region", "sales")]);
        let specs = resolve_charts(&variation, &sales_dataset(), Industry::Retail);
        assert!(specs[0].resolved);
        assert_eq!(specs[0].x_column, "region");
        assert_eq!(specs[0].y_columns, vec!["sales"]);
    }

    #[test]
    fn finance_applies_rotating_brand_palette() {
        let variation = TemplateVariation::new(vec![
            blueprint("region", "sales"),
            blueprint("region", "sales"),
            blueprint("region", "sales"),
            blueprint("region", "sales"),
        ]);
        let specs = resolve_charts(&variation, &sales_dataset(), Industry::Finance);
        assert_eq!(specs[0].palette[0], FINANCE_BRAND_PALETTES[0][0]);
        assert_eq!(specs[1].palette[0], FINANCE_BRAND_PALETTES[1][0]);
        assert_eq!(specs[3].palette[0], FINANCE_BRAND_PALETTES[0][0]);
    }

    #[test]
    fn retail_keeps_blueprint_palette() {
        let variation = TemplateVariation::new(vec![blueprint("region", "sales")]);
        let specs = resolve_charts(&variation, &sales_dataset(), Industry::Retail);
        assert_eq!(specs[0].palette, vec!["#000000".to_string()]);
    }
}
