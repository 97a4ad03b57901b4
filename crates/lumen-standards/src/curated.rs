//! Hand-authored template pools for industries with an established
//! dashboard canon.
//!
//! Finance and CRM ship curated pools; every other industry goes through
//! the seeded generator. Each pool still honors the shape invariant:
//! 10 variations of 4 charts, hero first.

use lumen_model::{
    ChartBlueprint, ChartKind, ChartPriority, ChartSize, Industry, RoleSpec, TemplatePool,
    TemplateVariation,
};

use crate::generator::palette_at;

/// One chart slot: kind, title, x role, y roles, x label, y label.
type SlotDef = (
    ChartKind,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
);

type VariationDef = [SlotDef; 4];

use lumen_model::ChartKind as K;

const FINANCE_POOL: [VariationDef; 10] = [
    [
        (K::Line, "Revenue Over Time (Line)", "time", &["revenue"], "Period", "Revenue"),
        (K::Bar, "Profit by Region", "region", &["profit"], "Region", "Profit"),
        (K::Pie, "Cost Breakdown by Category", "category", &["cost"], "Category", "Cost"),
        (K::Bar, "Sales by Product", "product", &["sales"], "Product", "Sales"),
    ],
    [
        (K::Area, "Revenue vs Cost Over Time (Area)", "time", &["revenue", "cost"], "Period", "Amount"),
        (K::Donut, "Revenue Share by Region", "region", &["revenue"], "Region", "Revenue"),
        (K::Bar, "Profit by Category", "category", &["profit"], "Category", "Profit"),
        (K::Line, "Rate Trend", "time", &["rate"], "Period", "Rate"),
    ],
    [
        (K::Bar, "Profit and Cost by Region (Bar)", "region", &["profit", "cost"], "Region", "Amount"),
        (K::Line, "Sales Over Time", "time", &["sales"], "Period", "Sales"),
        (K::Pie, "Sales Share by Product", "product", &["sales"], "Product", "Sales"),
        (K::Bar, "Value by Department", "department", &["value"], "Department", "Value"),
    ],
    [
        (K::Line, "Profit Margin Trend (Line)", "time", &["rate"], "Period", "Margin"),
        (K::Bar, "Revenue by Department", "department", &["revenue"], "Department", "Revenue"),
        (K::Donut, "Cost Share by Vendor", "vendor", &["cost"], "Vendor", "Cost"),
        (K::Bar, "Transactions by Category", "category", &["count"], "Category", "Transactions"),
    ],
    [
        (K::Bar, "Revenue by Category (Bar)", "category", &["revenue"], "Category", "Revenue"),
        (K::Line, "Cost Over Time", "time", &["cost"], "Period", "Cost"),
        (K::Radar, "Score by Segment", "segment", &["score"], "Segment", "Score"),
        (K::Pie, "Profit Share by Region", "region", &["profit"], "Region", "Profit"),
    ],
    [
        (K::Area, "Cumulative Sales (Area)", "time", &["sales"], "Period", "Sales"),
        (K::Bar, "Value by Source", "source", &["value"], "Source", "Value"),
        (K::Line, "Profit Over Time", "time", &["profit"], "Period", "Profit"),
        (K::Donut, "Revenue Share by Channel", "channel", &["revenue"], "Channel", "Revenue"),
    ],
    [
        (K::Scatter, "Cost vs Revenue (Scatter)", "cost", &["revenue"], "Cost", "Revenue"),
        (K::Bar, "Sales by Region", "region", &["sales"], "Region", "Sales"),
        (K::Pie, "Count by Category", "category", &["count"], "Category", "Count"),
        (K::Line, "Value Trend", "time", &["value"], "Period", "Value"),
    ],
    [
        (K::Bar, "Department Performance (Bar)", "department", &["revenue", "cost"], "Department", "Amount"),
        (K::Line, "Score Over Time", "time", &["score"], "Period", "Score"),
        (K::Donut, "Sales Share by Segment", "segment", &["sales"], "Segment", "Sales"),
        (K::Bar, "Profit by Vendor", "vendor", &["profit"], "Vendor", "Profit"),
    ],
    [
        (K::Line, "Revenue and Profit Trend (Line)", "time", &["revenue", "profit"], "Period", "Amount"),
        (K::Bar, "Cost by Department", "department", &["cost"], "Department", "Cost"),
        (K::Pie, "Value Share by Product", "product", &["value"], "Product", "Value"),
        (K::Radar, "Rate by Region", "region", &["rate"], "Region", "Rate"),
    ],
    [
        (K::Area, "Value Growth (Area)", "time", &["value"], "Period", "Value"),
        (K::Bar, "Count by Source", "source", &["count"], "Source", "Count"),
        (K::Line, "Rate Over Time", "time", &["rate"], "Period", "Rate"),
        (K::Pie, "Cost Share by Channel", "channel", &["cost"], "Channel", "Cost"),
    ],
];

const CRM_POOL: [VariationDef; 10] = [
    [
        (K::Bar, "Pipeline Value by Stage (Bar)", "lead_status", &["est_value"], "Stage", "Estimated Value"),
        (K::Pie, "Leads by Source", "source", &["count"], "Source", "Leads"),
        (K::Bar, "Value by Owner", "owner", &["est_value"], "Owner", "Estimated Value"),
        (K::Line, "Leads Over Time", "date", &["count"], "Period", "Leads"),
    ],
    [
        (K::Line, "Pipeline Growth (Line)", "date", &["est_value"], "Period", "Estimated Value"),
        (K::Donut, "Lead Share by Status", "lead_status", &["count"], "Status", "Leads"),
        (K::Bar, "Score by Source", "source", &["score"], "Source", "Score"),
        (K::Bar, "Deals by Region", "region", &["count"], "Region", "Deals"),
    ],
    [
        (K::Bar, "Deals by Owner (Bar)", "owner", &["count"], "Owner", "Deals"),
        (K::Line, "Value Over Time", "date", &["est_value"], "Period", "Estimated Value"),
        (K::Pie, "Status Distribution", "lead_status", &["count"], "Status", "Leads"),
        (K::Radar, "Score by Region", "region", &["score"], "Region", "Score"),
    ],
    [
        (K::Area, "Cumulative Pipeline (Area)", "date", &["est_value"], "Period", "Estimated Value"),
        (K::Bar, "Value by Source", "source", &["est_value"], "Source", "Estimated Value"),
        (K::Donut, "Deal Share by Stage", "stage", &["count"], "Stage", "Deals"),
        (K::Line, "Conversion Rate Trend", "date", &["rate"], "Period", "Rate"),
    ],
    [
        (K::Bar, "Value by Region (Bar)", "region", &["est_value"], "Region", "Estimated Value"),
        (K::Pie, "Leads by Owner", "owner", &["count"], "Owner", "Leads"),
        (K::Line, "Score Over Time", "date", &["score"], "Period", "Score"),
        (K::Bar, "Leads by Stage", "stage", &["count"], "Stage", "Leads"),
    ],
    [
        (K::Scatter, "Score vs Value (Scatter)", "score", &["est_value"], "Score", "Estimated Value"),
        (K::Bar, "Deals by Source", "source", &["count"], "Source", "Deals"),
        (K::Donut, "Value Share by Owner", "owner", &["est_value"], "Owner", "Estimated Value"),
        (K::Line, "Deals Over Time", "date", &["count"], "Period", "Deals"),
    ],
    [
        (K::Line, "Won Value Trend (Line)", "date", &["est_value"], "Period", "Estimated Value"),
        (K::Bar, "Score by Stage", "stage", &["score"], "Stage", "Score"),
        (K::Pie, "Lead Share by Region", "region", &["count"], "Region", "Leads"),
        (K::Bar, "Value by Stage", "stage", &["est_value"], "Stage", "Estimated Value"),
    ],
    [
        (K::Bar, "Owner Leaderboard (Bar)", "owner", &["est_value", "score"], "Owner", "Amount"),
        (K::Line, "Rate Over Time", "date", &["rate"], "Period", "Rate"),
        (K::Donut, "Source Mix", "source", &["count"], "Source", "Leads"),
        (K::Radar, "Score by Owner", "owner", &["score"], "Owner", "Score"),
    ],
    [
        (K::Area, "Lead Volume (Area)", "date", &["count"], "Period", "Leads"),
        (K::Bar, "Value by Vendor", "vendor", &["est_value"], "Vendor", "Estimated Value"),
        (K::Pie, "Deal Share by Source", "source", &["est_value"], "Source", "Estimated Value"),
        (K::Line, "Score Trend", "date", &["score"], "Period", "Score"),
    ],
    [
        (K::Bar, "Stage Funnel (Bar)", "lead_status", &["count"], "Stage", "Leads"),
        (K::Line, "Pipeline Value Trend", "date", &["est_value"], "Period", "Estimated Value"),
        (K::Donut, "Owner Share", "owner", &["count"], "Owner", "Leads"),
        (K::Bar, "Rate by Source", "source", &["rate"], "Source", "Rate"),
    ],
];

/// Returns the curated pool for an industry, when one exists.
#[must_use]
pub fn curated_pool(industry: Industry) -> Option<TemplatePool> {
    match industry {
        Industry::Finance => Some(build_pool(&FINANCE_POOL)),
        Industry::Crm => Some(build_pool(&CRM_POOL)),
        _ => None,
    }
}

fn build_pool(defs: &[VariationDef; 10]) -> TemplatePool {
    defs.iter()
        .enumerate()
        .map(|(index, slots)| build_variation(slots, index))
        .collect()
}

fn build_variation(slots: &VariationDef, index: usize) -> TemplateVariation {
    let palette = palette_at(index);
    let charts = slots
        .iter()
        .enumerate()
        .map(|(slot, def)| build_chart(def, slot == 0, &palette))
        .collect();
    TemplateVariation::new(charts)
}

fn build_chart(def: &SlotDef, hero: bool, palette: &[String]) -> ChartBlueprint {
    let (kind, title, x_role, y_roles, x_label, y_label) = *def;
    let y_role = if y_roles.len() == 1 {
        RoleSpec::Single(y_roles[0].to_string())
    } else {
        RoleSpec::Multi(y_roles.iter().map(|role| (*role).to_string()).collect())
    };
    ChartBlueprint {
        kind,
        title: title.to_string(),
        x_role: x_role.to_string(),
        y_role,
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        priority: if hero {
            ChartPriority::High
        } else {
            ChartPriority::Medium
        },
        size: if hero {
            ChartSize::Large
        } else {
            ChartSize::Normal
        },
        palette: palette.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_pools_honor_shape_invariant() {
        for industry in [Industry::Finance, Industry::Crm] {
            let pool = curated_pool(industry).expect("curated pool");
            assert_eq!(pool.len(), 10);
            for variation in &pool {
                assert!(variation.is_well_formed());
            }
        }
    }

    #[test]
    fn only_finance_and_crm_are_curated() {
        assert!(curated_pool(Industry::Retail).is_none());
        assert!(curated_pool(Industry::Healthcare).is_none());
    }

    #[test]
    fn finance_template1_hero_is_time_series() {
        let pool = curated_pool(Industry::Finance).expect("curated pool");
        let hero = pool[0].hero().expect("hero");
        assert_eq!(hero.x_role, "time");
        assert_eq!(hero.y_role.roles(), vec!["revenue"]);
    }
}
