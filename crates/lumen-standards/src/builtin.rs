//! Built-in KPI definitions per industry.
//!
//! These are the defaults a fresh install ships with; an override bundle
//! may replace any industry's list wholesale at startup.

use lumen_model::{Aggregation, Industry, IndustryConfig, KpiDefinition};

/// Builds the built-in config for one industry.
#[must_use]
pub fn builtin_config(industry: Industry) -> IndustryConfig {
    let kpis = match industry {
        Industry::Finance => finance_kpis(),
        Industry::Retail => retail_kpis(),
        Industry::Crm => crm_kpis(),
        Industry::Manufacturing => manufacturing_kpis(),
        Industry::Healthcare => healthcare_kpis(),
        Industry::Logistics => logistics_kpis(),
    };
    IndustryConfig {
        name: industry.display_name().to_string(),
        kpis,
    }
}

fn finance_kpis() -> Vec<KpiDefinition> {
    vec![
        KpiDefinition::new(
            "Total Revenue",
            "revenue|sales|income|amount",
            Aggregation::Sum,
            "dollar-sign",
            "emerald",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Total Expenses",
            "expense|cost|spend",
            Aggregation::Sum,
            "credit-card",
            "rose",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Avg Transaction",
            "revenue|sales|amount|value",
            Aggregation::Avg,
            "trending-up",
            "blue",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Accounts",
            "account|client|customer",
            Aggregation::Count,
            "users",
            "violet",
        ),
    ]
}

fn retail_kpis() -> Vec<KpiDefinition> {
    vec![
        KpiDefinition::new(
            "Total Sales",
            "sales|revenue|amount|total",
            Aggregation::Sum,
            "shopping-cart",
            "emerald",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Avg Order Value",
            "sales|revenue|amount|price",
            Aggregation::Avg,
            "receipt",
            "blue",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Units Sold",
            "units|quantity|qty",
            Aggregation::Sum,
            "package",
            "amber",
        ),
        KpiDefinition::new(
            "Product Lines",
            "product|item|sku",
            Aggregation::Count,
            "layers",
            "violet",
        ),
    ]
}

fn crm_kpis() -> Vec<KpiDefinition> {
    vec![
        KpiDefinition::new(
            "Pipeline Value",
            "est_value|value|amount|deal",
            Aggregation::Sum,
            "dollar-sign",
            "emerald",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Avg Deal Size",
            "est_value|value|amount|deal",
            Aggregation::Avg,
            "bar-chart",
            "blue",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Lead Stages",
            "lead_status|status|stage",
            Aggregation::Count,
            "git-branch",
            "amber",
        ),
        KpiDefinition::new(
            "Lead Sources",
            "source|channel|origin",
            Aggregation::Count,
            "globe",
            "violet",
        ),
    ]
}

fn manufacturing_kpis() -> Vec<KpiDefinition> {
    vec![
        KpiDefinition::new(
            "Total Output",
            "output|units|quantity|produced",
            Aggregation::Sum,
            "factory",
            "emerald",
        ),
        KpiDefinition::new(
            "Production Cost",
            "cost|expense|spend",
            Aggregation::Sum,
            "credit-card",
            "rose",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Avg Defect Rate",
            "defect|reject|failure|rate",
            Aggregation::Avg,
            "alert-triangle",
            "amber",
        )
        .with_suffix("%"),
        KpiDefinition::new(
            "Product Lines",
            "product|line|part|sku",
            Aggregation::Count,
            "layers",
            "violet",
        ),
    ]
}

fn healthcare_kpis() -> Vec<KpiDefinition> {
    vec![
        KpiDefinition::new(
            "Patients",
            "patient|subject|case",
            Aggregation::Count,
            "users",
            "blue",
        ),
        KpiDefinition::new(
            "Total Billing",
            "billing|charge|cost|amount",
            Aggregation::Sum,
            "dollar-sign",
            "emerald",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Avg Treatment Cost",
            "cost|charge|billing|amount",
            Aggregation::Avg,
            "activity",
            "rose",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Departments",
            "department|ward|unit|clinic",
            Aggregation::Count,
            "building",
            "violet",
        ),
    ]
}

fn logistics_kpis() -> Vec<KpiDefinition> {
    vec![
        KpiDefinition::new(
            "Shipments",
            "shipment|order|delivery|tracking",
            Aggregation::Count,
            "truck",
            "blue",
        ),
        KpiDefinition::new(
            "Freight Cost",
            "freight|cost|charge|expense",
            Aggregation::Sum,
            "dollar-sign",
            "emerald",
        )
        .with_prefix("$"),
        KpiDefinition::new(
            "Avg Transit Time",
            "transit|duration|days|time",
            Aggregation::Avg,
            "clock",
            "amber",
        ),
        KpiDefinition::new(
            "Routes",
            "route|lane|destination|region",
            Aggregation::Count,
            "map",
            "violet",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_industry_has_kpis() {
        for industry in Industry::ALL {
            let config = builtin_config(industry);
            assert!(!config.kpis.is_empty(), "kpis for {industry}");
            assert_eq!(config.name, industry.display_name());
        }
    }

    #[test]
    fn currency_kpis_carry_dollar_prefix() {
        let finance = builtin_config(Industry::Finance);
        assert!(finance.kpis[0].is_currency());
        assert_eq!(finance.kpis[0].aggregation, Aggregation::Sum);
    }
}
