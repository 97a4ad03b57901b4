use std::collections::BTreeMap;

use proptest::prelude::*;

use lumen_model::{COUNT_COLUMN, Dataset, Industry, Row, Value};
use lumen_resolve::{RoleFlavor, RoleResolver, resolve_charts};
use lumen_standards::Registry;

fn finance_dataset() -> Dataset {
    let columns = vec!["region".to_string(), "sales".to_string(), "cost".to_string()];
    let rows = vec![
        Row::from([
            ("region".to_string(), Value::Text("West".to_string())),
            ("sales".to_string(), Value::Number(100.0)),
            ("cost".to_string(), Value::Number(40.0)),
        ]),
        Row::from([
            ("region".to_string(), Value::Text("East".to_string())),
            ("sales".to_string(), Value::Number(200.0)),
            ("cost".to_string(), Value::Number(90.0)),
        ]),
    ];
    Dataset::new(columns, rows)
}

#[test]
fn finance_template1_resolves_against_sales_dataset() {
    let registry = Registry::builtin();
    let variation = registry.template_variation(Industry::Finance, "template1");
    let dataset = finance_dataset();
    let specs = resolve_charts(variation, &dataset, Industry::Finance);

    assert_eq!(specs.len(), 4);
    // Hero x role is "time"; with no date-like column it falls back to the
    // first textual column.
    assert_eq!(specs[0].x_column, "region");
    // Every bound column exists in the inventory (or is the sentinel).
    for spec in &specs {
        assert!(spec.resolved);
        assert!(
            spec.x_column == COUNT_COLUMN || dataset.has_column(&spec.x_column),
            "x column {} missing",
            spec.x_column
        );
        for column in &spec.y_columns {
            assert!(
                column == COUNT_COLUMN || dataset.has_column(column),
                "y column {column} missing"
            );
        }
    }
    // A profit-roled chart has no literal profit column and degrades to a
    // real numeric column rather than an undefined one.
    let profit_chart = &specs[1];
    assert!(["sales", "cost"].contains(&profit_chart.y_columns[0].as_str()));
}

#[test]
fn resolution_round_trips_for_shared_links() {
    let registry = Registry::builtin();
    let dataset = finance_dataset();
    for template_id in ["template1", "template4", "template10"] {
        let first = resolve_charts(
            registry.template_variation(Industry::Finance, template_id),
            &dataset,
            Industry::Finance,
        );
        let again = resolve_charts(
            registry.template_variation(Industry::Finance, template_id),
            &dataset,
            Industry::Finance,
        );
        assert_eq!(first, again);
        let encoded = serde_json::to_string(&first).expect("serialize");
        let re_encoded = serde_json::to_string(&again).expect("serialize");
        assert_eq!(encoded, re_encoded);
    }
}

#[test]
fn every_builtin_variation_resolves_totally() {
    let registry = Registry::builtin();
    let dataset = finance_dataset();
    for industry in Industry::ALL {
        for n in 1..=registry.template_count(industry) {
            let variation = registry.template_variation(industry, &format!("template{n}"));
            for spec in resolve_charts(variation, &dataset, industry) {
                assert!(spec.x_column == COUNT_COLUMN || dataset.has_column(&spec.x_column));
                assert!(!spec.y_columns.is_empty());
                for column in &spec.y_columns {
                    assert!(column == COUNT_COLUMN || dataset.has_column(column));
                }
            }
        }
    }
}

fn cell_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1e9f64..1e9f64).prop_map(Value::Number),
        "[a-zA-Z ]{0,12}".prop_map(Value::Text),
        Just(Value::Missing),
    ]
}

fn arbitrary_dataset() -> impl Strategy<Value = Dataset> {
    let column = "[a-zA-Z_][a-zA-Z0-9_]{0,14}";
    (proptest::collection::btree_set(column, 1..6), 1usize..8).prop_flat_map(
        |(columns, row_count)| {
            let columns: Vec<String> = columns.into_iter().collect();
            let width = columns.len();
            proptest::collection::vec(
                proptest::collection::vec(cell_strategy(), width..=width),
                row_count..=row_count,
            )
            .prop_map(move |rows| {
                let rows = rows
                    .into_iter()
                    .map(|values| {
                        columns
                            .iter()
                            .cloned()
                            .zip(values)
                            .collect::<BTreeMap<String, Value>>()
                    })
                    .collect();
                Dataset::new(columns.clone(), rows)
            })
        },
    )
}

proptest! {
    // Total resolution: no role ever binds to a column absent from the
    // inventory, whatever the dataset looks like.
    #[test]
    fn resolver_never_returns_a_missing_column(
        dataset in arbitrary_dataset(),
        role in "[a-z_]{1,12}",
    ) {
        for industry in [Industry::Retail, Industry::Crm, Industry::Finance] {
            let resolver = RoleResolver::new(&dataset, industry);
            for flavor in [RoleFlavor::Dimension, RoleFlavor::Measure] {
                let column = resolver.resolve(&role, flavor);
                prop_assert!(
                    column == COUNT_COLUMN || dataset.has_column(&column),
                    "role {role} resolved to missing column {column}"
                );
            }
        }
    }
}
