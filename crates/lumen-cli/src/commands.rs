//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use lumen_kpi::compute_kpis_with_hint;
use lumen_model::Industry;
use lumen_resolve::resolve_charts;
use lumen_standards::{OverrideBundle, Registry};

use crate::cli::{RecommendArgs, TemplatesArgs};
use crate::ingest::load_csv;
use crate::summary::{print_recommendation, print_template_list};

pub fn run_recommend(args: &RecommendArgs) -> Result<()> {
    let registry = load_registry(args.overrides.as_deref())?;
    let dataset = load_csv(&args.data)?;
    let industry = detect_industry(args.industry.as_deref());
    info!(industry = %industry, template = %args.template, "recommending");

    let variation = registry.template_variation(industry, &args.template);
    let specs = resolve_charts(variation, &dataset, industry);
    let cards = compute_kpis_with_hint(
        &registry,
        industry,
        &args.template,
        &dataset,
        args.category_column.as_deref(),
    );

    if args.json {
        let output = json!({
            "industry": industry.as_key(),
            "templateId": args.template,
            "charts": specs,
            "kpis": cards,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_recommendation(industry, &args.template, &specs, &cards);
    }
    Ok(())
}

pub fn run_templates(args: &TemplatesArgs) -> Result<()> {
    let registry = load_registry(args.overrides.as_deref())?;
    let industry = detect_industry(args.industry.as_deref());
    let heroes: Vec<(String, String)> = registry
        .template_pool(industry)
        .iter()
        .enumerate()
        .map(|(index, variation)| {
            let title = variation
                .hero()
                .map(|hero| hero.title.clone())
                .unwrap_or_default();
            (format!("template{}", index + 1), title)
        })
        .collect();
    print_template_list(industry, &heroes);
    Ok(())
}

pub fn run_industries() -> Result<()> {
    for industry in Industry::ALL {
        println!("{:<15} {}", industry.as_key(), industry.display_name());
    }
    Ok(())
}

fn detect_industry(identifier: Option<&str>) -> Industry {
    identifier.map_or(Industry::DEFAULT, Industry::detect)
}

fn load_registry(overrides: Option<&Path>) -> Result<Registry> {
    match overrides {
        None => Ok(Registry::builtin()),
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read overrides: {}", path.display()))?;
            let bundle = OverrideBundle::from_json(&raw)
                .with_context(|| format!("parse overrides: {}", path.display()))?;
            Registry::initialize(bundle)
                .with_context(|| format!("apply overrides: {}", path.display()))
        }
    }
}
