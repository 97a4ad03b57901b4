//! Heuristic chains for mapping semantic roles onto column names.
//!
//! The chains are plain data, separate from the resolver's control flow,
//! so each table can be unit-tested on its own. All patterns match
//! case-insensitively and as substrings of the column name; within one
//! role the patterns are ordered by priority, first hit wins.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Priority-ordered patterns for one semantic role.
#[derive(Debug, Clone, Copy)]
pub struct RoleChain {
    pub role: &'static str,
    pub patterns: &'static [&'static str],
}

/// Chains for measure (numeric-flavored) roles: candidate columns must
/// also pass a numeric sample check.
pub const MEASURE_CHAINS: &[RoleChain] = &[
    RoleChain { role: "sales", patterns: &["sales", "revenue", "amount", "total", "income"] },
    RoleChain { role: "profit", patterns: &["profit", "margin", "earnings", "net"] },
    RoleChain { role: "cost", patterns: &["cost", "expense", "spend", "price"] },
    RoleChain { role: "count", patterns: &["count", "quantity", "qty", "number"] },
    RoleChain { role: "rate", patterns: &["rate", "percent", "ratio", "pct"] },
    RoleChain { role: "score", patterns: &["score", "rating", "rank", "points"] },
    RoleChain { role: "time", patterns: &["time", "duration", "hours", "days"] },
    RoleChain { role: "value", patterns: &["value", "amount", "worth", "total"] },
    RoleChain { role: "revenue", patterns: &["revenue", "sales", "income", "amount"] },
    RoleChain { role: "units", patterns: &["units", "quantity", "qty", "volume"] },
    RoleChain { role: "est_value", patterns: &["est_value", "value", "amount", "deal"] },
];

/// Chains for dimension (textual-flavored) roles: no numeric constraint.
pub const DIMENSION_CHAINS: &[RoleChain] = &[
    RoleChain { role: "date", patterns: &["date", "time", "month", "year", "day", "week", "period", "quarter"] },
    RoleChain { role: "time", patterns: &["date", "time", "month", "year", "period", "quarter"] },
    RoleChain { role: "category", patterns: &["category", "type", "class", "group"] },
    RoleChain { role: "region", patterns: &["region", "state", "country", "city", "location", "territory"] },
    RoleChain { role: "product", patterns: &["product", "item", "sku", "name"] },
    RoleChain { role: "department", patterns: &["department", "dept", "division", "unit"] },
    RoleChain { role: "vendor", patterns: &["vendor", "supplier", "manufacturer", "brand"] },
    RoleChain { role: "source", patterns: &["source", "channel", "origin", "medium"] },
    RoleChain { role: "channel", patterns: &["channel", "source", "medium", "platform"] },
    RoleChain { role: "segment", patterns: &["segment", "tier", "group", "category"] },
    RoleChain { role: "team", patterns: &["team", "owner", "rep", "agent"] },
];

/// CRM-shaped datasets: role to the exact field name the connector emits.
pub const CRM_EXPECTED_COLUMNS: &[(&str, &str)] = &[
    ("lead_status", "lead_status"),
    ("stage", "stage"),
    ("source", "lead_source"),
    ("owner", "owner"),
    ("est_value", "est_value"),
    ("score", "lead_score"),
    ("date", "created_date"),
    ("region", "region"),
    ("rate", "conversion_rate"),
];

/// CRM-shaped datasets: looser aliases tried after the exact field names.
pub const CRM_ALIAS_PATTERNS: &[(&str, &str)] = &[
    ("lead_status", "lead_status|status|stage"),
    ("stage", "stage|lead_status|status|phase"),
    ("source", "source|channel|origin"),
    ("owner", "owner|rep|agent|assigned"),
    ("est_value", "est_value|value|amount|deal"),
    ("score", "score|rating"),
    ("date", "created|date|time"),
    ("region", "region|territory|state|country"),
    ("rate", "rate|conversion"),
];

/// Column names that mark a dataset as CRM/relationship-shaped even when
/// the industry key says otherwise.
pub const CRM_SHAPE_MARKERS: &[&str] = &["lead_status", "lead_source", "est_value", "lead_score"];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| Regex::new(&format!("(?i){pattern}")).ok())
        .collect()
}

static MEASURE_COMPILED: LazyLock<BTreeMap<&'static str, Vec<Regex>>> = LazyLock::new(|| {
    MEASURE_CHAINS
        .iter()
        .map(|chain| (chain.role, compile(chain.patterns)))
        .collect()
});

static DIMENSION_COMPILED: LazyLock<BTreeMap<&'static str, Vec<Regex>>> = LazyLock::new(|| {
    DIMENSION_CHAINS
        .iter()
        .map(|chain| (chain.role, compile(chain.patterns)))
        .collect()
});

static CRM_ALIAS_COMPILED: LazyLock<BTreeMap<&'static str, Regex>> = LazyLock::new(|| {
    CRM_ALIAS_PATTERNS
        .iter()
        .filter_map(|(role, pattern)| {
            Regex::new(&format!("(?i){pattern}")).ok().map(|re| (*role, re))
        })
        .collect()
});

/// Compiled measure chain for a role, when the vocabulary knows it.
pub fn measure_chain(role: &str) -> Option<&'static [Regex]> {
    MEASURE_COMPILED.get(role).map(Vec::as_slice)
}

/// Compiled dimension chain for a role, when the vocabulary knows it.
pub fn dimension_chain(role: &str) -> Option<&'static [Regex]> {
    DIMENSION_COMPILED.get(role).map(Vec::as_slice)
}

/// Exact CRM field expected for a role.
pub fn crm_expected_column(role: &str) -> Option<&'static str> {
    CRM_EXPECTED_COLUMNS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, column)| *column)
}

/// Compiled CRM alias regex for a role.
pub fn crm_alias(role: &str) -> Option<&'static Regex> {
    CRM_ALIAS_COMPILED.get(role)
}

/// Compiles an ad-hoc substring pattern from a role name itself, used when
/// a role is missing from the vocabularies.
pub fn role_name_pattern(role: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}", regex::escape(role))).ok()
}
