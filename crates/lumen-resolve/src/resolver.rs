//! Maps semantic roles onto real columns of a concrete dataset.
//!
//! Resolution never fails: every chain terminates in the dataset's first
//! column of the appropriate type, and when even that is absent the role
//! points at the [`COUNT_COLUMN`] sentinel (row count).

use regex::Regex;
use tracing::debug;

use lumen_model::{COUNT_COLUMN, Dataset, Industry, RoleSpec};

use crate::patterns::{
    CRM_SHAPE_MARKERS, crm_alias, crm_expected_column, dimension_chain, measure_chain,
    role_name_pattern,
};

/// Which flavor of a role is being resolved: the x axis carries
/// dimensions (textual), the y axis carries measures (numeric).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFlavor {
    Dimension,
    Measure,
}

/// Role-to-column resolver for one dataset.
pub struct RoleResolver<'a> {
    dataset: &'a Dataset,
    crm_shaped: bool,
}

impl<'a> RoleResolver<'a> {
    /// Creates a resolver, detecting whether the dataset is CRM-shaped
    /// (via the industry key, or marker columns the CRM connector emits).
    #[must_use]
    pub fn new(dataset: &'a Dataset, industry: Industry) -> Self {
        let crm_shaped = industry == Industry::Crm
            || dataset
                .columns
                .iter()
                .any(|column| CRM_SHAPE_MARKERS.iter().any(|marker| column == marker));
        Self {
            dataset,
            crm_shaped,
        }
    }

    /// True when the CRM resolution chain is in effect.
    #[must_use]
    pub fn is_crm_shaped(&self) -> bool {
        self.crm_shaped
    }

    /// Resolves one role to a column name present in the dataset, or the
    /// count sentinel.
    #[must_use]
    pub fn resolve(&self, role: &str, flavor: RoleFlavor) -> String {
        if self.crm_shaped
            && let Some(column) = self.resolve_crm(role)
        {
            return column;
        }
        if let Some(column) = self.resolve_generic(role, flavor) {
            return column;
        }
        let fallback = self.terminal_fallback(flavor);
        debug!(role, ?flavor, column = %fallback, "role fell through to terminal fallback");
        fallback
    }

    /// Resolves the y axis of a blueprint. Multi-role specs resolve each
    /// element independently, dropping elements that only reach the
    /// sentinel; distinct roles binding to the same column keep the first
    /// occurrence. A fully dropped list is replaced by the first numeric
    /// column.
    #[must_use]
    pub fn resolve_y(&self, spec: &RoleSpec) -> Vec<String> {
        match spec {
            RoleSpec::Single(role) => vec![self.resolve(role, RoleFlavor::Measure)],
            RoleSpec::Multi(roles) => {
                let mut columns: Vec<String> = Vec::new();
                for role in roles {
                    let column = self.resolve(role, RoleFlavor::Measure);
                    if column != COUNT_COLUMN && !columns.contains(&column) {
                        columns.push(column);
                    }
                }
                if columns.is_empty() {
                    let fallback = self
                        .dataset
                        .first_numeric_column()
                        .unwrap_or(COUNT_COLUMN)
                        .to_string();
                    debug!(roles = ?roles, column = %fallback, "multi-series roles all dropped");
                    columns.push(fallback);
                }
                columns
            }
        }
    }

    /// The guaranteed fallback for a flavor: first column of the matching
    /// type, else the count sentinel.
    #[must_use]
    pub fn terminal_fallback(&self, flavor: RoleFlavor) -> String {
        let column = match flavor {
            RoleFlavor::Dimension => self.dataset.first_text_column(),
            RoleFlavor::Measure => self.dataset.first_numeric_column(),
        };
        column.unwrap_or(COUNT_COLUMN).to_string()
    }

    /// CRM chain: exact expected field name, then alias regex.
    fn resolve_crm(&self, role: &str) -> Option<String> {
        if let Some(expected) = crm_expected_column(role)
            && self.dataset.has_column(expected)
        {
            return Some(expected.to_string());
        }
        let alias = crm_alias(role)?;
        self.first_matching_column(alias, None)
    }

    /// Generic chain: vocabulary patterns in priority order (with a
    /// numeric sample check for measures), then the role's own name as a
    /// substring pattern.
    fn resolve_generic(&self, role: &str, flavor: RoleFlavor) -> Option<String> {
        let numeric_check = flavor == RoleFlavor::Measure;
        let chain = match flavor {
            RoleFlavor::Dimension => dimension_chain(role),
            RoleFlavor::Measure => measure_chain(role),
        };
        if let Some(chain) = chain {
            for pattern in chain {
                if let Some(column) = self.first_matching_column(pattern, Some(numeric_check)) {
                    return Some(column);
                }
            }
            return None;
        }
        // Unknown role: try its own name before giving up.
        let pattern = role_name_pattern(role)?;
        self.first_matching_column(&pattern, Some(numeric_check))
    }

    fn first_matching_column(&self, pattern: &Regex, numeric: Option<bool>) -> Option<String> {
        self.dataset
            .columns
            .iter()
            .find(|column| {
                if !pattern.is_match(column) {
                    return false;
                }
                match numeric {
                    Some(true) => self.dataset.is_numeric_column(column),
                    Some(false) | None => true,
                }
            })
            .cloned()
    }
}
