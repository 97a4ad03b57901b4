//! Known industry verticals and free-text identifier normalization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A known industry vertical.
///
/// Free-text identifiers (e.g. `"SFW CRM"`, `"Manufacturing GmbH"`) are
/// normalized onto these keys by [`Industry::detect`]; anything
/// unrecognized falls back to [`Industry::Retail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Finance,
    Retail,
    Crm,
    Manufacturing,
    Healthcare,
    Logistics,
}

/// Substring probes checked in order by [`Industry::detect`].
const DETECT_RULES: &[(Industry, &[&str])] = &[
    (Industry::Crm, &["crm", "pipeline", "lead"]),
    (Industry::Manufacturing, &["manufact", "factory", "production"]),
    (Industry::Finance, &["financ", "bank", "invest", "account"]),
    (Industry::Healthcare, &["health", "clinic", "hospital", "patient"]),
    (Industry::Logistics, &["logist", "shipping", "freight", "transport"]),
    (Industry::Retail, &["retail", "shop", "commerce", "store"]),
];

impl Industry {
    /// All known industries, in display order.
    pub const ALL: [Industry; 6] = [
        Industry::Finance,
        Industry::Retail,
        Industry::Crm,
        Industry::Manufacturing,
        Industry::Healthcare,
        Industry::Logistics,
    ];

    /// Key the engine falls back to when nothing matches.
    pub const DEFAULT: Industry = Industry::Retail;

    /// Canonical registry key.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            Industry::Finance => "finance",
            Industry::Retail => "retail",
            Industry::Crm => "crm",
            Industry::Manufacturing => "manufacturing",
            Industry::Healthcare => "healthcare",
            Industry::Logistics => "logistics",
        }
    }

    /// Human-readable name for titles and pickers.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Industry::Finance => "Finance",
            Industry::Retail => "Retail",
            Industry::Crm => "CRM",
            Industry::Manufacturing => "Manufacturing",
            Industry::Healthcare => "Healthcare",
            Industry::Logistics => "Logistics",
        }
    }

    /// Normalizes a free-text industry identifier to a known key.
    ///
    /// Matching is case-insensitive substring containment, checked in a
    /// fixed rule order so that e.g. `"CRM retail add-on"` resolves to
    /// [`Industry::Crm`]. Unrecognized input yields [`Industry::DEFAULT`].
    #[must_use]
    pub fn detect(identifier: &str) -> Industry {
        let lowered = identifier.to_lowercase();
        for (industry, probes) in DETECT_RULES {
            if probes.iter().any(|probe| lowered.contains(probe)) {
                return *industry;
            }
        }
        Industry::DEFAULT
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for Industry {
    type Err = String;

    /// Strict parse of a canonical key (unlike the lenient
    /// [`Industry::detect`]).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .iter()
            .copied()
            .find(|industry| industry.as_key() == raw.trim().to_lowercase())
            .ok_or_else(|| format!("unknown industry key: {raw}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_substring() {
        assert_eq!(Industry::detect("SFW CRM"), Industry::Crm);
        assert_eq!(Industry::detect("Acme Manufacturing"), Industry::Manufacturing);
        assert_eq!(Industry::detect("retail chain"), Industry::Retail);
        assert_eq!(Industry::detect("Community Health Network"), Industry::Healthcare);
    }

    #[test]
    fn unknown_identifier_falls_back_to_retail() {
        assert_eq!(Industry::detect("bakery"), Industry::Retail);
        assert_eq!(Industry::detect(""), Industry::Retail);
    }

    #[test]
    fn strict_parse_rejects_free_text() {
        assert_eq!("crm".parse::<Industry>(), Ok(Industry::Crm));
        assert!("SFW CRM".parse::<Industry>().is_err());
    }
}
