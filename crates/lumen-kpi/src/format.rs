//! Compact number formatting for KPI cards.

/// Formats a value compactly: `1234` → `"1.2K"`, `2_400_000` → `"2.4M"`.
///
/// Values below 1000 print as plain numbers (one decimal when fractional).
#[must_use]
pub fn format_compact(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let (scaled, unit) = if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        (abs, "")
    };
    let body = if unit.is_empty() && scaled.fract() == 0.0 {
        format!("{scaled:.0}")
    } else {
        trim_decimal(&format!("{scaled:.1}"))
    };
    if negative {
        format!("-{body}{unit}")
    } else {
        format!("{body}{unit}")
    }
}

/// Drops a redundant `.0` so whole amounts print as `2M`, not `2.0M`.
fn trim_decimal(raw: &str) -> String {
    raw.strip_suffix(".0").unwrap_or(raw).to_string()
}

/// Applies a KPI's prefix and suffix around the compact body.
#[must_use]
pub fn decorate(body: &str, prefix: Option<&str>, suffix: Option<&str>) -> String {
    format!(
        "{}{body}{}",
        prefix.unwrap_or_default(),
        suffix.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_units() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(500.0), "500");
        assert_eq!(format_compact(1234.0), "1.2K");
        assert_eq!(format_compact(2_400_000.0), "2.4M");
        assert_eq!(format_compact(2_000_000.0), "2M");
        assert_eq!(format_compact(3_100_000_000.0), "3.1B");
        assert_eq!(format_compact(-1500.0), "-1.5K");
        assert_eq!(format_compact(12.5), "12.5");
    }

    #[test]
    fn decoration() {
        assert_eq!(decorate("2.4M", Some("$"), None), "$2.4M");
        assert_eq!(decorate("4.6", None, Some("%")), "4.6%");
        assert_eq!(decorate("12", None, None), "12");
    }
}
