//! Cell helpers shared by the chart projection and the column statistics.

/// Parse a raw cell as a number.
///
/// Returns `None` for empty cells, NaN, and alphabetic spellings such as
/// `inf` or `nan`. The only alphabetic form accepted is `Infinity`, with an
/// optional sign.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }

    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// True when [`parse_numeric`] accepts the cell.
pub fn is_numeric(cell: &str) -> bool {
    parse_numeric(cell).is_some()
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_number_forms() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric("-3.5"), Some(-3.5));
        assert_eq!(parse_numeric("+.5"), Some(0.5));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric(" 7 "), Some(7.0));
        assert_eq!(parse_numeric("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn rejects_text_and_blanks() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("12px"), None);
        assert_eq!(parse_numeric("1,5"), None);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(0.768, 2), 0.77);
        assert_eq!(round_to(2.0, 2), 2.0);
        assert_eq!(round_to(12.34, 1), 12.3);
        assert_eq!(round_to(-1.255, 1), -1.3);
    }
}
