// ---------------------------------------------------------------------------
// German (de-DE) number formatting
// ---------------------------------------------------------------------------

/// Format a number the way de-DE displays it: `.` between thousands, `,`
/// before decimals, at most three fraction digits without trailing zeros.
///
/// `1234567.5` → `"1.234.567,5"`
pub fn format_de(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (integer_part, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut result = group_thousands(integer_part, '.');
    if !fraction.is_empty() {
        result.push(',');
        result.push_str(fraction);
    }
    if value < 0.0 && result.chars().any(|c| c != '0' && c != ',' && c != '.') {
        result.insert(0, '-');
    }
    result
}

/// Insert `separator` every three digits from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_de(500_000.0), "500.000");
        assert_eq!(format_de(2_000_000.0), "2.000.000");
        assert_eq!(format_de(999.0), "999");
        assert_eq!(format_de(0.0), "0");
    }

    #[test]
    fn uses_comma_for_decimals() {
        assert_eq!(format_de(1_234_567.5), "1.234.567,5");
        assert_eq!(format_de(0.125), "0,125");
        assert_eq!(format_de(12.34567), "12,346");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_de(-1_500.25), "-1.500,25");
        assert_eq!(format_de(-0.0001), "0");
    }
}
