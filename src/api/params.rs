//! Lenient integer coercion for query parameters.

/// Read a leading integer the way a browser's `parseInt` does and fall back
/// to `default` when nothing parses or the result is zero.
///
/// Surrounding whitespace, a sign and trailing garbage are tolerated
/// (`" 25abc"` → 25, `"3.9"` → 3). Negative values pass through unchecked.
pub fn int_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(leading_int)
        .filter(|v| *v != 0)
        .unwrap_or(default)
}

fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end]
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(int_or_default(None, 100), 100);
        assert_eq!(int_or_default(Some("abc"), 100), 100);
        assert_eq!(int_or_default(Some(""), 100), 100);
        assert_eq!(int_or_default(Some("0"), 100), 100);
    }

    #[test]
    fn test_parse_int_leniency() {
        assert_eq!(int_or_default(Some("25"), 100), 25);
        assert_eq!(int_or_default(Some("  25abc"), 100), 25);
        assert_eq!(int_or_default(Some("3.9"), 100), 3);
        assert_eq!(int_or_default(Some("+7"), 100), 7);
    }

    #[test]
    fn test_negative_passes_through() {
        assert_eq!(int_or_default(Some("-5"), 0), -5);
    }
}
