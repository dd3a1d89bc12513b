/// Group a magnitude into thousands-separated digits
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Format an integer quantity with thousands separators
pub fn format_units(value: i64) -> String {
    let grouped = group_digits(value.unsigned_abs());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a holding cost (unit cost of 1, rendered as dollars)
pub fn format_cost(value: i64) -> String {
    let grouped = group_digits(value.unsigned_abs());
    if value < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a supplier or indicator score to two decimals
pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units_groups_thousands() {
        assert_eq!(format_units(0), "0");
        assert_eq!(format_units(999), "999");
        assert_eq!(format_units(1_000), "1,000");
        assert_eq!(format_units(1_234_567), "1,234,567");
        assert_eq!(format_units(-4_200), "-4,200");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(1500), "$1,500");
        assert_eq!(format_cost(-3), "-$3");
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert_eq!(format_units(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(format_cost(i64::MIN), "-$9,223,372,036,854,775,808");
        assert_eq!(format_cost(i64::MAX), "$9,223,372,036,854,775,807");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.856), "0.86");
        assert_eq!(format_score(1.0), "1.00");
    }
}
