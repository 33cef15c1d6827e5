use chrono::Duration;

/// Formats coins with thousands separators and a dollar sign, e.g. `$12,500`.
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formats a remaining cooldown as `1h 5m`, `12m 3s` or `40s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(1);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(999), "$999");
        assert_eq!(format_money(1_000), "$1,000");
        assert_eq!(format_money(1_234_567), "$1,234,567");
        assert_eq!(format_money(-2_500), "-$2,500");
    }

    #[test]
    fn formats_largest_units() {
        assert_eq!(format_duration(Duration::minutes(65)), "1h 5m");
        assert_eq!(format_duration(Duration::seconds(723)), "12m 3s");
        assert_eq!(format_duration(Duration::seconds(40)), "40s");
        assert_eq!(format_duration(Duration::milliseconds(200)), "1s");
    }
}
