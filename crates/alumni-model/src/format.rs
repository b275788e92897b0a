//! Display helpers shared by the list cards and detail dialogs.

use chrono::NaiveDate;

/// Number of description characters shown on a job card.
pub const JOB_SUMMARY_CHARS: usize = 150;

/// Format an ISO date as "Saturday, March 15, 2025".
///
/// Full timestamps (`2025-03-15T00:00:00Z`) are reduced to their date part.
/// Anything unparseable is returned unchanged so the card still shows
/// whatever the backend sent.
pub fn format_event_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format an ISO date the short US way: `1/20/2024`.
///
/// Unparseable input is returned unchanged.
pub fn format_short_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format an amount as US dollars with thousands separators: `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${whole}.{:02}", cents % 100)
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if value < 1000 {
            groups.push(value.to_string());
            break;
        }
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

/// Funding progress in percent.
///
/// `raised / goal * 100`, clamped to `0..=100`. A campaign without a positive
/// goal counts as complete once anything has been raised.
pub fn progress_percentage(raised: f64, goal: f64) -> f64 {
    if goal.is_nan() || goal <= 0.0 {
        return if raised > 0.0 { 100.0 } else { 0.0 };
    }
    let pct = raised / goal * 100.0;
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

/// Percentage with one decimal place: `42.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// First [`JOB_SUMMARY_CHARS`] characters of a description followed by `...`.
pub fn job_summary(description: &str) -> String {
    let head: String = description.chars().take(JOB_SUMMARY_CHARS).collect();
    format!("{head}...")
}

/// Avatar initials from first and last name.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_date_long_form() {
        assert_eq!(format_event_date("2025-03-15"), "Saturday, March 15, 2025");
        assert_eq!(
            format_event_date("2024-01-05T00:00:00.000Z"),
            "Friday, January 5, 2024"
        );
        assert_eq!(format_event_date("next week"), "next week");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(format_short_date("2024-01-20"), "1/20/2024");
        assert_eq!(format_short_date("2024-11-05T10:00:00Z"), "11/5/2024");
        assert_eq!(format_short_date(""), "");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-42.129), "-$42.13");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress_percentage(50.0, 200.0), 25.0);
        assert_eq!(progress_percentage(500.0, 200.0), 100.0);
        assert_eq!(progress_percentage(-5.0, 200.0), 0.0);
        assert_eq!(progress_percentage(10.0, 0.0), 100.0);
        assert_eq!(progress_percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_job_summary_truncates_on_chars() {
        let long = "é".repeat(200);
        let summary = job_summary(&long);
        assert_eq!(summary.chars().count(), JOB_SUMMARY_CHARS + 3);
        assert_eq!(job_summary("short"), "short...");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Grace", "Hopper"), "GH");
        assert_eq!(initials("", "Hopper"), "H");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(33.333), "33.3%");
    }
}
