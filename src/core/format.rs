//! Display helpers for money and percentages

/// Group an integer with comma thousands separators: `1234567` → `1,234,567`
#[must_use]
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-euro amount with separators: `12345.6` → `€12,346`
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn euros(amount: f64) -> String {
    let rounded = amount.round() as i64;
    if rounded < 0 {
        format!("-€{}", thousands(rounded).trim_start_matches('-'))
    } else {
        format!("€{}", thousands(rounded))
    }
}

/// ROI percentage with one decimal, or "unbounded" when there is no cost to recover
#[must_use]
pub fn roi_percent(roi: Option<f64>) -> String {
    roi.map_or_else(|| "unbounded".to_string(), |value| format!("{value:.1}%"))
}

/// Payback period with one decimal, e.g. `1.3 years`
#[must_use]
pub fn years(value: f64) -> String {
    format!("{value:.1} years")
}
