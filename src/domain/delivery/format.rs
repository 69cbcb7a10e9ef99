//! Display formatting shared by the email and Slack renderers.

use crate::domain::reporting::{ChangeDirection, Kpi, KpiFormat, RevenueRange};

pub const CURRENCY_SYMBOL: &str = "€";

pub const COLOUR_UP: &str = "#10b981";
pub const COLOUR_DOWN: &str = "#ef4444";
pub const COLOUR_FLAT: &str = "#888";

/// Formats a number with en-US grouping and at most three fraction digits.
///
/// ```
/// use opsrep::domain::delivery::format_number;
/// assert_eq!(format_number(47500.0), "47,500");
/// assert_eq!(format_number(2.1), "2.1");
/// assert_eq!(format_number(1234.56789), "1,234.568");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Formats a KPI value with its currency prefix or percent suffix.
pub fn format_kpi_value(kpi: &Kpi) -> String {
    let number = format_number(kpi.value);
    match kpi.format {
        KpiFormat::Currency => format!("{}{}", CURRENCY_SYMBOL, number),
        KpiFormat::Percent => format!("{}%", number),
        KpiFormat::Number | KpiFormat::Hours => number,
    }
}

pub fn change_arrow(direction: ChangeDirection) -> &'static str {
    match direction {
        ChangeDirection::Up => "↑",
        ChangeDirection::Down => "↓",
        ChangeDirection::Flat => "→",
    }
}

pub fn change_colour(direction: ChangeDirection) -> &'static str {
    match direction {
        ChangeDirection::Up => COLOUR_UP,
        ChangeDirection::Down => COLOUR_DOWN,
        ChangeDirection::Flat => COLOUR_FLAT,
    }
}

/// Arrow plus absolute change, e.g. `↑ 34.3%`.
pub fn format_change(change: f64) -> String {
    format!(
        "{} {:.1}%",
        change_arrow(ChangeDirection::of(change)),
        change.abs()
    )
}

/// Renders a revenue range as `€low–€high`.
pub fn format_revenue_range(range: &RevenueRange) -> String {
    format!(
        "{sym}{}–{sym}{}",
        format_number(range.low),
        format_number(range.high),
        sym = CURRENCY_SYMBOL
    )
}

/// Escapes text for interpolation into HTML element content or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
