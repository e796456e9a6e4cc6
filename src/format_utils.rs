/// Format a figure for display, optionally as US dollars.
///
/// - NaN -> `$0` / `0`
/// - above 500M -> abbreviated (`1.23b`)
/// - tiny positive values -> `< $0.0001` / `< 0.0001`
/// - above 1000 -> grouped, no decimals
/// - dollars below 0.1 -> 4 decimals, other dollars -> 2 decimals
/// - plain figures -> up to 4 decimals
pub fn formatted_num(value: f64, usd: bool) -> String {
    let prefix = if usd { "$" } else { "" };
    if value.is_nan() || value == 0.0 {
        return format!("{}0", prefix);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, prefix);
    }
    if value > 500_000_000.0 {
        return format!("{}{}", prefix, to_k(value.round()));
    }
    if value > 0.0 && value < 0.0001 {
        return if usd { "< $0.0001".to_string() } else { "< 0.0001".to_string() };
    }
    if value > 1000.0 {
        return format!("{}{}", prefix, group_digits(value.round(), 0));
    }
    if usd {
        let decimals = if value < 0.1 { 4 } else { 2 };
        return format_dollar_amount(value, decimals);
    }
    let text = trim_fraction(format!("{:.4}", value));
    if text == "-0" { "0".to_string() } else { text }
}

/// `$1,234.50` style amount with a fixed number of decimals.
pub fn format_dollar_amount(value: f64, decimals: usize) -> String {
    let grouped = group_digits(value, decimals);
    match grouped.strip_prefix('-') {
        Some(unsigned) => format!("-${}", unsigned),
        None => format!("${}", grouped),
    }
}

/// Abbreviate with `k`, `m`, `b`, `t` suffixes, keeping at most 2 decimals.
pub fn to_k(value: f64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e12, "t"), (1e9, "b"), (1e6, "m"), (1e3, "k")];
    let magnitude = value.abs();
    for (scale, suffix) in SCALES {
        if magnitude >= scale {
            return format!("{}{}", trim_fraction(format!("{:.2}", value / scale)), suffix);
        }
    }
    trim_fraction(format!("{:.2}", value))
}

/// Shorten long token names: `"WRAPPED-ETHER"` with max 8 -> `"WRAPPED..."`.
pub fn truncate_name(text: &str, max_characters: usize) -> String {
    if text.chars().count() <= max_characters {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_characters.saturating_sub(1)).collect();
    format!("{}...", kept)
}

fn group_digits(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let is_zero = text.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
