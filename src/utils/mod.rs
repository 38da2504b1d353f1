pub mod cache;

/// Rounds to whole KRW and renders with thousands separators, e.g.
/// `₩265,333`.
pub fn format_krw(amount: f64) -> String {
    format!("₩{}", group_thousands(amount.round() as i64))
}

pub fn format_number(amount: f64) -> String {
    group_thousands(amount.round() as i64)
}

/// Signed two-decimal percentage, e.g. `+1.22%`.
pub fn format_percent(percent: f64) -> String {
    let prefix = if percent >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", prefix, percent)
}

pub fn format_distance(meters: u32) -> String {
    if meters >= 1_000 {
        format!("{:.1}km", meters as f64 / 1_000.0)
    } else {
        format!("{}m", meters)
    }
}

fn group_thousands(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}
