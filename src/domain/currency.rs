//! Fixed-locale currency formatting (ja-JP, JPY)
//!
//! Yen has no minor unit, so amounts are rounded half away from zero and
//! shown with `,` thousands separators behind a fullwidth yen sign.

pub const YEN_SIGN: char = '￥';
pub const MAN_SUFFIX: &str = "万円";

/// Format whole-yen amount, e.g. `1650000.0` -> `￥1,650,000`.
pub fn format_yen(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{YEN_SIGN}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{YEN_SIGN}∞");
    }

    let rounded = amount.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    // -0.0 is not < 0.0, so tiny negatives print as ￥0
    if rounded < 0.0 {
        format!("-{YEN_SIGN}{grouped}")
    } else {
        format!("{YEN_SIGN}{grouped}")
    }
}

/// Shortest decimal form of a man-unit value, e.g. `2.5`.
pub fn format_man_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Man-unit value with its unit, e.g. `5万円`.
pub fn format_man(value: f64) -> String {
    format!("{}{MAN_SUFFIX}", format_man_value(value))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
