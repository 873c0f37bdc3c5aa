//! Value formatting helpers for human-readable summaries.

const MEBIBYTE: f64 = 1_048_576.0;
const GIBIBYTE: u64 = 1_073_741_824;

/// Formats an integer with `,` thousands separators: `1234567` → `1,234,567`.
pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a byte count as `X.YY MB (N B)`, switching to GB above one gibibyte.
///
/// At most two fractional digits are shown and trailing zeros are dropped.
pub fn format_size(size: u64) -> String {
    if size > GIBIBYTE {
        format!("{} GB ({} B)", format_decimal(size as f64 / GIBIBYTE as f64), size)
    } else {
        format!("{} MB ({} B)", format_decimal(size as f64 / MEBIBYTE), size)
    }
}

fn format_decimal(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Extracts the date part of an ISO-8601 timestamp (`2013-06-14T10:00:00` → `2013-06-14`).
///
/// Returns `None` unless something other than `T` follows the first `T`.
pub fn short_date(long_date: Option<&str>) -> Option<&str> {
    let (date, time) = long_date?.split_once('T')?;
    time.contains(|c: char| c != 'T').then_some(date)
}

/// Normalizes a codepage name for display.
///
/// UTF names get an upper-cased `UTF` prefix (`utf-8` → `UTF-8`); anything
/// else is capitalized (`WINDOWS-1251` → `Windows-1251`). Only the case
/// changes; aliases are shown as recorded.
pub fn format_codepage(name: &str) -> String {
    if name.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("utf")) {
        return format!("UTF{}", &name[3..]);
    }
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}
