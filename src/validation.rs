//! Structural and calendar checks for date and timestamp strings.

use chrono::NaiveDate;

/// Returns true if `s` is a real calendar date in `YYYY-MM-DD` form.
///
/// Leap years follow the Gregorian rule, so `2024-02-29` and `2000-02-29`
/// pass while `2023-02-29` and `1900-02-29` do not.
pub fn is_valid_date(s: &str) -> bool {
    if !matches_layout(s, b"dddd-dd-dd") {
        return false;
    }

    let (Some(year), Some(month), Some(day)) = (
        digits(&s[0..4]),
        digits(&s[5..7]),
        digits(&s[8..10]),
    ) else {
        return false;
    };

    NaiveDate::from_ymd_opt(year as i32, month, day).is_some()
}

/// Returns true if `s` has the shape `YYYY-MM-DD HH:MM`.
///
/// Only separators and digit positions are checked. Month, day, hour and
/// minute ranges are deliberately left unchecked, so `2024-99-99 99:99`
/// passes.
pub fn is_valid_timestamp(s: &str) -> bool {
    matches_layout(s, b"dddd-dd-dd dd:dd")
}

/// Match `s` byte-for-byte against `layout`, where `d` stands for any ASCII
/// digit and every other byte must appear literally.
fn matches_layout(s: &str, layout: &[u8]) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == layout.len()
        && bytes.iter().zip(layout).all(|(&b, &l)| match l {
            b'd' => b.is_ascii_digit(),
            lit => b == lit,
        })
}

fn digits(s: &str) -> Option<u32> {
    s.parse().ok()
}
