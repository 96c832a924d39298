//! PDF date strings (`D:YYYYMMDDHHmmSSOHH'mm'`)

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// Parse a PDF date. Only the year is required; missing fields take their lowest value and a
/// missing zone means UTC.
pub fn parse_pdf_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let body = raw.strip_prefix("D:").unwrap_or(raw);
    let digits_len = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    let (digits, zone) = body.split_at(digits_len);
    if digits.len() < 4 {
        return None;
    }

    let field = |start: usize, default: u32| -> Option<u32> {
        match digits.get(start..start + 2) {
            Some(value) => value.parse().ok(),
            None => Some(default),
        }
    };

    let year: i32 = digits[..4].parse().ok()?;
    let naive = NaiveDate::from_ymd_opt(year, field(4, 1)?, field(6, 1)?)?.and_hms_opt(
        field(8, 0)?,
        field(10, 0)?,
        field(12, 0)?,
    )?;

    let offset = FixedOffset::east_opt(zone_offset_seconds(zone)?)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|date| date.with_timezone(&Utc))
}

fn zone_offset_seconds(zone: &str) -> Option<i32> {
    let mut chars = zone.chars();
    let sign = match chars.next() {
        None | Some('Z') => return Some(0),
        Some('+') => 1,
        Some('-') => -1,
        Some(_) => return None,
    };

    let digits: String = chars.filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(0..2).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes: i32 = digits.get(2..4).and_then(|m| m.parse().ok()).unwrap_or(0);
    Some(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_full_date_in_utc() {
        assert_eq!(
            parse_pdf_date("D:20250115093000Z"),
            Some(utc(2025, 1, 15, 9, 30, 0))
        );
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        assert_eq!(
            parse_pdf_date("D:20250115093000-05'00'"),
            Some(utc(2025, 1, 15, 14, 30, 0))
        );
        assert_eq!(
            parse_pdf_date("D:20250115093000+01'30"),
            Some(utc(2025, 1, 15, 8, 0, 0))
        );
    }

    #[test]
    fn test_partial_dates_default_missing_fields() {
        assert_eq!(parse_pdf_date("D:2024"), Some(utc(2024, 1, 1, 0, 0, 0)));
        assert_eq!(parse_pdf_date("202403"), Some(utc(2024, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn test_rejects_malformed_dates() {
        assert_eq!(parse_pdf_date(""), None);
        assert_eq!(parse_pdf_date("D:99"), None);
        assert_eq!(parse_pdf_date("D:20241345"), None);
        assert_eq!(parse_pdf_date("yesterday"), None);
    }
}
