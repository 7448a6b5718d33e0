use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

pub const DATE_TEXT_LEN: usize = 10;
const DATE_TEXT_FORMAT: &str = "%Y/%m/%d";
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y";
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub fn mask_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let mut masked = String::with_capacity(DATE_TEXT_LEN);

    match digits.len() {
        0..=3 => masked.push_str(&digits),
        4..=6 => {
            masked.push_str(&digits[..4]);
            masked.push('/');
            masked.push_str(&digits[4..]);
        }
        len => {
            masked.push_str(&digits[..4]);
            masked.push('/');
            masked.push_str(&digits[4..6]);
            masked.push('/');
            masked.push_str(&digits[6..len.min(8)]);
        }
    }

    masked.truncate(DATE_TEXT_LEN);
    masked
}

// Shape only; `2024/13/40` passes.
pub fn is_valid_date_format(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == DATE_TEXT_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

// Well-formed masked text sorts like the dates it spells.
pub fn is_end_before_start(start: &str, end: &str) -> bool {
    is_valid_date_format(start) && is_valid_date_format(end) && end < start
}

pub fn duration_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if !is_valid_date_format(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_TEXT_FORMAT).ok()
}

pub fn format_date_text(date: NaiveDate) -> String {
    date.format(DATE_TEXT_FORMAT).to_string()
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn date_text_to_timestamp(text: &str) -> Option<String> {
    parse_date_text(text).map(|date| to_timestamp(midnight_utc(date)))
}

pub fn to_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(ts, DATE_TEXT_FORMAT))
        .ok()
        .map(midnight_utc)
}
