use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::error::{Error, Result};

/// Posts older than this render with the absolute date.
const RELATIVE_CUTOFF_DAYS: i64 = 7;

/// Locale for relative date phrases. The absolute `DD/MM/YYYY` form
/// is locale-independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Format a post timestamp relative to an explicit `now`.
///
/// Recent posts (strictly less than 7 whole days old) get a relative
/// phrase ("3 days ago", "3 дня назад"); anything at or past the
/// cutoff gets `DD/MM/YYYY`. `now` is a parameter, not a hidden
/// clock, so identical inputs always produce identical output.
pub fn format_post_date(iso_date: &str, now: DateTime<Utc>, locale: Locale) -> Result<String> {
    let date = parse_iso(iso_date)?;
    let elapsed = now.signed_duration_since(date);

    if elapsed.num_days() >= RELATIVE_CUTOFF_DAYS {
        return Ok(date.format("%d/%m/%Y").to_string());
    }
    Ok(relative_phrase(elapsed, locale))
}

/// Parse an ISO-8601 timestamp, also accepting bare `YYYY-MM-DD`
/// dates (treated as midnight UTC) as the backend sometimes sends.
fn parse_iso(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(Error::InvalidDateFormat(raw.to_string()))
}

fn relative_phrase(elapsed: Duration, locale: Locale) -> String {
    let seconds = elapsed.num_seconds();
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    match locale {
        Locale::En => {
            if seconds < 60 {
                "just now".to_string()
            } else if minutes < 60 {
                format!("{} min ago", minutes)
            } else if hours < 24 {
                format!("{} hours ago", hours)
            } else if days == 1 {
                "yesterday".to_string()
            } else {
                format!("{} days ago", days)
            }
        }
        Locale::Ru => {
            if seconds < 60 {
                "только что".to_string()
            } else if minutes < 60 {
                format!("{} мин назад", minutes)
            } else if hours < 24 {
                format!("{} {} назад", hours, ru_plural(hours, "час", "часа", "часов"))
            } else if days == 1 {
                "вчера".to_string()
            } else {
                format!("{} {} назад", days, ru_plural(days, "день", "дня", "дней"))
            }
        }
    }
}

/// Russian cardinal agreement: 1 день, 2-4 дня, 5+ дней (with the
/// 11-14 exception).
fn ru_plural(n: i64, one: &'static str, few: &'static str, many: &'static str) -> &'static str {
    let n = n.abs();
    let tail = n % 10;
    let teens = n % 100;
    if tail == 1 && teens != 11 {
        one
    } else if (2..=4).contains(&tail) && !(12..=14).contains(&teens) {
        few
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap()
    }

    fn days_before(days: i64) -> String {
        (now() - Duration::days(days)).to_rfc3339()
    }

    #[test]
    fn test_six_days_is_relative() {
        let formatted = format_post_date(&days_before(6), now(), Locale::En).unwrap();
        assert_eq!(formatted, "6 days ago");
    }

    #[test]
    fn test_seven_days_is_absolute() {
        let formatted = format_post_date(&days_before(7), now(), Locale::En).unwrap();
        assert_eq!(formatted, "05/03/2024");
    }

    #[test]
    fn test_under_a_minute_is_just_now() {
        let ts = (now() - Duration::seconds(30)).to_rfc3339();
        assert_eq!(format_post_date(&ts, now(), Locale::En).unwrap(), "just now");
    }

    #[test]
    fn test_hours_and_yesterday() {
        let ts = (now() - Duration::hours(5)).to_rfc3339();
        assert_eq!(
            format_post_date(&ts, now(), Locale::En).unwrap(),
            "5 hours ago"
        );

        let ts = (now() - Duration::hours(30)).to_rfc3339();
        assert_eq!(
            format_post_date(&ts, now(), Locale::En).unwrap(),
            "yesterday"
        );
    }

    #[test]
    fn test_russian_phrasing() {
        assert_eq!(
            format_post_date(&days_before(3), now(), Locale::Ru).unwrap(),
            "3 дня назад"
        );
        assert_eq!(
            format_post_date(&days_before(5), now(), Locale::Ru).unwrap(),
            "5 дней назад"
        );

        let ts = (now() - Duration::hours(1)).to_rfc3339();
        assert_eq!(
            format_post_date(&ts, now(), Locale::Ru).unwrap(),
            "1 час назад"
        );

        let ts = (now() - Duration::hours(30)).to_rfc3339();
        assert_eq!(format_post_date(&ts, now(), Locale::Ru).unwrap(), "вчера");
    }

    #[test]
    fn test_russian_absolute_past_cutoff() {
        assert_eq!(
            format_post_date(&days_before(10), now(), Locale::Ru).unwrap(),
            "02/03/2024"
        );
    }

    #[test]
    fn test_bare_date_parses_as_midnight_utc() {
        let formatted = format_post_date("2024-01-15", now(), Locale::En).unwrap();
        assert_eq!(formatted, "15/01/2024");
    }

    #[test]
    fn test_unparseable_date_fails() {
        let err = format_post_date("yesterday-ish", now(), Locale::En).unwrap_err();
        assert_eq!(err, Error::InvalidDateFormat("yesterday-ish".to_string()));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let ts = days_before(3);
        let first = format_post_date(&ts, now(), Locale::En).unwrap();
        let second = format_post_date(&ts, now(), Locale::En).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_future_date_reads_as_just_now() {
        let ts = (now() + Duration::hours(2)).to_rfc3339();
        assert_eq!(format_post_date(&ts, now(), Locale::En).unwrap(), "just now");
    }

    #[test]
    fn test_offset_timestamps_normalize_to_utc() {
        // 7 days before `now` expressed with a +03:00 offset.
        let ts = "2024-03-05T15:00:00+03:00";
        assert_eq!(
            format_post_date(ts, now(), Locale::En).unwrap(),
            "05/03/2024"
        );
    }
}
