// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! `gerado_em` formatting
//!
//! A naive ISO-8601 UTC representation with a literal `Z` appended. The
//! fractional part is microseconds and is left out entirely when it is zero.

use chrono::{DateTime, Timelike, Utc};

pub fn iso_utc_now() -> String {
    iso_utc(Utc::now())
}

pub fn iso_utc(at: DateTime<Utc>) -> String {
    let naive = at.naive_utc();
    let micros = naive.nanosecond() / 1_000 % 1_000_000;
    let mut out = naive.format("%Y-%m-%dT%H:%M:%S").to_string();
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out.push('Z');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_iso_utc_with_micros() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        assert_eq!(iso_utc(at), "2024-03-09T14:05:07.123456Z");
    }

    #[test]
    fn test_iso_utc_pads_micros() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
            .with_nanosecond(5_000)
            .unwrap();
        assert_eq!(iso_utc(at), "2024-03-09T14:05:07.000005Z");
    }

    #[test]
    fn test_iso_utc_whole_second() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(iso_utc(at), "2024-12-31T23:59:59Z");
    }

    #[test]
    fn test_iso_utc_now_close_to_wall_clock() {
        let before = Utc::now();
        let stamp = iso_utc_now();
        assert!(stamp.ends_with('Z'));
        assert!(!stamp.contains('+'));
        let parsed =
            NaiveDateTime::parse_from_str(stamp.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")
                .unwrap()
                .and_utc();
        let delta = parsed - before;
        assert!(delta.num_seconds().abs() <= 2);
    }
}
