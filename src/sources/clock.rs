use chrono::NaiveDateTime;

use super::Clock;

/// The parts of "now" the statusline shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReading {
    /// Zone abbreviation, e.g. "JST". Empty when the platform can't say.
    pub abbreviation: String,
    /// Raw UTC offset as `±HHMM`.
    pub offset: String,
    pub local: NaiveDateTime,
}

/// Collapse a whole-hour offset: "+0900" -> "+9", "-0500" -> "-5".
/// Offsets with minutes are returned as-is ("+0930").
pub fn simplify_offset(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if bytes.len() != 5 || !raw.is_ascii() || !matches!(bytes[0], b'+' | b'-') {
        return raw.to_string();
    }
    let (hours, minutes) = (&raw[1..3], &raw[3..5]);
    if minutes != "00" {
        return raw.to_string();
    }
    match hours.parse::<u8>() {
        Ok(h) => format!("{}{}", &raw[..1], h),
        Err(_) => raw.to_string(),
    }
}

/// Render as "2026-10-19 14:05 JST+9".
pub fn format_time(reading: &TimeReading) -> String {
    let abbreviation = if reading.abbreviation.is_empty() {
        "UTC"
    } else {
        reading.abbreviation.as_str()
    };
    format!(
        "{} {}{}",
        reading.local.format("%Y-%m-%d %H:%M"),
        abbreviation,
        simplify_offset(&reading.offset)
    )
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeReading {
        let now = chrono::Local::now();
        TimeReading {
            abbreviation: zone_abbreviation().unwrap_or_default(),
            offset: now.format("%z").to_string(),
            local: now.naive_local(),
        }
    }
}

#[cfg(unix)]
extern "C" {
    // POSIX, but not bound by the libc crate on every target.
    fn tzset();
}

/// chrono only knows offsets, so ask the C library for the zone name.
#[cfg(unix)]
fn zone_abbreviation() -> Option<String> {
    let mut buf = [0u8; 64];
    // SAFETY: `tm` is fully written by localtime_r before strftime reads it,
    // and strftime never writes more than `buf.len()` bytes.
    let len = unsafe {
        tzset();
        let now = libc::time(std::ptr::null_mut());
        let mut tm: libc::tm = std::mem::zeroed();
        if libc::localtime_r(&now, &mut tm).is_null() {
            return None;
        }
        libc::strftime(
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            b"%Z\0".as_ptr() as *const libc::c_char,
            &tm,
        )
    };
    if len == 0 {
        return None;
    }
    let name = String::from_utf8_lossy(&buf[..len]).trim().to_string();
    (!name.is_empty()).then_some(name)
}

#[cfg(not(unix))]
fn zone_abbreviation() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(abbreviation: &str, offset: &str) -> TimeReading {
        TimeReading {
            abbreviation: abbreviation.to_string(),
            offset: offset.to_string(),
            local: NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(14, 5, 59)
                .unwrap(),
        }
    }

    #[test]
    fn test_simplify_offset_whole_hours() {
        assert_eq!(simplify_offset("+0900"), "+9");
        assert_eq!(simplify_offset("-0500"), "-5");
        assert_eq!(simplify_offset("+1000"), "+10");
        assert_eq!(simplify_offset("+0000"), "+0");
    }

    #[test]
    fn test_simplify_offset_keeps_minutes() {
        assert_eq!(simplify_offset("+0930"), "+0930");
        assert_eq!(simplify_offset("+0545"), "+0545");
    }

    #[test]
    fn test_simplify_offset_malformed_passthrough() {
        assert_eq!(simplify_offset("+09:00"), "+09:00");
        assert_eq!(simplify_offset(""), "");
    }

    #[test]
    fn test_format_time_minute_precision() {
        assert_eq!(format_time(&reading("JST", "+0900")), "2026-10-19 14:05 JST+9");
        assert_eq!(format_time(&reading("ACST", "+0930")), "2026-10-19 14:05 ACST+0930");
    }

    #[test]
    fn test_format_time_without_abbreviation() {
        assert_eq!(format_time(&reading("", "-0300")), "2026-10-19 14:05 UTC-3");
    }

    #[test]
    fn test_system_clock_offset_shape() {
        let now = SystemClock.now();
        assert_eq!(now.offset.len(), 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_zone_abbreviation_is_printable() {
        if let Some(name) = zone_abbreviation() {
            assert!(!name.is_empty());
            assert!(!name.contains('\0'), "{:?}", name);
        }
    }
}
