//! Calendar date used for sitemap `lastmod` values.
//!
//! The sitemap protocol accepts W3C datetime; we only ever emit the date
//! part (`YYYY-MM-DD`), captured once per run and shared by every entry.
//!
//! # Examples
//!
//! ```ignore
//! let date = LastmodDate::parse("2024-06-15").unwrap();
//! assert_eq!(date.to_string(), "2024-06-15");
//!
//! let today = LastmodDate::today();
//! ```

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use std::fmt;

/// Date rendered into `<lastmod>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastmodDate(NaiveDate);

impl LastmodDate {
    /// Current date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Ok(Self(date)),
            None => bail!("date is invalid: {year:04}-{month:02}-{day:02}"),
        }
    }

    /// Parse from strict "YYYY-MM-DD" format
    ///
    /// Unpadded fields such as `2024-1-5` are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year = parse_digits(&bytes[0..4])?;
        let month = parse_digits(&bytes[5..7])?;
        let day = parse_digits(&bytes[8..10])?;

        Self::from_ymd(i32::try_from(year).ok()?, month, day).ok()
    }
}

impl fmt::Display for LastmodDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Parse a fixed-width run of ASCII digits
#[inline]
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut result = 0u32;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u32::from(d);
    }
    Some(result)
}
