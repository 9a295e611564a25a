//! Supported locales and locale-fixed date formatting.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Supported display locales. Turkish is the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Tr,
    En,
}

impl Locale {
    /// Resolve an arbitrary locale tag to a supported locale.
    ///
    /// Missing, empty, or unrecognized input silently maps to Turkish.
    /// Callers never validate the tag before passing it in, so this must
    /// not fail.
    pub fn resolve(raw: Option<&str>) -> Locale {
        match raw.map(str::trim) {
            Some("en") => Locale::En,
            _ => Locale::Tr,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Tr
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Format a stored date string for display.
///
/// The two calendars are fixed tables selected by locale, not a real
/// calendar localization: `2025-07-25` renders as `25 Temmuz, 2025` in
/// Turkish and `July 25, 2025` in English. Unparseable input is returned
/// unchanged.
pub fn format_date(raw: &str, locale: Locale) -> String {
    let Some(date) = parse_date(raw) else {
        return raw.to_string();
    };
    let month = (date.month0()) as usize;
    match locale {
        Locale::Tr => format!("{} {}, {}", date.day(), MONTHS_TR[month], date.year()),
        Locale::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Timestamps also appear in stored rows, keep the date part
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    None
}

/// Today's date formatted for the given locale. Static route results carry
/// this instead of a publish date.
pub fn format_today(locale: Locale) -> String {
    format_date(&chrono::Utc::now().date_naive().to_string(), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_turkish() {
        assert_eq!(Locale::resolve(None), Locale::Tr);
        assert_eq!(Locale::resolve(Some("")), Locale::Tr);
        assert_eq!(Locale::resolve(Some("tr")), Locale::Tr);
        assert_eq!(Locale::resolve(Some("de")), Locale::Tr);
        assert_eq!(Locale::resolve(Some("en")), Locale::En);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-07-25", Locale::Tr), "25 Temmuz, 2025");
        assert_eq!(format_date("2025-07-25", Locale::En), "July 25, 2025");
        assert_eq!(format_date("2024-01-01", Locale::Tr), "1 Ocak, 2024");
        assert_eq!(format_date("2024-12-09", Locale::En), "December 9, 2024");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date("2025-07-25T10:30:00+03:00", Locale::Tr),
            "25 Temmuz, 2025"
        );
    }

    #[test]
    fn test_format_date_unparseable_passthrough() {
        assert_eq!(format_date("not a date", Locale::Tr), "not a date");
        assert_eq!(format_date("", Locale::En), "");
    }
}
