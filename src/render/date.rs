//! Publication date formatting

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, Locale};

/// Two-digit day, abbreviated month, two-digit year ("19 Mar 21")
pub const DATE_FORMAT: &str = "%d %b %y";

/// Resolve a BCP 47 style tag (`pt-BR`) or POSIX name (`pt_BR`)
pub fn parse_locale(tag: &str) -> Result<Locale> {
    let normalized = tag.replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| Error::UnknownLocale {
        locale: tag.to_string(),
    })
}

/// Parse a CMS timestamp
///
/// Accepts RFC 3339 as well as the `+0000` offset form the CMS emits.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .map_err(|_| Error::invalid_date(value))
}

/// Format a timestamp as a short localized date in its own offset
pub fn format_publication_date(value: &str, locale: Locale) -> Result<String> {
    let timestamp = parse_timestamp(value)?;
    Ok(timestamp.format_localized(DATE_FORMAT, locale).to_string())
}
