//! Date helper functions

use crate::content::EntryError;

/// Lowercase month abbreviations used in display dates
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Format a `YYYY-MM-DD` date for display
///
/// # Examples
/// ```ignore
/// display_date("2024-03-07") // -> "7 mar. 2024"
/// ```
pub fn display_date(raw: &str) -> Result<String, EntryError> {
    let malformed = || EntryError::MalformedDate(raw.to_string());

    let mut parts = raw.split('-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => (year, month, day),
        _ => return Err(malformed()),
    };

    let month: usize = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;

    let month_name = month
        .checked_sub(1)
        .and_then(|i| MONTH_ABBREVIATIONS.get(i))
        .ok_or_else(|| EntryError::MonthOutOfRange {
            date: raw.to_string(),
            month,
        })?;

    Ok(format!("{} {}. {}", day, month_name, year))
}
