use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

/// `YYYY-MM-DD`, the format dates are stored and returned in.
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// `YYYYMMDD`
pub const COMPACT_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year][month][day]");

pub fn parse_iso_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, ISO_DATE)
}

/// Parse a date taken from a request path, in either `YYYY-MM-DD` or `YYYYMMDD` form.
pub fn parse_request_date(value: &str) -> Option<Date> {
    Date::parse(value, ISO_DATE)
        .or_else(|_| Date::parse(value, COMPACT_DATE))
        .ok()
}
