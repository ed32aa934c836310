use time::{OffsetDateTime, format_description::well_known::Iso8601};

/// Current UTC time as an RFC 3339 string, the format stored in every
/// `created_at` / `updated_at` column. Always nine fractional digits, so the
/// strings sort in time order.
pub fn now_rfc3339() -> crate::Result<String> {
    Ok(OffsetDateTime::now_utc().format(&Iso8601::DEFAULT)?)
}
