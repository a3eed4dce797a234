//! Wrappers for the catalog of remote operations.
//!
//! Each method builds a parameter map and delegates to
//! [`Client::call`](crate::Client::call); they add no transport logic of their
//! own. IDs fall back to the per-client defaults in
//! [`ClientConfig`](crate::ClientConfig) when the argument is `None`.

mod campaigns;
mod clients;
mod subscribers;
mod user;

pub use campaigns::CampaignDraft;

use chrono::NaiveDateTime;

use crate::error::ClientError;

/// Wire format for API timestamps.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pick an explicit ID or the configured default.
pub(crate) fn pick_id<'a>(
    given: Option<&'a str>,
    default: &'a Option<String>,
    what: &'static str,
) -> Result<&'a str, ClientError> {
    given
        .or(default.as_deref())
        .ok_or(ClientError::MissingId(what))
}

/// Render an optional timestamp in the API's `Y-m-d H:M:S` format; `None`
/// falls back to the epoch ("everything"), matching the original client.
pub(crate) fn format_date(date: Option<NaiveDateTime>) -> String {
    date.unwrap_or(chrono::DateTime::UNIX_EPOCH.naive_utc())
        .format(DATE_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_prefer_explicit_id() {
        let default = Some("fallback".to_owned());
        assert_eq!(pick_id(Some("given"), &default, "list ID").unwrap(), "given");
        assert_eq!(pick_id(None, &default, "list ID").unwrap(), "fallback");
    }

    #[test]
    fn test_should_error_when_no_id_available() {
        let err = pick_id(None, &None, "list ID").unwrap_err();
        assert!(matches!(err, ClientError::MissingId("list ID")));
    }

    #[test]
    fn test_should_format_dates_for_the_wire() {
        let date = NaiveDateTime::parse_from_str("2009-05-18 14:30:00", DATE_FORMAT).unwrap();
        assert_eq!(format_date(Some(date)), "2009-05-18 14:30:00");
        assert_eq!(format_date(None), "1970-01-01 00:00:00");
    }
}
