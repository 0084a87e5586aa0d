use std::borrow::Cow;

use chrono::{DateTime, ParseError};
use chrono_tz::Tz;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::error::ImportError;

pub fn parse_timezone(name: &str) -> Result<Tz, ImportError> {
    Tz::from_str_insensitive(name.trim()).map_err(|_| ImportError::UnknownTimezone(name.to_string()))
}

/// Parses an RFC 2822 date (`Mon, 02 Jan 2023 10:30:00 +0000`) and moves it to `tz`.
/// The instant is kept, only the zone it is expressed in changes.
pub fn parse_pub_date(buf: &str, tz: &Tz) -> Result<DateTime<Tz>, ParseError> {
    let date_time = DateTime::parse_from_rfc2822(buf.trim())?;
    Ok(date_time.with_timezone(tz))
}

/// Percent-decodes a value. Returns None when a `%` is not followed by two hex digits,
/// or when the decoded bytes are not UTF-8.
pub fn decode_component(value: &str) -> Option<String> {
    if !has_valid_escapes(value) {
        return None;
    }
    urlencoding::decode(value).ok().map(Cow::into_owned)
}

fn has_valid_escapes(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.iter().enumerate()
        .filter(|(_, b)| **b == b'%')
        .all(|(i, _)| matches!(bytes.get(i + 1..i + 3), Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()))
}

pub fn decode_component_lossy(value: &str) -> String {
    decode_component(value).unwrap_or_else(|| value.to_string())
}

pub fn collapse_newlines(text: &str) -> String {
    lazy_static! {
        static ref NEWLINES_REGEX: Regex = Regex::new(r"[\r\n]+").unwrap();
    }
    NEWLINES_REGEX.replace_all(text, " ").to_string()
}

/// Last path segment of a URL, decoded. Query string and fragment are not part of it.
pub fn filename_from_url(url: &str) -> String {
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed.path_segments()
            .and_then(|mut segments| segments.next_back().map(|s| s.to_string()))
            .unwrap_or_default(),
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            path.rsplit('/').next().unwrap_or_default().to_string()
        }
    };

    decode_component_lossy(&segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pub_date() {
        let tz = parse_timezone("utc").unwrap();
        let date_time = parse_pub_date("Mon, 02 Jan 2023 10:30:00 +0000", &tz).unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-01-02 10:30:00");

        let tz = parse_timezone("America/New_York").unwrap();
        let date_time = parse_pub_date("Mon, 02 Jan 2023 10:30:00 +0000", &tz).unwrap();
        assert_eq!(date_time.format("%Y-%m-%d %H:%M:%S %z").to_string(), "2023-01-02 05:30:00 -0500");

        assert!(parse_pub_date("2023-01-02 10:30:00", &tz).is_err());
        assert!(parse_pub_date("", &tz).is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("europe/paris").unwrap(), Tz::Europe__Paris);
        assert!(matches!(parse_timezone("Mars/Olympus"), Err(ImportError::UnknownTimezone(_))));
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("%e4%bd%a0%e5%a5%bd-about").unwrap(), "你好-about");
        assert_eq!(decode_component("plain").unwrap(), "plain");
        assert_eq!(decode_component("50%25-off").unwrap(), "50%-off");
        assert!(decode_component("%ff%fe").is_none());
        assert!(decode_component("100%-real").is_none());
        assert!(decode_component("trailing%").is_none());
        assert!(decode_component("short%4").is_none());
        assert_eq!(decode_component_lossy("%ff"), "%ff");
        assert_eq!(decode_component_lossy("100%-real"), "100%-real");
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("one\r\ntwo\n\nthree"), "one two three");
        assert_eq!(collapse_newlines("single"), "single");
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(filename_from_url("https://example.com/uploads/cat.png"), "cat.png");
        assert_eq!(filename_from_url("https://example.com/uploads/cat.png?w=300#top"), "cat.png");
        assert_eq!(filename_from_url("https://example.com/uploads/my%20cat.png"), "my cat.png");
        assert_eq!(filename_from_url("uploads/dog.jpg?size=large"), "dog.jpg");
    }
}
