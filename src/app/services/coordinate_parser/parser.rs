//! Core coordinate grammar implementation
//!
//! Converts one raw coordinate value into decimal degrees, or into a tagged
//! invalid outcome carrying the reason. Invalid cells never surface as NaN.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Hemisphere letters, matched case-insensitively in any position
static HEMISPHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[NSEW]").expect("hemisphere pattern is valid"));

/// Degree, minute and second punctuation accepted in sexagesimal cells
static DMS_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[°'′’"″]"#).expect("DMS mark pattern is valid"));

/// Reason a coordinate cell failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCoordinate {
    /// Cell was empty or whitespace-only
    #[error("empty coordinate value")]
    Empty,

    /// Cell was neither a decimal number nor a sexagesimal expression
    #[error("not a number: '{0}'")]
    NotANumber(String),

    /// Cell looked sexagesimal but a token failed to parse, or there were
    /// more than three tokens
    #[error("bad degrees/minutes/seconds value: '{0}'")]
    BadSexagesimal(String),
}

/// Parse one raw coordinate cell into decimal degrees.
///
/// Plain decimal values are returned unchanged (no range validation); a
/// decimal comma is accepted as separator. Values containing DMS
/// punctuation, a hemisphere letter, or whitespace-separated numeric tokens
/// are interpreted as degrees, minutes and seconds, with minutes and
/// seconds defaulting to zero when absent.
///
/// A hemisphere letter overrides any numeric sign on the degrees token:
/// S or W force negative, N or E force positive. Without a letter, the
/// degrees token's own sign applies.
pub fn parse_coordinate(raw: &str) -> Result<f64, InvalidCoordinate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidCoordinate::Empty);
    }

    // Locales that write "28,6139" mean "28.6139"
    let value = trimmed.replace(',', ".");

    let has_marks = DMS_MARKS.is_match(&value);
    let hemisphere = HEMISPHERE
        .find(&value)
        .and_then(|m| m.as_str().chars().next())
        .map(|letter| letter.to_ascii_uppercase());
    let multi_token = value.split_whitespace().nth(1).is_some();

    if !has_marks && hemisphere.is_none() && !multi_token {
        return parse_plain(&value);
    }

    // Sexagesimal path. The hemisphere letter carries the sign; punctuation
    // only separates the numeric tokens, so both become whitespace.
    let stripped = HEMISPHERE.replace_all(&value, " ");
    let stripped = DMS_MARKS.replace_all(&stripped, " ");

    let tokens: Vec<&str> = stripped.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 3 {
        return Err(InvalidCoordinate::BadSexagesimal(trimmed.to_string()));
    }

    // Degrees, then optional minutes and seconds
    let mut parts = [0.0f64; 3];
    for (i, token) in tokens.iter().enumerate() {
        parts[i] = token
            .parse::<f64>()
            .map_err(|_| InvalidCoordinate::BadSexagesimal(trimmed.to_string()))?;
    }
    let [degrees, minutes, seconds] = parts;

    let decimal = degrees.abs() + minutes / 60.0 + seconds / 3600.0;

    let negative = match hemisphere {
        Some('S') | Some('W') => true,
        Some(_) => false,
        None => tokens[0].starts_with('-'),
    };

    Ok(if negative { -decimal } else { decimal })
}

/// Parse a whole cell as a plain decimal number
fn parse_plain(value: &str) -> Result<f64, InvalidCoordinate> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| InvalidCoordinate::NotANumber(value.to_string()))?;

    // "NaN" and "inf" satisfy f64::from_str but are not coordinates
    if !parsed.is_finite() {
        return Err(InvalidCoordinate::NotANumber(value.to_string()));
    }

    Ok(parsed)
}
