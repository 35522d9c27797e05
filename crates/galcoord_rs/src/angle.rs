//! Parsing and formatting of angle strings.
//!
//! Accepted forms:
//! - decimal: `"197.81"`, in the caller's unit
//! - sexagesimal: `"13:11:14.44"`, `"-62 47 25.5"`, `"10:30.5"`, leading field in the caller's unit
//! - hours with letters: `"13h11m14.44s"`, `"13h30"` (always hours)
//! - degrees with letters: `"-62d47m25.5s"`, `"-62°47′25.5″"`, `"62d30"` (always degrees)
//!
//! An unlettered field straight after `h`/`d` is minutes. A fractional
//! whole field cannot be followed by minutes or seconds.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::CoordError;
use crate::units::AngleUnit;

static SEXAGESIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-])?(\d+)(?:\s*:\s*|\s+)(\d+(?:\.\d*)?)(?:(?:\s*:\s*|\s+)(\d+(?:\.\d*)?))?$")
        .expect("static regex")
});

// A bare number after the whole field is minutes; seconds need lettered minutes first.
static HMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([+-])?(\d+(?:\.\d*)?)h(?:(\d+(?:\.\d*)?)m(?:(\d+(?:\.\d*)?)s?)?|(\d+(?:\.\d*)?))?$",
    )
    .expect("static regex")
});

static DMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^([+-])?(\d+(?:\.\d*)?)[d°](?:(\d+(?:\.\d*)?)[m'′](?:(\d+(?:\.\d*)?)[s"″]?)?|(\d+(?:\.\d*)?))?$"#,
    )
    .expect("static regex")
});

fn parse_error(text: &str, reason: &'static str) -> CoordError {
    CoordError::Parse {
        text: text.to_string(),
        reason,
    }
}

fn field(caps: &Captures<'_>, i: usize) -> f64 {
    caps.get(i)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Combine captured `[sign] whole [minutes [seconds]]` into a value of the
/// whole-field unit. Group 5, when present, holds unlettered minutes.
fn combine(caps: &Captures<'_>, text: &str) -> Result<f64, CoordError> {
    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    let whole = field(caps, 2);
    let minutes_group = if caps.get(5).is_some() { 5 } else { 3 };
    let minutes = field(caps, minutes_group);
    let seconds = field(caps, 4);

    if whole.fract() != 0.0 && (caps.get(minutes_group).is_some() || caps.get(4).is_some()) {
        return Err(parse_error(text, "fractional whole field cannot be followed by minutes"));
    }
    if minutes >= 60.0 {
        return Err(parse_error(text, "minutes must be below 60"));
    }
    if seconds >= 60.0 {
        return Err(parse_error(text, "seconds must be below 60"));
    }
    if caps.get(4).is_some() && minutes.fract() != 0.0 {
        return Err(parse_error(text, "fractional minutes cannot be followed by seconds"));
    }

    let value = whole + minutes / 60.0 + seconds / 3600.0;
    Ok(if negative { -value } else { value })
}

/// Parse an angle string into decimal degrees.
///
/// `unit` gives the meaning of decimal and colon-separated values. Lettered
/// forms carry their own unit and ignore it.
pub fn parse_angle(text: &str, unit: AngleUnit) -> Result<f64, CoordError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(parse_error(text, "empty string"));
    }

    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if let Some(caps) = HMS_RE.captures(&compact) {
        return Ok(AngleUnit::HourAngle.to_degrees(combine(&caps, text)?));
    }
    if let Some(caps) = DMS_RE.captures(&compact) {
        return combine(&caps, text);
    }
    if let Some(caps) = SEXAGESIMAL_RE.captures(trimmed) {
        if !unit.is_sexagesimal() {
            return Err(parse_error(
                text,
                "sexagesimal notation needs an hourangle or degree unit",
            ));
        }
        return Ok(unit.to_degrees(combine(&caps, text)?));
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(unit.to_degrees(v)),
        Ok(_) => Err(parse_error(text, "not a finite number")),
        Err(_) => Err(parse_error(text, "unrecognised angle format")),
    }
}

/// Format `value` as `[-]DD:MM:SS[.sss]` with `precision` decimals on the
/// seconds field. Rounding carries into minutes and the whole field.
pub fn format_sexagesimal(value: f64, precision: usize) -> String {
    let scale = 10_f64.powi(precision as i32);

    let ticks = (value.abs() * 3600.0 * scale).round();
    let sign = if value < 0.0 && ticks > 0.0 { "-" } else { "" };
    let per_minute = 60.0 * scale;
    let per_whole = 3600.0 * scale;

    let whole = (ticks / per_whole).floor();
    let rest = ticks - whole * per_whole;
    let minutes = (rest / per_minute).floor();
    let seconds = (rest - minutes * per_minute) / scale;

    if precision == 0 {
        format!("{sign}{:02}:{:02}:{:02}", whole as u64, minutes as u64, seconds as u64)
    } else {
        format!(
            "{sign}{:02}:{:02}:{:0width$.prec$}",
            whole as u64,
            minutes as u64,
            seconds,
            width = precision + 3,
            prec = precision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn colon_hours() {
        let deg = parse_angle("13:11:14.44", AngleUnit::HourAngle).unwrap();
        let expected = (13.0 + 11.0 / 60.0 + 14.44 / 3600.0) * 15.0;
        assert!((deg - expected).abs() < EPS);
    }

    #[test]
    fn colon_negative_degrees() {
        let deg = parse_angle("-62:47:25.5", AngleUnit::Degree).unwrap();
        assert!((deg + 62.790_416_666_666_67).abs() < EPS);
    }

    #[test]
    fn negative_zero_whole_field() {
        let deg = parse_angle("-00:30:00", AngleUnit::Degree).unwrap();
        assert!((deg + 0.5).abs() < EPS);
    }

    #[test]
    fn space_separated() {
        let deg = parse_angle("-50 00 51.40", AngleUnit::Degree).unwrap();
        assert!((deg + (50.0 + 51.4 / 3600.0)).abs() < EPS);
    }

    #[test]
    fn hours_and_minutes_only() {
        assert!((parse_angle("10:30", AngleUnit::HourAngle).unwrap() - 157.5).abs() < EPS);
        assert!((parse_angle("10:30.3", AngleUnit::Degree).unwrap() - 10.505).abs() < EPS);
    }

    #[test]
    fn lettered_forms_carry_their_unit() {
        let h = parse_angle("13h11m14.44s", AngleUnit::Degree).unwrap();
        let c = parse_angle("13:11:14.44", AngleUnit::HourAngle).unwrap();
        assert!((h - c).abs() < EPS);

        let d = parse_angle("-62d47m25.5s", AngleUnit::HourAngle).unwrap();
        assert!((d + 62.790_416_666_666_67).abs() < EPS);

        let u = parse_angle("-62°47′25.5″", AngleUnit::HourAngle).unwrap();
        assert!((u - d).abs() < EPS);

        assert!((parse_angle("12h", AngleUnit::Degree).unwrap() - 180.0).abs() < EPS);
    }

    #[test]
    fn unlettered_trailing_field_is_minutes() {
        assert!((parse_angle("13h30", AngleUnit::Degree).unwrap() - 202.5).abs() < EPS);
        assert!((parse_angle("13h 30.5", AngleUnit::Degree).unwrap() - 202.625).abs() < EPS);
        assert!((parse_angle("62d30", AngleUnit::HourAngle).unwrap() - 62.5).abs() < EPS);
        assert!((parse_angle("-62°30", AngleUnit::HourAngle).unwrap() + 62.5).abs() < EPS);
    }

    #[test]
    fn unlettered_seconds_follow_lettered_minutes() {
        let h = parse_angle("13h11m14.44", AngleUnit::Degree).unwrap();
        let c = parse_angle("13:11:14.44", AngleUnit::HourAngle).unwrap();
        assert!((h - c).abs() < EPS);
        let d = parse_angle("-62d47m25.5", AngleUnit::HourAngle).unwrap();
        assert!((d + 62.790_416_666_666_67).abs() < EPS);
    }

    #[test]
    fn lettered_forms_reject_ambiguous_fields() {
        for bad in ["1.5h30m", "1.5h30", "2.5d10m5s", "2.5d10", "13h30s", "13h60", "62d30m10m"] {
            assert!(
                matches!(parse_angle(bad, AngleUnit::Degree), Err(CoordError::Parse { .. })),
                "accepted {bad:?}"
            );
        }
        assert!((parse_angle("1.5h", AngleUnit::Degree).unwrap() - 22.5).abs() < EPS);
        assert!((parse_angle("2.5d", AngleUnit::HourAngle).unwrap() - 2.5).abs() < EPS);
    }

    #[test]
    fn decimal_uses_unit() {
        assert!((parse_angle("197.81", AngleUnit::Degree).unwrap() - 197.81).abs() < EPS);
        assert!((parse_angle("1.5", AngleUnit::HourAngle).unwrap() - 22.5).abs() < EPS);
        assert!((parse_angle(" -0.25 ", AngleUnit::Degree).unwrap() + 0.25).abs() < EPS);
    }

    #[test]
    fn malformed_strings() {
        for bad in ["", "   ", "abc", "13:xx:00", "1:2:3:4", "12h99m", "inf", "NaN"] {
            assert!(
                matches!(parse_angle(bad, AngleUnit::Degree), Err(CoordError::Parse { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn out_of_range_minutes_and_seconds() {
        assert!(parse_angle("10:60:00", AngleUnit::Degree).is_err());
        assert!(parse_angle("10:59:60", AngleUnit::Degree).is_err());
        assert!(parse_angle("10:30.5:10", AngleUnit::Degree).is_err());
    }

    #[test]
    fn sexagesimal_needs_hour_or_degree_unit() {
        assert!(parse_angle("1:30:00", AngleUnit::Radian).is_err());
        assert!(parse_angle("1.5", AngleUnit::Radian).is_ok());
    }

    #[test]
    fn format_whole_seconds() {
        assert_eq!(format_sexagesimal(10.5, 0), "10:30:00");
        assert_eq!(format_sexagesimal(0.0, 0), "00:00:00");
    }

    #[test]
    fn format_with_decimals() {
        assert_eq!(format_sexagesimal(-62.790_416_666_666_67, 1), "-62:47:25.5");
        assert_eq!(format_sexagesimal(13.187_344_444_444_444, 2), "13:11:14.44");
    }

    #[test]
    fn format_drops_sign_when_rounded_to_zero() {
        assert_eq!(format_sexagesimal(-1e-9, 2), "00:00:00.00");
        assert_eq!(format_sexagesimal(-1e-9, 0), "00:00:00");
        assert_eq!(format_sexagesimal(-0.0, 1), "00:00:00.0");
        assert_eq!(format_sexagesimal(-0.01, 2), "-00:00:36.00");
    }

    #[test]
    fn format_carries_rounding() {
        assert_eq!(format_sexagesimal(0.999_999_9, 0), "01:00:00");
        assert_eq!(format_sexagesimal(359.999_999_9, 2), "360:00:00.00");
    }
}
