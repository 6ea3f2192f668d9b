//! This module handles the lines of `[TimingPoints]`:
//!
//! `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`
//!
//! `uninherited` of `1` makes a red point, anything else makes a green point whose second field
//! is the scaling value instead of the beat length.

use super::{DerivedValue, ParseError, Result, parse_field, parse_time};
use crate::{
    osu::{
        command::Section,
        model::{AnyTimingPoint, Inherited, TimingPoint, Uninherited},
    },
    util::round_to,
};

const SECTION: Section = Section::TimingPoints;

fn parse_finite(fields: &[&str], index: usize, name: &str) -> Result<f64> {
    let value: f64 = parse_field(fields, index, name, SECTION)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::malformed(
            SECTION,
            format!("field #{index} `{name}` is not finite: {value}"),
        ))
    }
}

/// Computes `60000 / beat_length` rounded to 2 decimal places.
///
/// # Errors
///
/// Returns [`ParseError::DivisionByZero`] if `beat_length` is zero.
pub fn bpm_from_beat_length(beat_length: f64) -> Result<f64> {
    if beat_length == 0.0 {
        return Err(ParseError::DivisionByZero(DerivedValue::Bpm));
    }
    Ok(round_to(60000.0 / beat_length, 2))
}

/// Computes the slider velocity multiplier of a green point rounded to 1 decimal place.
///
/// A positive value means no scaling, and a negative value is the inverse multiplier as a
/// percentage, so `-50` doubles the velocity.
///
/// # Errors
///
/// Returns [`ParseError::DivisionByZero`] if `bdsv` is zero.
pub fn multiplier_from_bdsv(bdsv: f64) -> Result<f64> {
    if bdsv == 0.0 {
        return Err(ParseError::DivisionByZero(DerivedValue::SliderVelocity));
    }
    let percentage = if bdsv > 0.0 { 1.0 } else { -(bdsv / 100.0) };
    Ok(round_to(1.0 / percentage, 1))
}

/// Parses a line of `[TimingPoints]`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedLine`] if a field is missing or not a number, and
/// [`ParseError::DivisionByZero`] if the beat length or the scaling value is zero.
pub fn parse_timing_point(line: &str) -> Result<AnyTimingPoint> {
    let fields: Vec<&str> = line.split(',').collect();
    let time = parse_time(&fields, 0, SECTION)?;
    let sample_set = parse_field(&fields, 3, "sampleSet", SECTION)?;
    let sample_index = parse_field(&fields, 4, "sampleIndex", SECTION)?;
    let volume = parse_field(&fields, 5, "volume", SECTION)?;
    let uninherited = fields
        .get(6)
        .ok_or_else(|| ParseError::malformed(SECTION, "missing field #6 `uninherited`"))?
        .trim()
        == "1";
    let effects: i64 = parse_field(&fields, 7, "effects", SECTION)?;
    let kiai = effects & 1 == 1;

    let point = if uninherited {
        let beat_length = parse_finite(&fields, 1, "beatLength")?;
        AnyTimingPoint::Red(TimingPoint {
            time,
            sample_set,
            sample_index,
            volume,
            kiai,
            payload: Uninherited {
                meter: parse_field(&fields, 2, "meter", SECTION)?,
                beat_length,
                bpm: bpm_from_beat_length(beat_length)?,
            },
        })
    } else {
        let bdsv = parse_finite(&fields, 1, "beatLength")?;
        AnyTimingPoint::Green(TimingPoint {
            time,
            sample_set,
            sample_index,
            volume,
            kiai,
            payload: Inherited {
                bdsv,
                multiplier: multiplier_from_bdsv(bdsv)?,
            },
        })
    };
    Ok(point)
}
