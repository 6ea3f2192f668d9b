//! This module handles the lines of `[HitObjects]`:
//!
//! `x,y,time,type,hitSound,objectParams,hitSample`
//!
//! and assigns the combo number and the combo colour to each object. The assignment depends on
//! the objects before, so the state is carried from line to line by [`ComboCursor`].

use super::{ParseError, Result, parse_field, parse_time};
use crate::osu::{
    command::{HitObjectType, Position, Rgb, Section},
    model::HitObject,
};

const SECTION: Section = Section::HitObjects;

/// The combo and colour state after a hit object.
///
/// The initial state has no previous object, so the first object always starts a combo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComboCursor {
    combo_index: u32,
    colour_index: usize,
    previous: Option<HitObjectType>,
}

impl ComboCursor {
    /// 1-based number of the last object in its combo, or 0 before any object.
    #[must_use]
    pub const fn combo_index(&self) -> u32 {
        self.combo_index
    }

    /// Palette index of the current combo colour.
    #[must_use]
    pub const fn colour_index(&self) -> usize {
        self.colour_index
    }

    /// Whether an object of `object_type` following this state starts a new combo.
    ///
    /// That is when it has the new combo bit, is the first object, or follows a spinner.
    #[must_use]
    pub fn starts_combo(&self, object_type: HitObjectType) -> bool {
        object_type.is_new_combo() || self.previous.is_none_or(HitObjectType::is_spinner)
    }

    /// Advances the state over an object of `object_type`, with a palette of `palette_len` colours.
    ///
    /// A new combo moves the colour forward by one plus the colour skip bits, except that a
    /// spinner does not add the one.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyPalette`] if a new combo starts while the palette is empty.
    pub fn advance(self, object_type: HitObjectType, palette_len: usize) -> Result<Self> {
        let mut next = Self {
            previous: Some(object_type),
            ..self
        };
        if self.starts_combo(object_type) {
            if palette_len == 0 {
                return Err(ParseError::EmptyPalette);
            }
            let mut increment = object_type.colour_skip() as usize;
            if !object_type.is_spinner() {
                increment += 1;
            }
            next.colour_index = (self.colour_index + increment) % palette_len;
            next.combo_index = 0;
        }
        next.combo_index += 1;
        Ok(next)
    }
}

/// Parses a line of `[HitObjects]`, returning the advanced cursor and the object.
///
/// # Errors
///
/// Returns [`ParseError::MalformedLine`] if one of the first five fields is missing or not a
/// number, and [`ParseError::EmptyPalette`] if there is no colour to assign.
pub fn parse_hit_object(
    line: &str,
    cursor: ComboCursor,
    palette: &[Rgb],
) -> Result<(ComboCursor, HitObject)> {
    let fields: Vec<&str> = line.split(',').collect();
    let position = Position::new(
        parse_field(&fields, 0, "x", SECTION)?,
        parse_field(&fields, 1, "y", SECTION)?,
    );
    let time = parse_time(&fields, 2, SECTION)?;
    let object_type = HitObjectType(parse_field(&fields, 3, "type", SECTION)?);
    let hitsound = parse_field(&fields, 4, "hitSound", SECTION)?;

    let cursor = cursor.advance(object_type, palette.len())?;
    let colour = *palette
        .get(cursor.colour_index)
        .ok_or(ParseError::EmptyPalette)?;
    let object = HitObject {
        position,
        time,
        object_type,
        hitsound,
        colour,
        colour_index: cursor.colour_index,
        combo_index: cursor.combo_index,
        extras: fields
            .get(5..)
            .unwrap_or_default()
            .iter()
            .map(|&field| field.to_owned())
            .collect(),
    };
    Ok((cursor, object))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PALETTE: [Rgb; 4] = Rgb::DEFAULT_PALETTE;

    fn run(lines: &[&str]) -> Vec<HitObject> {
        let mut cursor = ComboCursor::default();
        lines
            .iter()
            .map(|line| {
                let (next, object) = parse_hit_object(line, cursor, &PALETTE).unwrap();
                cursor = next;
                object
            })
            .collect()
    }

    fn combo_and_colour(objects: &[HitObject]) -> Vec<(u32, usize)> {
        objects
            .iter()
            .map(|object| (object.combo_index, object.colour_index))
            .collect()
    }

    #[test]
    fn parses_fields() {
        let objects = run(&["256,192,1500,6,2,B|300:100,1,140,2|0,0:0|0:0,0:0:0:0:"]);
        let object = &objects[0];
        assert_eq!(object.position, Position::new(256, 192));
        assert_eq!(object.time, 1500);
        assert!(object.object_type.is_slider());
        assert_eq!(object.hitsound, 2);
        assert_eq!(
            object.extras,
            vec!["B|300:100", "1", "140", "2|0", "0:0|0:0", "0:0:0:0:"]
        );
    }

    #[test]
    fn combo_continues_without_new_combo_bit() {
        let objects = run(&["0,0,0,5,0", "0,0,100,1,0", "0,0,200,2,0"]);
        assert_eq!(combo_and_colour(&objects), vec![(1, 1), (2, 1), (3, 1)]);
        assert_eq!(objects[1].colour, PALETTE[1]);
    }

    #[test]
    fn first_object_starts_a_combo_without_the_bit() {
        let objects = run(&["0,0,0,1,0", "0,0,100,1,0"]);
        assert_eq!(combo_and_colour(&objects), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn new_combo_moves_to_the_next_colour_and_wraps() {
        let objects = run(&[
            "0,0,0,5,0",
            "0,0,100,5,0",
            "0,0,200,5,0",
            "0,0,300,5,0",
            "0,0,400,5,0",
        ]);
        assert_eq!(
            combo_and_colour(&objects),
            vec![(1, 1), (1, 2), (1, 3), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn colour_skip_bits() {
        // 5 | (2 << 4): skips two more colours.
        let objects = run(&["0,0,0,5,0", "0,0,100,37,0"]);
        assert_eq!(combo_and_colour(&objects), vec![(1, 1), (1, 0)]);
    }

    #[test]
    fn spinner_keeps_colour_and_forces_next_combo() {
        let objects = run(&["0,0,0,5,0", "256,192,100,12,0,500", "0,0,700,1,0"]);
        assert_eq!(combo_and_colour(&objects), vec![(1, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn empty_palette() {
        assert_eq!(
            parse_hit_object("0,0,0,5,0", ComboCursor::default(), &[]),
            Err(ParseError::EmptyPalette)
        );
    }

    #[test]
    fn malformed_fields() {
        assert!(matches!(
            parse_hit_object("0,0,0,5", ComboCursor::default(), &PALETTE),
            Err(ParseError::MalformedLine { .. })
        ));
        assert!(matches!(
            parse_hit_object("0,0,0,-1,0", ComboCursor::default(), &PALETTE),
            Err(ParseError::MalformedLine { .. })
        ));
    }

    #[test]
    fn fractional_time_is_truncated() {
        let objects = run(&["64,96,1500.9,1,0"]);
        assert_eq!(objects[0].time, 1500);
        assert!(objects[0].extras.is_empty());
    }

    #[test]
    fn failed_line_does_not_move_the_cursor() {
        let cursor = ComboCursor::default();
        assert!(parse_hit_object("x,0,0,5,0", cursor, &PALETTE).is_err());
        assert_eq!(cursor.combo_index(), 0);
        assert!(cursor.starts_combo(HitObjectType(1)));
    }
}
