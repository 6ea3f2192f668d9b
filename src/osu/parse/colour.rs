//! This module handles the `Name : r,g,b` lines of `[Colours]`.

use itertools::Itertools;

use super::{ParseError, Result};
use crate::osu::command::{Rgb, Section};

fn component(raw: &str, name: &str) -> Result<u8> {
    raw.trim().parse().map_err(|_| {
        ParseError::malformed(
            Section::Colours,
            format!("`{name}` is not an integer in 0..=255: {raw:?}"),
        )
    })
}

/// Parses a line of `[Colours]` into a colour of the palette.
///
/// # Errors
///
/// Returns [`ParseError::MalformedLine`] if the line has no colon, does not have exactly three
/// components, or a component is not in `0..=255`.
pub fn parse_colour(line: &str) -> Result<Rgb> {
    let (_, value) = line
        .split_once(':')
        .ok_or_else(|| ParseError::malformed(Section::Colours, "expected `Name : r,g,b`"))?;
    let Some((r, g, b)) = value.trim().split(',').collect_tuple() else {
        return Err(ParseError::malformed(
            Section::Colours,
            "expected exactly 3 components `r,g,b`",
        ));
    };
    Ok(Rgb::new(
        component(r, "r")?,
        component(g, "g")?,
        component(b, "b")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triplets() {
        assert_eq!(parse_colour("Combo1 : 255,128,0"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(parse_colour("Combo2:0, 64 ,255"), Ok(Rgb::new(0, 64, 255)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            parse_colour("Combo1 255,128,0"),
            Err(ParseError::malformed(
                Section::Colours,
                "expected `Name : r,g,b`"
            ))
        );
        assert_eq!(
            parse_colour("Combo1 : 255,128"),
            Err(ParseError::malformed(
                Section::Colours,
                "expected exactly 3 components `r,g,b`"
            ))
        );
        assert_eq!(
            parse_colour("Combo1 : 255,128,0,7"),
            Err(ParseError::malformed(
                Section::Colours,
                "expected exactly 3 components `r,g,b`"
            ))
        );
        assert!(matches!(
            parse_colour("Combo1 : 256,0,0"),
            Err(ParseError::MalformedLine { .. })
        ));
    }
}
